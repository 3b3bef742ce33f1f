//! Aligner selection by sequence count.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::budget::ResourceBudget;
use crate::error::{AlignError, AlignResult};
use crate::nway::{NWayLcsEngine, Schedule, MIN_SEQUENCES};
use crate::pairwise::PairwiseAligner;
use crate::result::{AlignmentResult, LcsResult};
use crate::scoring::ScoringConfig;
use crate::triple::TripleAligner;
use crate::types::{Alphabet, SequenceRecord};

/// Settings shared by every aligner an `Engine` may select
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub budget: ResourceBudget,
    #[serde(default)]
    pub alphabet: Alphabet,
    #[serde(default)]
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignerKind {
    Pairwise,
    Triple,
    NWayLcs,
}

impl AlignerKind {
    pub fn for_count(count: usize) -> AlignResult<Self> {
        match count {
            2 => Ok(AlignerKind::Pairwise),
            3 => Ok(AlignerKind::Triple),
            n if n >= MIN_SEQUENCES => Ok(AlignerKind::NWayLcs),
            n => Err(AlignError::invalid_input(format!(
                "at least 2 sequences are required, got {}",
                n
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlignerKind::Pairwise => "pairwise Needleman-Wunsch",
            AlignerKind::Triple => "three-way Needleman-Wunsch",
            AlignerKind::NWayLcs => "N-way LCS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineOutput {
    Alignment(AlignmentResult),
    Lcs(LcsResult),
}

/// Runs whichever aligner fits the number of input sequences.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run(&self, records: &[SequenceRecord]) -> AlignResult<EngineOutput> {
        let kind = AlignerKind::for_count(records.len())?;
        for record in records {
            if record.is_empty() {
                return Err(AlignError::invalid_input(format!(
                    "sequence '{}' is empty",
                    record.id()
                )));
            }
            self.config.alphabet.validate(record)?;
        }

        log::info!("Running {} on {} sequences", kind.name(), records.len());
        let start = Instant::now();

        let output = match kind {
            AlignerKind::Pairwise => EngineOutput::Alignment(
                PairwiseAligner::new(self.config.scoring)
                    .with_budget(self.config.budget)
                    .align_records(records)?,
            ),
            AlignerKind::Triple => EngineOutput::Alignment(
                TripleAligner::new(self.config.scoring)
                    .with_budget(self.config.budget)
                    .align_records(records)?,
            ),
            AlignerKind::NWayLcs => EngineOutput::Lcs(
                NWayLcsEngine::new(self.config.budget)
                    .with_schedule(self.config.schedule)
                    .compute(records)?,
            ),
        };

        log::debug!("{} finished in {:.3}s", kind.name(), start.elapsed().as_secs_f64());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(seqs: &[&str]) -> Vec<SequenceRecord> {
        seqs.iter()
            .enumerate()
            .map(|(i, s)| SequenceRecord::new(format!("seq{}", i + 1), "", *s))
            .collect()
    }

    #[test]
    fn test_kind_for_count() {
        assert!(AlignerKind::for_count(0).is_err());
        assert!(AlignerKind::for_count(1).is_err());
        assert_eq!(AlignerKind::for_count(2).unwrap(), AlignerKind::Pairwise);
        assert_eq!(AlignerKind::for_count(3).unwrap(), AlignerKind::Triple);
        assert_eq!(AlignerKind::for_count(4).unwrap(), AlignerKind::NWayLcs);
        assert_eq!(AlignerKind::for_count(9).unwrap(), AlignerKind::NWayLcs);
    }

    #[test]
    fn test_dispatch() {
        let engine = Engine::default();
        assert!(matches!(
            engine.run(&records(&["ACGT", "ACGA"])).unwrap(),
            EngineOutput::Alignment(ref r) if r.aligned_sequences().len() == 2
        ));
        assert!(matches!(
            engine.run(&records(&["ACGT", "ACGA", "ACTT"])).unwrap(),
            EngineOutput::Alignment(ref r) if r.aligned_sequences().len() == 3
        ));
        assert!(matches!(
            engine.run(&records(&["ACGT", "ACGA", "ACTT", "AGT"])).unwrap(),
            EngineOutput::Lcs(_)
        ));
    }

    #[test]
    fn test_alphabet_enforced() {
        let engine = Engine::new(EngineConfig {
            alphabet: Alphabet::Dna,
            ..Default::default()
        });
        let err = engine.run(&records(&["ACGT", "ACGU"])).unwrap_err();
        assert!(matches!(err, AlignError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_scoring_rejected() {
        let engine = Engine::new(EngineConfig {
            scoring: ScoringConfig { match_score: 1, mismatch_penalty: -1, gap_penalty: 1 },
            ..Default::default()
        });
        let err = engine.run(&records(&["ACGT", "ACGT"])).unwrap_err();
        assert!(matches!(err, AlignError::Configuration(_)));
    }

    #[test]
    fn test_output_serializes_with_kind_tag() {
        let output = Engine::default()
            .run(&records(&["ACGT", "ACGT", "ACGT", "ACGT"]))
            .unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["kind"], "lcs");
        assert_eq!(value["length"], 4);
        assert_eq!(value["sequence"], "ACGT");
    }
}
