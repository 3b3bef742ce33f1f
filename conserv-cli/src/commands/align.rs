//! Align command implementation

use anyhow::{Context, Result};
use conserv_core::{
    AlignerKind, AlignmentReport, Engine, EngineOutput, ResourceBudget, Schedule, ScoringConfig,
    SequenceCatalog, SequenceRecord,
};
use serde::Serialize;
use std::path::PathBuf;

use super::build_catalog;
use crate::config::Config;
use crate::error::CliError;

/// Inputs and overrides collected from the command line
#[derive(Debug, Default)]
pub struct AlignArgs {
    pub fasta: Vec<PathBuf>,
    pub seqs: Vec<String>,
    pub ids: Vec<String>,
    pub match_score: Option<i32>,
    pub mismatch_penalty: Option<i32>,
    pub gap_penalty: Option<i32>,
    pub max_cells: Option<u64>,
    pub wavefront: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ids: Vec<&'a str>,
    aligner: AlignerKind,
    #[serde(flatten)]
    output: &'a EngineOutput,
}

pub fn execute(config: &Config, args: AlignArgs) -> Result<()> {
    let catalog = build_catalog(&args.fasta, &args.seqs)?;
    if catalog.is_empty() {
        return Err(CliError::validation("no sequences loaded; use --fasta or --seq").into());
    }

    let records = select_records(&catalog, &args.ids)?;
    let ids: Vec<&str> = records.iter().map(SequenceRecord::id).collect();
    let kind = AlignerKind::for_count(records.len()).map_err(CliError::from)?;

    let mut engine_config = config.engine_config();
    engine_config.scoring = ScoringConfig {
        match_score: args.match_score.unwrap_or(engine_config.scoring.match_score),
        mismatch_penalty: args.mismatch_penalty.unwrap_or(engine_config.scoring.mismatch_penalty),
        gap_penalty: args.gap_penalty.unwrap_or(engine_config.scoring.gap_penalty),
    };
    if let Some(max_cells) = args.max_cells {
        engine_config.budget = ResourceBudget::new(max_cells);
    }
    if args.wavefront {
        engine_config.schedule = Schedule::Wavefront;
    }

    log::info!("Aligning {} with {}", ids.join(", "), kind.name());
    let output = Engine::new(engine_config)
        .run(&records)
        .map_err(CliError::from)?;

    if args.json {
        let report = JsonReport { ids, aligner: kind, output: &output };
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
        println!("{}", text);
    } else {
        print!("{}", render_text(&ids, &output));
    }

    Ok(())
}

/// Selected ids in the order given, or every catalog record when none are
fn select_records(catalog: &SequenceCatalog, ids: &[String]) -> Result<Vec<SequenceRecord>, CliError> {
    if ids.is_empty() {
        return Ok(catalog.records().to_vec());
    }
    Ok(catalog.select(ids)?)
}

fn render_text(ids: &[&str], output: &EngineOutput) -> String {
    match output {
        EngineOutput::Alignment(result) => AlignmentReport::new(result, ids.to_vec()).to_string(),
        EngineOutput::Lcs(lcs) => format!("> Sequences: {}\n{}", ids.join(", "), lcs),
    }
}
