use conserv_core::{NWayLcsEngine, PairwiseAligner, ScoringConfig, SequenceRecord, TripleAligner};
use proptest::prelude::*;

fn rec(id: &str, seq: &str) -> SequenceRecord {
    SequenceRecord::new(id, "", seq)
}

fn rescore(rows: &[String], scoring: &ScoringConfig) -> i32 {
    let rows: Vec<&[u8]> = rows.iter().map(|r| r.as_bytes()).collect();
    (0..rows[0].len())
        .map(|c| {
            let column: Vec<u8> = rows.iter().map(|r| r[c]).collect();
            scoring.column_cost(&column)
        })
        .sum()
}

fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}

fn brute_force_lcs(seqs: &[String]) -> usize {
    let shortest = seqs.iter().min_by_key(|s| s.len()).unwrap().as_bytes();
    (0u32..(1 << shortest.len()))
        .map(|mask| {
            shortest
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .collect::<Vec<u8>>()
        })
        .filter(|candidate| seqs.iter().all(|s| is_subsequence(candidate, s.as_bytes())))
        .map(|candidate| candidate.len())
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pairwise_alignment_rescores(a in "[ACGT]{1,16}", b in "[ACGT]{1,16}") {
        let scoring = ScoringConfig::default();
        let result = PairwiseAligner::new(scoring).align(&rec("a", &a), &rec("b", &b)).unwrap();
        let rows = result.aligned_sequences();
        prop_assert_eq!(rows[0].len(), rows[1].len());
        prop_assert_eq!(rows[0].replace('-', ""), a);
        prop_assert_eq!(rows[1].replace('-', ""), b);
        prop_assert_eq!(rescore(rows, &scoring), result.score());
    }

    #[test]
    fn pairwise_score_is_symmetric(a in "[ACGT]{1,16}", b in "[ACGT]{1,16}") {
        let aligner = PairwiseAligner::default();
        let forward = aligner.align(&rec("a", &a), &rec("b", &b)).unwrap();
        let backward = aligner.align(&rec("b", &b), &rec("a", &a)).unwrap();
        prop_assert_eq!(forward.score(), backward.score());
    }

    #[test]
    fn triple_alignment_rescores(
        a in "[ACGT]{1,7}",
        b in "[ACGT]{1,7}",
        c in "[ACGT]{1,7}",
    ) {
        let scoring = ScoringConfig::default();
        let result = TripleAligner::new(scoring)
            .align(&rec("a", &a), &rec("b", &b), &rec("c", &c))
            .unwrap();
        let rows = result.aligned_sequences();
        prop_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        prop_assert!(rows.iter().all(|r| !r.is_empty()));
        prop_assert_eq!(rescore(rows, &scoring), result.score());
    }

    #[test]
    fn lcs_matches_brute_force(seqs in prop::collection::vec("[ACG]{1,6}", 4..=5)) {
        let records: Vec<SequenceRecord> = seqs.iter().map(|s| rec("s", s)).collect();
        let lcs = NWayLcsEngine::default().compute(&records).unwrap();
        prop_assert_eq!(lcs.length, brute_force_lcs(&seqs));
        prop_assert_eq!(lcs.sequence.len(), lcs.length);
        for s in &seqs {
            prop_assert!(is_subsequence(lcs.sequence.as_bytes(), s.as_bytes()));
        }
    }
}
