//! Command implementations for the conserv CLI

pub mod align;
pub mod config;
pub mod list;

use anyhow::{Context, Result};
use conserv_core::{SequenceCatalog, SequenceRecord};
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Parse a manually entered sequence of the form `ID=SYMBOLS`
pub fn parse_manual_sequence(entry: &str) -> CliResult<SequenceRecord> {
    let (id, symbols) = entry.split_once('=').ok_or_else(|| {
        CliError::invalid_format(format!("expected ID=SYMBOLS, got '{}'", entry))
    })?;

    let id = id.trim();
    let symbols = symbols.trim();
    if id.is_empty() {
        return Err(CliError::invalid_format(format!("missing sequence id in '{}'", entry)));
    }
    if symbols.is_empty() {
        return Err(CliError::invalid_format(format!("sequence '{}' has no symbols", id)));
    }

    Ok(SequenceRecord::new(id, "manual entry", symbols.to_ascii_uppercase()))
}

/// Collect sequences from FASTA files, then manual entries, into one catalog.
/// Later entries replace earlier ones with the same id.
pub fn build_catalog(fasta: &[PathBuf], manual: &[String]) -> Result<SequenceCatalog> {
    let mut catalog = SequenceCatalog::new();

    for path in fasta {
        if !path.exists() {
            return Err(CliError::file_not_found(path.clone()).into());
        }
        catalog
            .load_fasta(path)
            .with_context(|| format!("Failed to load sequences from {}", path.display()))?;
    }

    for entry in manual {
        catalog.insert(parse_manual_sequence(entry)?);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_manual_sequence() {
        let record = parse_manual_sequence("SEQ9=atcg").unwrap();
        assert_eq!(record.id(), "SEQ9");
        assert_eq!(record.symbols(), b"ATCG");

        assert!(matches!(parse_manual_sequence("ATCG"), Err(CliError::InvalidFormat { .. })));
        assert!(matches!(parse_manual_sequence("=ATCG"), Err(CliError::InvalidFormat { .. })));
        assert!(matches!(parse_manual_sequence("SEQ9="), Err(CliError::InvalidFormat { .. })));
    }

    #[test]
    fn test_build_catalog_merges_sources() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">SEQ1 Human\nATCGATCGATCG\n>SEQ2 Mouse\nATCGATCGATGG").unwrap();

        let catalog = build_catalog(
            &[file.path().to_path_buf()],
            &["SEQ2=ACGT".to_string(), "SEQ3=TTGA".to_string()],
        )
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["SEQ1", "SEQ2", "SEQ3"]);
        assert_eq!(catalog.get("SEQ2").unwrap().symbols(), b"ACGT");
    }

    #[test]
    fn test_build_catalog_missing_file() {
        let err = build_catalog(&[PathBuf::from("/nonexistent/input.fa")], &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound { .. })
        ));
    }
}
