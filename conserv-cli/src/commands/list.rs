//! List command implementation

use anyhow::Result;
use std::path::PathBuf;

use super::build_catalog;

pub fn execute(fasta: Vec<PathBuf>, seqs: Vec<String>) -> Result<()> {
    let catalog = build_catalog(&fasta, &seqs)?;

    if catalog.is_empty() {
        println!("No sequences loaded.");
        return Ok(());
    }

    let width = catalog.iter().map(|r| r.id().len()).max().unwrap_or(2).max(2);
    println!("{:<width$}  {:>8}  {}", "ID", "LENGTH", "DESCRIPTION", width = width);
    for record in catalog.iter() {
        println!(
            "{:<width$}  {:>8}  {}",
            record.id(),
            record.len(),
            record.description(),
            width = width
        );
    }
    log::info!("{} sequences listed", catalog.len());

    Ok(())
}
