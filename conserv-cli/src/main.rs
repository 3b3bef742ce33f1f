use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use commands::align::AlignArgs;
use config::Config;
use error::CliError;

#[derive(Parser)]
#[command(name = "conserv")]
#[command(about = "conserv - exact multiple sequence comparison")]
#[command(version)]
#[command(long_about = "
conserv aligns small sets of biological sequences exactly. Two sequences are
aligned with Needleman-Wunsch, three with a sum-of-pairs three-way
Needleman-Wunsch, and four or more are reduced to their longest common
subsequence.

Examples:
  conserv list --fasta sequences.fa
  conserv align --fasta sequences.fa --ids SEQ1,SEQ2
  conserv align --seq a=GATTACA --seq b=GCATGCT --seq c=GATACA --json
  conserv align --fasta sequences.fa --wavefront --threads 8
  conserv config --example > conserv.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two or three sequences, or find the LCS of four or more
    Align {
        /// Sequence file (FASTA/FASTQ, optionally gzipped)
        #[arg(long)]
        fasta: Vec<PathBuf>,

        /// Sequence entered directly as ID=SYMBOLS
        #[arg(long)]
        seq: Vec<String>,

        /// Comma-separated ids to align (default: every loaded sequence)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,

        /// Score for identical symbols
        #[arg(long = "match", allow_negative_numbers = true)]
        match_score: Option<i32>,

        /// Score for differing symbols
        #[arg(long, allow_negative_numbers = true)]
        mismatch: Option<i32>,

        /// Score for a symbol against a gap
        #[arg(long, allow_negative_numbers = true)]
        gap: Option<i32>,

        /// Largest DP state space allowed, in cells
        #[arg(long)]
        max_cells: Option<u64>,

        /// Fill the N-way LCS state space wavefront by wavefront in parallel
        #[arg(long)]
        wavefront: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sequences found in the given inputs
    List {
        /// Sequence file (FASTA/FASTQ, optionally gzipped)
        #[arg(long)]
        fasta: Vec<PathBuf>,

        /// Sequence entered directly as ID=SYMBOLS
        #[arg(long)]
        seq: Vec<String>,
    },

    /// Show the effective configuration or an example one
    Config {
        /// Print the default configuration instead of the loaded one
        #[arg(long)]
        example: bool,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose, cli.quiet)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    let threads = cli.threads.unwrap_or(config.general.threads);
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread count")?;
        log::debug!("Using {} threads", threads);
    }

    match cli.command {
        Commands::Align {
            fasta,
            seq,
            ids,
            match_score,
            mismatch,
            gap,
            max_cells,
            wavefront,
            json,
        } => {
            commands::align::execute(
                &config,
                AlignArgs {
                    fasta,
                    seqs: seq,
                    ids,
                    match_score,
                    mismatch_penalty: mismatch,
                    gap_penalty: gap,
                    max_cells,
                    wavefront,
                    json,
                },
            )?;
        }

        Commands::List { fasta, seq } => {
            commands::list::execute(fasta, seq)?;
        }

        Commands::Config { example, out } => {
            commands::config::execute(&config, example, out)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => error::print_error_and_exit(cli_err),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
