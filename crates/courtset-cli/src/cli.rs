use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Build labeled text datasets from legal-decision PDF documents.
#[derive(Debug, Parser)]
#[command(name = "courtset", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract text from one PDF to stdout
    Extract {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip normalization, printing raw reconstructed text
        #[arg(long)]
        raw: bool,
    },

    /// Build a JSONL dataset from a directory of PDFs
    Build {
        /// Directory containing `<case>_<YYYY-MM-DD>.pdf` files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output JSONL file
        #[arg(long, short)]
        output: PathBuf,

        /// Existing JSONL exports to deduplicate against (their records are
        /// carried into the output)
        #[arg(long)]
        merge: Vec<PathBuf>,

        /// Minimum character count for a usable record
        #[arg(long, default_value_t = courtset::MIN_TEXT_CHARS)]
        min_chars: usize,

        /// Also write a CSV summary (case, date, text length, source file)
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Merge JSONL exports, deduplicating by case number
    Merge {
        /// Input JSONL files, earliest takes precedence
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSONL file
        #[arg(long, short)]
        output: PathBuf,
    },
}

/// Output format for the extract subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// A single JSON object with text and page count
    Json,
}
