//! Command line argument parsing for the Solace CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Solace - a retrieval-based support chatbot engine
#[derive(Parser, Debug, Clone)]
#[command(name = "solace")]
#[command(about = "A retrieval-based support chatbot engine for mental health queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SolaceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SolaceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ask a question and print the selected reply
    #[command(name = "ask")]
    Ask(AskArgs),

    /// Print autocomplete suggestions for a query fragment
    #[command(name = "suggest")]
    Suggest(SuggestArgs),

    /// Print the canonical normalized form of a text
    #[command(name = "normalize")]
    Normalize(NormalizeArgs),

    /// Interactive question/answer loop on stdin
    #[command(name = "repl")]
    Repl(SourceArgs),
}

/// Data-source file options shared by the query commands.
#[derive(Parser, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the intent catalog JSON file ({"intents": [...]})
    #[arg(long, env = "SOLACE_INTENTS")]
    pub intents: Option<PathBuf>,

    /// Path to the QA table JSON file ([{"question", "answer"}, ...])
    #[arg(long, env = "SOLACE_QA")]
    pub qa: Option<PathBuf>,
}

/// Arguments for the ask command.
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The query text
    pub query: String,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Arguments for the suggest command.
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The query fragment to complete
    pub query: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value_t = crate::suggest::DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Arguments for the normalize command.
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// The text to normalize
    pub text: String,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
