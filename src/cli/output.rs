//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SolaceArgs};
use crate::error::Result;
use crate::matcher::Reply;

/// Result structure for the ask command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResult {
    pub query: String,
    pub response: String,
    pub score: f64,
}

impl AskResult {
    pub fn new(query: &str, reply: Reply) -> Self {
        AskResult {
            query: query.to_string(),
            response: reply.text,
            score: reply.score,
        }
    }
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Result structure for the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub text: String,
    pub normalized: String,
}

/// Emit a result in the configured output format.
///
/// In human format, prints `human_lines` as-is; in JSON format, serializes
/// `payload` (pretty-printed when `--pretty` is set).
pub fn emit<T: Serialize>(human_lines: &[String], payload: &T, args: &SolaceArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for line in human_lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(payload)?
            } else {
                serde_json::to_string(payload)?
            };
            println!("{rendered}");
        }
    }
    Ok(())
}
