//! Command implementations for the Solace CLI.

use std::io::{self, BufRead, Write};

use crate::catalog::{IntentCatalog, QaTable};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::Engine;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SolaceArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize(normalize_args.clone(), &args),
        Command::Repl(source_args) => repl(source_args.clone(), &args),
    }
}

/// Load both data sources and build the engine.
///
/// Missing paths load as empty sources, which the engine treats as a
/// defined state (every query falls through to the default reply).
fn load_engine(sources: &SourceArgs, cli_args: &SolaceArgs) -> Result<Engine> {
    let catalog = match &sources.intents {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading intent catalog from: {}", path.display());
            }
            IntentCatalog::load(path)?
        }
        None => IntentCatalog::empty(),
    };

    let table = match &sources.qa {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading QA table from: {}", path.display());
            }
            QaTable::load(path)?
        }
        None => QaTable::empty(),
    };

    Engine::new(catalog, table)
}

/// Answer a single query.
fn ask(args: AskArgs, cli_args: &SolaceArgs) -> Result<()> {
    let engine = load_engine(&args.sources, cli_args)?;
    let reply = engine.reply(&args.query);

    let mut lines = vec![reply.text.clone()];
    if cli_args.verbosity() > 1 {
        lines.push(format!("(score: {:.4})", reply.score));
    }
    emit(&lines, &AskResult::new(&args.query, reply), cli_args)
}

/// Print autocomplete suggestions.
fn suggest(args: SuggestArgs, cli_args: &SolaceArgs) -> Result<()> {
    let engine = load_engine(&args.sources, cli_args)?;
    let suggestions = engine.suggest(&args.query, args.limit);

    emit(
        &suggestions,
        &SuggestResult {
            query: args.query,
            suggestions: suggestions.clone(),
        },
        cli_args,
    )
}

/// Print the canonical normalized form of a text.
///
/// No data sources are needed; normalization is independent of the corpora.
fn normalize(args: NormalizeArgs, cli_args: &SolaceArgs) -> Result<()> {
    let engine = Engine::new(IntentCatalog::empty(), QaTable::empty())?;
    let normalized = engine.normalize(&args.text);

    emit(
        &[normalized.clone()],
        &NormalizeResult {
            text: args.text,
            normalized,
        },
        cli_args,
    )
}

/// Interactive question/answer loop on stdin.
fn repl(sources: SourceArgs, cli_args: &SolaceArgs) -> Result<()> {
    let engine = load_engine(&sources, cli_args)?;

    if cli_args.verbosity() > 0 {
        println!("Solace {} - type a question, or 'quit' to exit.", crate::VERSION);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "quit" || query == "exit" {
            break;
        }

        let reply = engine.reply(query);
        let mut lines = vec![reply.text.clone()];
        if cli_args.verbosity() > 1 {
            lines.push(format!("(score: {:.4})", reply.score));
        }
        emit(&lines, &AskResult::new(query, reply), cli_args)?;
    }

    Ok(())
}
