//! Solace CLI binary.

use std::process;

use clap::Parser;
use solace::cli::{args::SolaceArgs, commands::execute_command};

fn main() {
    let args = SolaceArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
