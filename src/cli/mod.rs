//! Command line interface for Solace.
//!
//! The CLI is the application layer around the core engine: it owns the
//! data-file formats and the output rendering, loads both sources once at
//! startup, and dispatches to the engine's three operations.

pub mod args;
pub mod commands;
pub mod output;
