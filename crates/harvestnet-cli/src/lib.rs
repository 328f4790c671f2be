//! Harvestnet CLI library.
//!
//! Subcommand handlers and JSON output helpers for the `harvestnet-cli`
//! binary. Handlers return `anyhow::Result` and never print diagnostics to
//! stdout, which is reserved for the JSON document.

pub mod commands;
pub mod output;
