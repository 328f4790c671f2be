//! JSON output for CLI subcommands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// How a document is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

impl JsonStyle {
    pub fn from_compact_flag(compact: bool) -> Self {
        if compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }
}

/// Render `value` as JSON text.
pub fn render_json<T: Serialize>(value: &T, style: JsonStyle) -> Result<String> {
    let rendered = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
        JsonStyle::Compact => serde_json::to_string(value),
    };
    rendered.context("failed to serialise output as JSON")
}

/// Write `value` to `output` when given, otherwise to stdout.
pub fn emit_json<T: Serialize>(value: &T, style: JsonStyle, output: Option<&Path>) -> Result<()> {
    let mut rendered = render_json(value, style)?;
    rendered.push('\n');

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote JSON output");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .context("failed to write output to stdout")?;
        }
    }
    Ok(())
}
