//! Host side of a tool run: reading the project context and writing JSON.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use holekit_camtools::ProjectContext;

/// Read a project context from `input`, or stdin when absent.
pub fn read_context(input: Option<&Path>) -> anyhow::Result<ProjectContext> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading project context {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading project context from stdin")?;
            text
        }
    };
    parse_context(&text)
}

pub fn parse_context(text: &str) -> anyhow::Result<ProjectContext> {
    serde_json::from_str(text).context("parsing project context")
}

/// Serialize a result for stdout.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("serializing output")
}

/// The failure payload: `{"error": "<message>"}`.
pub fn error_json(message: &str, pretty: bool) -> anyhow::Result<String> {
    to_json(&serde_json::json!({ "error": message }), pretty)
}
