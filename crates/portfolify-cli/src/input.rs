//! Reading JSON or text arguments from files or stdin.

use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a JSON value from a file path, or stdin when the path is `-`.
pub fn read_json(source: &str) -> Result<Value> {
    let raw = read_text(source)?;
    serde_json::from_str(&raw).context("Invalid JSON input")
}

/// Read text from a file path, or stdin when the path is `-`.
pub fn read_text(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
    }
}
