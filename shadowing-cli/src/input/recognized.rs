//! Reading recognized-attempt files
//!
//! A recognized file carries the learner's transcribed attempts, one
//! per turn, as produced by an external speech-to-text step. Two
//! formats are accepted: a JSON array of strings, or plain text with
//! one attempt per line.

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use std::path::Path;

/// Read recognized attempts from a JSON array or line-oriented file.
///
/// Files whose first non-whitespace character is `[` are parsed as
/// JSON; anything else is split into lines, trailing blank lines
/// dropped.
pub fn read_recognized(path: &Path) -> Result<Vec<String>> {
    let content = FileReader::read_text(path)?;
    parse_recognized(&content)
}

fn parse_recognized(content: &str) -> Result<Vec<String>> {
    if content.trim_start().starts_with('[') {
        let attempts: Vec<String> = serde_json::from_str(content)
            .map_err(|e| CliError::InvalidRecognized(e.to_string()))?;
        return Ok(attempts);
    }

    let mut lines: Vec<String> = content.lines().map(str::to_owned).collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    Ok(lines)
}
