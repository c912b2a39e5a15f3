//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use shadowing_core::Turn;
use std::io::Write;

/// JSON formatter - outputs turns as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    turns: Vec<Turn>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            turns: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_turn(&mut self, turn: &Turn) -> Result<()> {
        self.turns.push(turn.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.turns)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
