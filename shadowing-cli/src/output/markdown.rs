//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use shadowing_core::Turn;
use std::io::Write;

/// Markdown formatter - outputs turns as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    turn_count: usize,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            turn_count: 0,
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_turn(&mut self, turn: &Turn) -> Result<()> {
        self.turn_count += 1;
        self.word_count += turn.word_count;
        writeln!(self.writer, "{}. {}", turn.id, turn.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total turns: {} ({} words)*",
            self.turn_count, self.word_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_footer_totals() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_turn(&Turn::new(1, "The cat sat.")).unwrap();
            formatter.format_turn(&Turn::new(2, "It ran away.")).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("1. The cat sat."));
        assert!(output.contains("2. It ran away."));
        assert!(output.contains("---"));
        assert!(output.contains("*Total turns: 2 (6 words)*"));
    }
}
