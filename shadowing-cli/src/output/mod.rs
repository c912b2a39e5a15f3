//! Output formatting module

use anyhow::Result;
use shadowing_core::Turn;

/// Trait for turn output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single turn
    fn format_turn(&mut self, turn: &Turn) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
