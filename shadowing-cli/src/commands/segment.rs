//! Segment command implementation

use anyhow::Result;
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input passage file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enforce the 50-300 word practice passage bounds
    #[arg(long)]
    pub validate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one turn per line
    Text,
    /// JSON array of turns
    Json,
    /// Markdown numbered list
    Markdown,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose)?;

        log::info!("Segmenting passage from {}", self.input.display());

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }
        let content = FileReader::read_text(&self.input)?;

        if self.validate {
            let words = shadowing_core::validate_passage(&content)
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            log::debug!("Passage accepted at {words} words");
        }

        let turns = shadowing_core::segment(&content)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        log::info!("Produced {} turns", turns.len());

        let mut formatter = self.make_formatter()?;
        for turn in &turns {
            formatter.format_turn(turn)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn make_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn io::Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
