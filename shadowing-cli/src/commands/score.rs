//! Score command implementation

use anyhow::Result;
use clap::Args;
use shadowing_core::SessionReport;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{read_recognized, FileReader};

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Input passage file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Recognized attempts (JSON array of strings, or one per line)
    #[arg(short, long, value_name = "FILE")]
    pub recognized: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ScoreFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported score report formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScoreFormat {
    /// Per-turn table with a total line
    Text,
    /// Full session report as JSON
    Json,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose)?;

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }
        if !self.recognized.exists() {
            return Err(CliError::FileNotFound(self.recognized.display().to_string()).into());
        }
        let content = FileReader::read_text(&self.input)?;
        let attempts = read_recognized(&self.recognized)?;

        let turns = shadowing_core::segment(&content)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        log::info!(
            "Scoring {} attempts against {} turns",
            attempts.len(),
            turns.len()
        );

        let report = shadowing_core::report(&turns, &attempts);

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        match self.format {
            ScoreFormat::Text => write_text_report(&mut writer, &report)?,
            ScoreFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &report)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_text_report(writer: &mut dyn Write, report: &SessionReport) -> Result<()> {
    for result in &report.turn_results {
        writeln!(writer, "[{}] {:.1}%", result.turn_id, result.score)?;
        writeln!(writer, "    original:   {}", result.original)?;
        writeln!(writer, "    recognized: {}", result.recognized)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total score: {:.1}%", report.total_score)?;
    Ok(())
}
