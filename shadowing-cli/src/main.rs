//! Command-line entry point for the shadowing tool

use clap::Parser;
use shadowing_cli::commands::{Commands, ListCommands};

/// Segment English passages into speaking turns and score attempts
#[derive(Debug, Parser)]
#[command(name = "shadowing", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Score(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => {
                println!("segment: text, json, markdown");
                println!("score:   text, json");
                Ok(())
            }
        },
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
