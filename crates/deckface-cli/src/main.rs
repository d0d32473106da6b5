//! deckface - render control surface button bitmaps from JSON specs.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use deckface_cli::commands;

/// Deckface - button bitmap renderer for control surfaces
#[derive(Parser)]
#[command(name = "deckface")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a surface spec to a PNG image
    Render {
        /// Path to the spec JSON file
        spec: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Print the BLAKE3 hash of the encoded PNG
        #[arg(long)]
        print_hash: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            spec,
            out,
            print_hash,
        } => commands::render::run(&spec, &out, print_hash),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
