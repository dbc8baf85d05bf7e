// ABOUTME: Entry point for the notehub binary
// ABOUTME: Handles CLI args, config loading, and TUI launch

use anyhow::Result;
use clap::Parser;
use notehub_client::{ApiConfig, NotesApi};
use notehub_tui::cli::{self, Command};

#[derive(Parser)]
#[command(name = "notehub")]
#[command(about = "Terminal browser for NoteHub notes")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    match args.command {
        Some(command) => {
            notehub_log::init();
            let api = NotesApi::new(ApiConfig::from_env())?;
            cli::run(command, api).await
        }
        None => {
            // Log to a file so the terminal stays usable
            notehub_log::init_file("notehub");
            let api = NotesApi::new(ApiConfig::from_env())?;
            notehub_tui::run::run(api).await
        }
    }
}
