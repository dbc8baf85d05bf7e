// ABOUTME: Non-interactive CLI subcommands for scripting
// ABOUTME: Thin wrappers over NotesApi printing plain output

mod notes;

use anyhow::Result;
use notehub_client::NotesApi;

/// Subcommands available without launching the TUI
#[derive(clap::Subcommand)]
pub enum Command {
    /// List notes
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 12)]
        per_page: u32,
        /// Full-text search
        #[arg(long)]
        search: Option<String>,
        /// Tag filter ("all" disables it)
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show a single note
    Show { id: String },
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "Todo")]
        tag: String,
    },
    /// Delete a note
    Delete { id: String },
}

pub async fn run(command: Command, api: NotesApi) -> Result<()> {
    match command {
        Command::List {
            page,
            per_page,
            search,
            tag,
        } => notes::list(&api, page, per_page, search, tag).await,
        Command::Show { id } => notes::show(&api, &id).await,
        Command::Create {
            title,
            content,
            tag,
        } => notes::create(&api, title, content, tag).await,
        Command::Delete { id } => notes::delete(&api, &id).await,
    }
}
