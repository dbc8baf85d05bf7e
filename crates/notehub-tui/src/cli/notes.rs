// ABOUTME: Implementations of the list/show/create/delete subcommands
// ABOUTME: Human-readable output on stdout, errors via anyhow

use anyhow::{Context, Result};
use notehub_client::{ListParams, NoteDraft, NotesApi};

pub async fn list(
    api: &NotesApi,
    page: u32,
    per_page: u32,
    search: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let mut params = ListParams::default().page(page).per_page(per_page);
    if let Some(search) = search {
        params = params.search(search);
    }
    if let Some(tag) = tag {
        params = params.tag(tag);
    }

    let result = api.list(&params).await.context("Failed to list notes")?;

    if result.items.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    for note in &result.items {
        println!("{}  [{}]  {}", note.id, note.tag, note.title);
    }
    println!();
    println!(
        "{} notes, page {}/{}",
        result.meta.total_items, result.meta.page, result.meta.total_pages
    );
    Ok(())
}

pub async fn show(api: &NotesApi, id: &str) -> Result<()> {
    let note = api.get(id).await.context("Failed to fetch note")?;

    println!("{}", note.title);
    println!("[{}]", note.tag);
    if let Some(created) = note.created_at {
        println!("created {}", created.format("%Y-%m-%d %H:%M"));
    }
    println!();
    println!("{}", note.content);
    Ok(())
}

pub async fn create(api: &NotesApi, title: String, content: String, tag: String) -> Result<()> {
    let draft = NoteDraft {
        title,
        content,
        tag,
    };
    let note = api.create(&draft).await.context("Failed to create note")?;
    println!("Created note {}: {}", note.id, note.title);
    Ok(())
}

pub async fn delete(api: &NotesApi, id: &str) -> Result<()> {
    let note = api.delete(id).await.context("Failed to delete note")?;
    println!("Deleted note {}: {}", note.id, note.title);
    Ok(())
}
