// ABOUTME: notehub TUI - terminal browser for NoteHub notes
// ABOUTME: Channel-based async architecture with Ratatui

pub mod app;
pub mod cli;
pub mod debounce;
pub mod fetch;
pub mod run;
pub mod types;
pub mod ui;
