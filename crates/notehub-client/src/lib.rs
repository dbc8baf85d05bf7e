// ABOUTME: NoteHub API client library shared between TUI and CLI
// ABOUTME: Provides configuration, models, response normalization, and the query service

mod api;
mod cache;
mod config;
mod error;
mod models;

pub use api::NotesApi;
pub use cache::{QueryCache, QueryKey};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::*;
