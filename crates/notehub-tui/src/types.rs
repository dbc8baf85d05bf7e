// ABOUTME: Core types for the notehub TUI
// ABOUTME: Mode, view state, fetch outcomes, and the fixed tag set

use notehub_client::{ApiError, Note, NotePage, QueryKey};

/// Tags offered by the filter bar. `all` disables the tag filter.
pub const TAGS: &[&str] = &["all", "Todo", "Work", "Personal", "Meeting", "Shopping"];

/// Per-page sizes the browse view cycles through.
pub const PER_PAGE_STEPS: &[u32] = &[12, 24, 48];

/// Application mode / screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Paginated list with search and tag filter
    Browse,
    /// Full view of the selected note
    Detail,
    /// Create-note form overlay
    Create,
    /// Delete confirmation overlay for the selected note
    ConfirmDelete,
}

/// What the browse view should render for the current query key.
/// The three states are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Request in flight, nothing cached for this key
    Loading,
    /// Last request for this key failed
    Error(ErrorState),
    /// Fresh cached data for this key
    Data(NotePage),
}

/// A rendered fetch failure. `auth` selects the extra token hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
    pub auth: bool,
}

impl ErrorState {
    pub fn from_api_error(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
            auth: err.is_auth_failure(),
        }
    }
}

/// Results delivered back to the event loop from spawned API tasks.
#[derive(Debug)]
pub enum FetchOutcome {
    /// A list fetch finished. `generation` identifies which request this
    /// was; outcomes from superseded generations are discarded.
    List {
        key: QueryKey,
        generation: u64,
        result: Result<NotePage, ApiError>,
    },
    Created(Result<Note, ApiError>),
    Deleted(Result<Note, ApiError>),
}
