// ABOUTME: Data models for notehub-client
// ABOUTME: Note, list parameters, raw payloads, and response normalization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of notes per page used by the browsing UI and CLI defaults.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Pseudo-tag meaning "no tag filter".
pub const TAG_ALL: &str = "all";

/// A user-authored text record. Identity is `id`; instances are never
/// mutated after fetch, only replaced by fresh responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields submitted when creating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: String,
}

/// Parameters for the list endpoint. `page` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            tag: None,
        }
    }
}

impl ListParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Query-string pairs for the list request. Blank search text and
    /// the `all` pseudo-tag are omitted entirely rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_deref() {
            if !search.trim().is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if let Some(tag) = self.tag.as_deref() {
            if !tag.trim().is_empty() && tag != TAG_ALL {
                pairs.push(("tag", tag.to_string()));
            }
        }
        pairs
    }
}

/// List payload as the server actually sends it. Every field is
/// optional; the upstream API has been observed omitting any of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotesPayload {
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Pagination metadata after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub total_items: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// The stable internal shape produced from a variable upstream payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePage {
    pub items: Vec<Note>,
    pub meta: PageMeta,
}

impl NotePage {
    /// Normalizes a raw payload. Never fails: absent fields fall back to
    /// defaults derived from the item list, and `total_pages` is clamped
    /// to at least 1.
    pub fn from_raw(raw: RawNotesPayload) -> Self {
        let items = raw.notes.unwrap_or_default();
        let meta = PageMeta {
            total_items: raw.total.unwrap_or(items.len() as u64),
            page: raw.page.unwrap_or(1),
            per_page: raw.per_page.unwrap_or(items.len() as u32),
            total_pages: raw.total_pages.unwrap_or(1).max(1),
        };
        Self { items, meta }
    }
}

/// Create/delete response envelope. The upstream API answers with either
/// `{"note": ...}` or `{"data": ...}` depending on deployment; decode
/// both explicitly instead of probing fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NoteEnvelope {
    Note { note: Note },
    Data { data: Note },
}

impl NoteEnvelope {
    pub(crate) fn into_note(self) -> Note {
        match self {
            NoteEnvelope::Note { note } => note,
            NoteEnvelope::Data { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: format!("Title {}", id),
            content: "Content".to_string(),
            tag: "Todo".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_normalize_full_payload() {
        let raw = RawNotesPayload {
            notes: Some(vec![sample_note("1"), sample_note("2")]),
            total: Some(50),
            page: Some(3),
            per_page: Some(2),
            total_pages: Some(25),
        };
        let page = NotePage::from_raw(raw);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.total_items, 50);
        assert_eq!(page.meta.page, 3);
        assert_eq!(page.meta.per_page, 2);
        assert_eq!(page.meta.total_pages, 25);
    }

    #[test]
    fn test_normalize_missing_total_uses_item_count() {
        let raw = RawNotesPayload {
            notes: Some(vec![sample_note("1"), sample_note("2"), sample_note("3")]),
            ..Default::default()
        };
        let page = NotePage::from_raw(raw);
        assert_eq!(page.meta.total_items, 3);
        assert_eq!(page.meta.per_page, 3);
    }

    #[test]
    fn test_normalize_missing_page_defaults_to_one() {
        let raw = RawNotesPayload {
            notes: Some(vec![sample_note("1")]),
            total: Some(1),
            ..Default::default()
        };
        let page = NotePage::from_raw(raw);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_normalize_empty_payload() {
        let page = NotePage::from_raw(RawNotesPayload::default());
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_items, 0);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.per_page, 0);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_normalize_clamps_zero_total_pages() {
        let raw = RawNotesPayload {
            notes: Some(vec![]),
            total_pages: Some(0),
            ..Default::default()
        };
        let page = NotePage::from_raw(raw);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_raw_payload_deserializes_camel_case() {
        let json = r#"{"notes": [], "total": 7, "perPage": 12, "totalPages": 1}"#;
        let raw: RawNotesPayload = serde_json::from_str(json).unwrap();
        assert_eq!(raw.total, Some(7));
        assert_eq!(raw.per_page, Some(12));
        assert_eq!(raw.total_pages, Some(1));
        assert!(raw.page.is_none());
    }

    #[test]
    fn test_list_params_defaults() {
        let params = ListParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, DEFAULT_PER_PAGE);
        assert!(params.search.is_none());
        assert!(params.tag.is_none());
    }

    #[test]
    fn test_query_pairs_omits_blank_search_and_all_tag() {
        let params = ListParams::default()
            .page(1)
            .per_page(12)
            .search("")
            .tag(TAG_ALL);
        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("perPage", "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_includes_search_and_tag() {
        let params = ListParams::default().page(2).search("meeting").tag("Work");
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("search", "meeting".to_string())));
        assert!(pairs.contains(&("tag", "Work".to_string())));
    }

    #[test]
    fn test_query_pairs_omits_whitespace_search() {
        let params = ListParams::default().search("   ");
        let pairs = params.query_pairs();
        assert!(!pairs.iter().any(|(k, _)| *k == "search"));
    }

    #[test]
    fn test_list_params_page_floor() {
        let params = ListParams::default().page(0);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_note_deserializes_timestamps() {
        let json = r#"{
            "id": "n1",
            "title": "T",
            "content": "C",
            "tag": "Todo",
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "n1");
        assert!(note.created_at.is_some());
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn test_envelope_note_variant() {
        let json = r#"{"note": {"id": "n1", "title": "T", "content": "C", "tag": "x"}}"#;
        let env: NoteEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_note().id, "n1");
    }

    #[test]
    fn test_envelope_data_variant() {
        let json = r#"{"data": {"id": "n2", "title": "T", "content": "C", "tag": "x"}}"#;
        let env: NoteEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_note().id, "n2");
    }
}
