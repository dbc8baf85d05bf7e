// ABOUTME: Configuration for the NoteHub API client
// ABOUTME: Explicit config object read from the environment and passed into NotesApi

/// Public NoteHub instance used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

const ENV_BASE_URL: &str = "NOTEHUB_API_URL";
const ENV_TOKEN: &str = "NOTEHUB_TOKEN";

/// Connection settings for [`crate::NotesApi`].
///
/// Constructed once at startup and passed into the client so tests can
/// inject their own base URL and token instead of relying on globals.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the notes API, without a trailing slash.
    pub base_url: String,

    /// Bearer token. A missing token is not an error here; the server
    /// rejects unauthenticated requests with 401 at call time.
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    /// Reads `NOTEHUB_API_URL` and `NOTEHUB_TOKEN` from the environment.
    /// Logs a warning when the token is absent and continues.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let token = std::env::var(ENV_TOKEN)
            .ok()
            .filter(|v| !v.trim().is_empty());

        if token.is_none() {
            tracing::warn!(
                env_var = ENV_TOKEN,
                "no API token configured; requests will fail with 401"
            );
        }

        Self::new(base_url, token)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Token length for diagnostics. Never log the token itself.
    pub fn token_len(&self) -> usize {
        self.token.as_deref().map(str::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ApiConfig::new("https://example.com/api/", None);
        assert_eq!(config.base_url, "https://example.com/api");
    }

    #[test]
    fn test_new_keeps_clean_url() {
        let config = ApiConfig::new("https://example.com/api", None);
        assert_eq!(config.base_url, "https://example.com/api");
    }

    #[test]
    fn test_has_token() {
        let with = ApiConfig::new("https://example.com", Some("secret".to_string()));
        let without = ApiConfig::new("https://example.com", None);
        assert!(with.has_token());
        assert!(!without.has_token());
    }

    #[test]
    fn test_token_len() {
        let config = ApiConfig::new("https://example.com", Some("secret".to_string()));
        assert_eq!(config.token_len(), 6);

        let config = ApiConfig::new("https://example.com", None);
        assert_eq!(config.token_len(), 0);
    }
}
