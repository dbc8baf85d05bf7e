// ABOUTME: Async query service for the NoteHub notes API
// ABOUTME: list/get/create/delete over reqwest with bearer auth and normalization

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ListParams, Note, NoteDraft, NoteEnvelope, NotePage, RawNotesPayload};

/// Client for the remote notes API.
///
/// One instance per process; holds a single connection-pooled
/// `reqwest::Client`. All operations return [`ApiError`] on failure and
/// never retry.
#[derive(Debug, Clone)]
pub struct NotesApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl NotesApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches one page of notes, normalized into a [`NotePage`].
    pub async fn list(&self, params: &ListParams) -> Result<NotePage, ApiError> {
        let url = format!("{}/notes", self.config.base_url);
        let req = self.http.get(&url).query(&params.query_pairs());
        let resp = self.send(req, &url).await?;
        let raw: RawNotesPayload = resp.json().await?;
        Ok(NotePage::from_raw(raw))
    }

    /// Fetches a single note by id.
    pub async fn get(&self, id: &str) -> Result<Note, ApiError> {
        let url = format!("{}/notes/{}", self.config.base_url, id);
        let req = self.http.get(&url);
        let resp = self.send_or_not_found(req, &url, id).await?;
        Ok(resp.json().await?)
    }

    /// Creates a note and returns the server's copy of it.
    pub async fn create(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let url = format!("{}/notes", self.config.base_url);
        let req = self.http.post(&url).json(draft);
        let resp = self.send(req, &url).await?;
        let envelope: NoteEnvelope = resp.json().await?;
        Ok(envelope.into_note())
    }

    /// Deletes a note and returns the deleted note.
    pub async fn delete(&self, id: &str) -> Result<Note, ApiError> {
        let url = format!("{}/notes/{}", self.config.base_url, id);
        let req = self.http.delete(&url);
        let resp = self.send_or_not_found(req, &url, id).await?;
        let envelope: NoteEnvelope = resp.json().await?;
        Ok(envelope.into_note())
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let req = match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        tracing::debug!(
            url,
            has_token = self.config.has_token(),
            "sending API request"
        );

        let resp = req.send().await.map_err(|err| {
            tracing::error!(url, error = %err, "no response from API");
            ApiError::from(err)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::error!(
            url,
            status = status.as_u16(),
            has_token = self.config.has_token(),
            token_len = self.config.token_len(),
            "API request failed"
        );
        Err(ApiError::Request {
            status: status.as_u16(),
            body,
        })
    }

    /// Like `send`, but maps a 404 to `NotFound` for id-addressed calls.
    async fn send_or_not_found(
        &self,
        req: RequestBuilder,
        url: &str,
        id: &str,
    ) -> Result<Response, ApiError> {
        match self.send(req, url).await {
            Err(ApiError::Request { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ApiError::NotFound(id.to_string()))
            }
            other => other,
        }
    }
}
