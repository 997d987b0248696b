//! Spaces API operations
//!
//! Six operations, each one remote call. Read operations degrade on
//! failure (empty vec or `None`) after logging a diagnostic; callers
//! cannot recover the failure cause from the return value. Mutating
//! operations (restart/pause) require a token and fail the precondition
//! locally, with no network call, when it is absent.

use crate::api::types::{RuntimeStatus, SpaceDetail, SpaceSummary, SpaceWire};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use serde_json::Value;
use std::collections::HashMap;
use tracing::error;

/// Limit used when listing all spaces of one user
const USER_LIST_LIMIT: usize = 100;

/// Client for the Spaces API, scoped to one endpoint and an optional
/// access token resolved at construction time
pub struct SpacesClient {
    http: HttpClient,
    token: Option<String>,
}

impl SpacesClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: &url::Url, token: Option<String>) -> Self {
        let mut builder = HttpClientConfig::builder().base_url(endpoint.as_str());
        if let Some(ref token) = token {
            builder = builder.bearer_token(token);
        }
        Self {
            http: HttpClient::with_config(builder.build()),
            token,
        }
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.endpoint, config.token.clone())
    }

    /// List spaces from the catalog, optionally filtered by author
    /// and/or free-text search.
    ///
    /// Best-effort: any remote failure is logged and yields an empty
    /// vec, indistinguishable from zero matches.
    pub async fn list_spaces(
        &self,
        author: Option<&str>,
        search: Option<&str>,
        limit: usize,
    ) -> Vec<SpaceSummary> {
        match self.try_list_spaces(author, search, limit).await {
            Ok(spaces) => spaces,
            Err(e) => {
                error!("Error listing spaces: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch detailed information for one space, or `None` on any error
    pub async fn space_info(&self, space_id: &str) -> Option<SpaceDetail> {
        match self.try_space_info(space_id).await {
            Ok(detail) => Some(detail),
            Err(e) if e.is_http_status() => {
                error!("Error getting space info: {e}");
                None
            }
            Err(e) => {
                error!("Unexpected error: {e}");
                None
            }
        }
    }

    /// Restart a space. Requires a token; returns false without any
    /// network call when it is absent.
    pub async fn restart_space(&self, space_id: &str) -> bool {
        match self.try_lifecycle_action(space_id, "restart").await {
            Ok(()) => true,
            Err(e @ Error::MissingToken { .. }) => {
                error!("{e}");
                false
            }
            Err(e) if e.is_http_status() => {
                error!("Error restarting space: {e}");
                false
            }
            Err(e) => {
                error!("Unexpected error: {e}");
                false
            }
        }
    }

    /// Pause a space. Same token precondition as restart.
    pub async fn pause_space(&self, space_id: &str) -> bool {
        match self.try_lifecycle_action(space_id, "pause").await {
            Ok(()) => true,
            Err(e @ Error::MissingToken { .. }) => {
                error!("{e}");
                false
            }
            Err(e) if e.is_http_status() => {
                error!("Error pausing space: {e}");
                false
            }
            Err(e) => {
                error!("Unexpected error: {e}");
                false
            }
        }
    }

    /// Fetch live runtime state for one space, or `None` on any error
    pub async fn space_runtime(&self, space_id: &str) -> Option<RuntimeStatus> {
        match self.try_space_runtime(space_id).await {
            Ok(status) => Some(status),
            Err(e) if e.is_http_status() => {
                error!("Error getting space runtime: {e}");
                None
            }
            Err(e) => {
                error!("Unexpected error: {e}");
                None
            }
        }
    }

    /// List all spaces owned by one user. Equivalent to
    /// `list_spaces(Some(username), None, 100)`.
    pub async fn list_user_spaces(&self, username: &str) -> Vec<SpaceSummary> {
        self.list_spaces(Some(username), None, USER_LIST_LIMIT).await
    }

    // ------------------------------------------------------------------
    // Fallible bodies; the public methods above own the degradation
    // ------------------------------------------------------------------

    async fn try_list_spaces(
        &self,
        author: Option<&str>,
        search: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SpaceSummary>> {
        let mut query = HashMap::new();
        query.insert("limit".to_string(), limit.to_string());
        query.insert("full".to_string(), "true".to_string());
        if let Some(author) = author {
            query.insert("author".to_string(), author.to_string());
        }
        if let Some(search) = search {
            query.insert("search".to_string(), search.to_string());
        }

        let wires: Vec<SpaceWire> = self
            .http
            .get_json_with_query("/api/spaces", &query)
            .await?;
        Ok(wires.iter().map(SpaceSummary::from_wire).collect())
    }

    async fn try_space_info(&self, space_id: &str) -> Result<SpaceDetail> {
        let wire: SpaceWire = self
            .http
            .get_json(&format!("/api/spaces/{space_id}"))
            .await?;
        Ok(SpaceDetail::from_wire(&wire))
    }

    async fn try_lifecycle_action(&self, space_id: &str, action: &str) -> Result<()> {
        if self.token.as_deref().map_or(true, str::is_empty) {
            return Err(Error::missing_token(action));
        }
        self.http
            .post(&format!("/api/spaces/{space_id}/{action}"))
            .await?;
        Ok(())
    }

    async fn try_space_runtime(&self, space_id: &str) -> Result<RuntimeStatus> {
        let value: Value = self
            .http
            .get_json(&format!("/api/spaces/{space_id}/runtime"))
            .await?;
        RuntimeStatus::from_value(&value)
    }
}

impl std::fmt::Debug for SpacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpacesClient")
            .field("http", &self.http)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}
