//! HTTP client for the search gateway.

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

use super::operations::{GetCharacters, GetSavedSearchByID, GetSavedSearches, Operation, SaveSearch};
use super::types::{Character, CharactersResult, GraphQlRequest, GraphQlResponse, SavedSearch};
use crate::error::{GatewayError, Result};
use crate::settings::Settings;

/// Sends typed operations to a GraphQL endpoint.
///
/// One call is one POST. Nothing is cached, retried or de-duplicated, so
/// concurrent calls are fully independent.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
}

impl GatewayClient {
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_endpoint(settings.endpoint.clone())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search characters by name. The name is sent as-is, even when empty.
    pub async fn search_characters(&self, name: &str) -> Result<CharactersResult> {
        self.execute(&GetCharacters {
            name: name.to_string(),
        })
        .await
    }

    /// List saved searches. Always goes to the network.
    pub async fn get_saved_searches(&self) -> Result<Vec<SavedSearch>> {
        self.execute(&GetSavedSearches).await
    }

    /// Characters stored under a saved search.
    pub async fn get_saved_search_by_id(&self, search_id: &str) -> Result<Vec<Character>> {
        self.execute(&GetSavedSearchByID {
            search_id: search_id.to_string(),
        })
        .await
    }

    /// Persist a search server-side. Returns the server's boolean untouched.
    pub async fn save_search(&self, search_id: &str) -> Result<Option<bool>> {
        self.execute(&SaveSearch {
            search_id: search_id.to_string(),
        })
        .await
    }

    /// Send one operation and unwrap its `data` payload.
    pub async fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output> {
        let body = GraphQlRequest {
            operation_name: O::NAME,
            query: O::DOCUMENT,
            variables: operation.variables(),
        };

        tracing::debug!(
            operation = O::NAME,
            kind = ?O::KIND,
            endpoint = %self.endpoint,
            "sending graphql request"
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&body);
        if O::NETWORK_ONLY {
            request = request.header(CACHE_CONTROL, "no-cache");
        }

        let resp = request.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GraphQlResponse<O::Data> = serde_json::from_str(&text)?;

        if !parsed.errors.is_empty() {
            return Err(GatewayError::GraphQl(parsed.errors));
        }

        parsed.data.map(O::output).ok_or(GatewayError::MissingData)
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}
