//! Error taxonomy for gateway calls.

use crate::api::types::GraphQlError;

/// Every way a gateway call can fail. Nothing is retried or recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Connection refused, reset, or the body could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("API error: {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 2xx with neither `data` nor `errors`.
    #[error("Response contained no data")]
    MissingData,
}

impl GatewayError {
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }

    pub fn is_graphql(&self) -> bool {
        matches!(self, GatewayError::GraphQl(_))
    }

    /// HTTP status for protocol failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, GatewayError>;
