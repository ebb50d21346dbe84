//! Client errors.

use thiserror::Error;

use crate::api_error::ApiError;

/// Errors produced by the client.
///
/// Local precondition failures (`MissingAccountId`, `MissingGroupId`,
/// `Validation`) occur before any network call; `Serialization` aborts a
/// call before the request is sent.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("marshal request body: {0}")]
    Serialization(String),

    #[error("execute request: {0}")]
    Transport(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("unmarshal response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("account ID is required")]
    MissingAccountId,

    #[error("group ID is required")]
    MissingGroupId,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{operation}: {source}")]
    Context {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Attach an operation-context tag, e.g. `"create basic alert"`.
    pub fn context(self, operation: &'static str) -> Self {
        ClientError::Context {
            operation,
            source: Box::new(self),
        }
    }

    /// The underlying [`ApiError`], looking through context tags.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            ClientError::Context { source, .. } => source.as_api(),
            _ => None,
        }
    }
}
