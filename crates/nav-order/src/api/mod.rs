//! Backend Order API
//!
//! The outbound contract used to persist a flattened order, plus the
//! reqwest-backed implementation.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::OrderRecord;

pub use http::HttpOrderApi;

/// Reasons a save did not go through. In-memory state is kept in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// Network failure or a response we could not interpret
    #[error("could not reach the server: {0}")]
    Transport(String),
    /// The backend answered `success: false`; the message is shown as-is
    #[error("{0}")]
    Rejected(String),
}

/// Body returned by the order endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderResponse {
    pub fn into_result(self) -> Result<(), SaveError> {
        if self.success {
            Ok(())
        } else {
            Err(SaveError::Rejected(
                self.message
                    .unwrap_or_else(|| "The server rejected the new order.".to_string()),
            ))
        }
    }
}

/// Sink for the flattened order.
///
/// Futures are not required to be `Send`: in the browser the request is
/// driven by `fetch` on the UI thread.
#[async_trait(?Send)]
pub trait OrderApi {
    async fn submit_order(&self, records: &[OrderRecord]) -> Result<(), SaveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_mapping() {
        let ok: OrderResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let rejected: OrderResponse =
            serde_json::from_str(r#"{"success": false, "message": "Category 4 was deleted"}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(SaveError::Rejected("Category 4 was deleted".to_string()))
        );

        let bare = OrderResponse { success: false, message: None };
        assert!(matches!(bare.into_result(), Err(SaveError::Rejected(msg)) if !msg.is_empty()));
    }
}
