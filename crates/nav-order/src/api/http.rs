//! HTTP Order API
//!
//! POSTs the order records as JSON with the page's CSRF token attached.

use async_trait::async_trait;
use log::{debug, warn};

use super::{OrderApi, OrderResponse, SaveError};
use crate::config::ResolvedConfig;
use crate::editor::OrderRecord;

pub struct HttpOrderApi {
    client: reqwest::Client,
    config: ResolvedConfig,
}

impl HttpOrderApi {
    pub fn new(config: ResolvedConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ResolvedConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn submit_order(&self, records: &[OrderRecord]) -> Result<(), SaveError> {
        debug!("[ORDER] POST {} ({} records)", self.config.endpoint, records.len());

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(self.config.csrf_header.as_str(), self.config.csrf_token.as_str())
            .json(records)
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;
        let parsed = serde_json::from_str::<OrderResponse>(&body);

        if !status.is_success() {
            warn!("[ORDER] server responded with status {}", status.as_u16());
            return match parsed {
                Ok(OrderResponse { message: Some(message), .. }) => Err(SaveError::Rejected(message)),
                _ => Err(SaveError::Transport(format!(
                    "server responded with status {}",
                    status.as_u16()
                ))),
            };
        }

        parsed
            .map_err(|e| SaveError::Transport(format!("unexpected response body: {}", e)))?
            .into_result()
    }
}
