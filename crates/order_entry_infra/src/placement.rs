//! HTTP implementation of the order-placement port.
//!
//! Posts the intent, encoded by [`crate::wire`], to `{base_url}/api/orders`
//! and maps the response status onto [`PlacementError`]. Retries,
//! order-status polling and token refresh are not handled here.

use std::time::Duration;

use async_trait::async_trait;
use order_entry_core::execution::{OrderIntent, OrderPlacer, PlacementAck, PlacementError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use crate::config::{ConfigError, FormSettings};
use crate::wire::{decode_ack, encode_intent};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ORDERS_PATH: &str = "/api/orders";

#[derive(Debug, Clone)]
pub struct HttpOrderPlacer {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpOrderPlacer {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PlacementError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PlacementError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Build from settings; the base URL has no default.
    pub fn from_settings(settings: &FormSettings) -> Result<Self, ConfigError> {
        let base_url = settings.place_order_base_url()?;
        Self::new(base_url).map_err(|_| ConfigError::Invalid {
            param_name: "place_order_base_url",
            reason: "http client could not be built",
        })
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ORDERS_PATH)
    }
}

/// Map a non-success response onto the placement error taxonomy.
pub fn error_for_status(status: u16, body: String) -> PlacementError {
    match StatusCode::from_u16(status) {
        Ok(StatusCode::UNAUTHORIZED) => PlacementError::Unauthorized,
        Ok(code) if code.is_client_error() => PlacementError::Rejected(body),
        _ => PlacementError::Server { status, body },
    }
}

#[async_trait]
impl OrderPlacer for HttpOrderPlacer {
    async fn place_order(&self, intent: &OrderIntent) -> Result<PlacementAck, PlacementError> {
        let body = encode_intent(intent)
            .map_err(|e| PlacementError::Transport(format!("unencodable intent: {e}")))?;
        let mut request = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, symbol = %intent.symbol, "order placement transport failure");
            PlacementError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_for_status(status.as_u16(), body);
            tracing::warn!(status = status.as_u16(), error = %err, "order placement rejected");
            return Err(err);
        }

        let raw = response
            .text()
            .await
            .map_err(|e| PlacementError::Transport(e.to_string()))?;
        let ack = decode_ack(&raw)
            .map_err(|e| PlacementError::Transport(format!("malformed ack: {e}")))?;
        tracing::info!(order_id = %ack.order_id, symbol = %intent.symbol, "order placed");
        Ok(ack)
    }
}
