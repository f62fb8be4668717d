use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::MenuItem,
    error::ApiError,
    protocol::{decode_menu, MenuItemWire, OrderAck, OrderPayload},
};
use tracing::{debug, info, warn};

pub mod cart;
pub mod config;
pub mod error;
pub mod link;
pub mod render;
pub mod session;
pub mod view;

pub use cart::{Cart, CartLine};
pub use config::ClientSettings;
pub use error::{ApiClientError, SessionError, SubmitError};
pub use session::{EntryOrigin, Session};
pub use view::{View, ViewController};

const MENU_ENDPOINT: &str = "/api/menu";
const ORDER_ENDPOINT: &str = "/api/order";

/// Source of the menu shown to the customer.
#[async_trait]
pub trait MenuProvider: Send + Sync {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiClientError>;
}

/// Destination for placed orders.
#[async_trait]
pub trait OrderReceiver: Send + Sync {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderAck, ApiClientError>;
}

/// HTTP client for the restaurant's ordering API.
#[derive(Debug, Clone)]
pub struct OrderingClient {
    http: Client,
    server_url: String,
}

impl OrderingClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_url.trim_end_matches('/'))
    }
}

async fn ensure_success(endpoint: &'static str, res: Response) -> Result<Response, ApiClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiError>(&body) {
        Ok(api_error) => api_error.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => body,
    };
    Err(ApiClientError::Status {
        endpoint,
        status,
        message,
    })
}

#[async_trait]
impl MenuProvider for OrderingClient {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiClientError> {
        let url = self.endpoint(MENU_ENDPOINT);
        debug!(%url, "fetching menu");
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiClientError::Transport {
                endpoint: MENU_ENDPOINT,
                source,
            })?;
        let res = ensure_success(MENU_ENDPOINT, res).await?;
        let items: Vec<MenuItemWire> =
            res.json().await.map_err(|source| ApiClientError::Decode {
                endpoint: MENU_ENDPOINT,
                source,
            })?;
        Ok(decode_menu(items)?)
    }
}

#[async_trait]
impl OrderReceiver for OrderingClient {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderAck, ApiClientError> {
        let url = self.endpoint(ORDER_ENDPOINT);
        debug!(%url, lines = payload.items.len(), "submitting order");
        let res = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|source| ApiClientError::Transport {
                endpoint: ORDER_ENDPOINT,
                source,
            })?;
        let res = ensure_success(ORDER_ENDPOINT, res).await?;

        // The status code alone decides success; the body is informational.
        let ack = match res.json::<OrderAck>().await {
            Ok(ack) => ack,
            Err(err) => {
                warn!(error = %err, "order accepted but acknowledgement body was unreadable");
                OrderAck::default()
            }
        };
        info!(
            table_number = ?payload.table_number,
            total = payload.total,
            status = %ack.status,
            "order accepted"
        );
        Ok(ack)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
