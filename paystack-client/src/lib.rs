//! # Paystack Client SDK
//!
//! An async Rust client for the Paystack REST API.
//!
//! [`PaystackClient`] owns an immutable [`ClientConfig`] and an injected
//! [`Transport`]. Resource handles borrowed from it (`transactions()`,
//! `plans()`, ...) expose one method per endpoint, and every method returns
//! an [`ApiResponse`]: `(true, data)` for HTTP 200, `(false, message)`
//! otherwise.
//!
//! ```no_run
//! use paystack_client::{ClientConfig, PaystackClient};
//!
//! # async fn run() -> Result<(), paystack_client::PaystackError> {
//! let client = PaystackClient::new(ClientConfig::new(
//!     "https://api.paystack.co/",
//!     "sk_test_xxx",
//! ));
//! let (ok, payload) = client
//!     .transactions()
//!     .initialize("customer@example.com", 10_000)
//!     .await?
//!     .into_parts();
//! if ok {
//!     println!("pay at {}", payload["authorization_url"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod resources;
pub mod transport;


use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

pub use paystack_types::{
    ApiRequest, ApiResponse, ClientConfig, HttpMethod, PaystackError, RawResponse, Transport,
    TransportError, dto,
};
pub use resources::{
    Plans, Subscriptions, TransferControl, Transfers, Transactions, Verification,
};
pub use transport::HttpTransport;

/// Paystack API client.
///
/// Cheap to share: configuration sits behind an `Arc` and the transport is
/// expected to pool its own connections. Concurrent calls need no locking.
#[derive(Debug, Clone)]
pub struct PaystackClient<T: Transport = HttpTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl PaystackClient<HttpTransport> {
    /// Creates a client backed by a fresh reqwest client.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::default())
    }

    /// Creates a client from `PAYSTACK_SECRET_KEY` and `PAYSTACK_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> PaystackClient<T> {
    /// Creates a client that sends every request through `transport`.
    ///
    /// The caller keeps control of the transport's lifecycle, e.g. by passing
    /// an [`HttpTransport`] built around a shared `reqwest::Client`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authorization and content-type headers sent with every request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.config.headers()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resources
    // ─────────────────────────────────────────────────────────────────────────

    pub fn transactions(&self) -> Transactions<'_, T> {
        Transactions::new(self)
    }

    pub fn plans(&self) -> Plans<'_, T> {
        Plans::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_, T> {
        Subscriptions::new(self)
    }

    pub fn transfers(&self) -> Transfers<'_, T> {
        Transfers::new(self)
    }

    pub fn transfer_control(&self) -> TransferControl<'_, T> {
        TransferControl::new(self)
    }

    pub fn verification(&self) -> Verification<'_, T> {
        Verification::new(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request plumbing
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) async fn get(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<ApiResponse, PaystackError> {
        self.send(HttpMethod::Get, path, query, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, PaystackError> {
        let body = serde_json::to_value(body)?;
        self.send(HttpMethod::Post, path, Vec::new(), Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<ApiResponse, PaystackError> {
        self.send(HttpMethod::Post, path, Vec::new(), None).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, PaystackError> {
        let body = serde_json::to_value(body)?;
        self.send(HttpMethod::Put, path, Vec::new(), Some(body)).await
    }

    #[tracing::instrument(skip(self, method, query, body), fields(method = %method))]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<ApiResponse, PaystackError> {
        let request = ApiRequest {
            method,
            url: self.config.endpoint(path),
            headers: self.headers(),
            query,
            body,
        };

        tracing::debug!("Sending request to {}", request.url);
        let raw = self.transport.execute(request).await.inspect_err(|e| {
            tracing::error!("Transport failure: {}", e);
        })?;
        tracing::debug!(status = raw.status, "Received response");

        let response = ApiResponse::from_raw(&raw)?;
        if !response.is_success() {
            tracing::warn!(
                status = raw.status,
                "Paystack rejected request: {}",
                response.message().unwrap_or_default()
            );
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PaystackClient::new(ClientConfig::new("https://api.paystack.co/", "sk_test"));
        assert_eq!(client.config().base_url(), "https://api.paystack.co/");
    }

    #[test]
    fn test_client_headers() {
        let client = PaystackClient::new(ClientConfig::new("https://api.paystack.co/", "sk_test"));
        let headers = client.headers();
        assert!(headers.contains(&("Authorization", "Bearer sk_test".to_string())));
        assert!(headers.contains(&("Content-Type", "application/json".to_string())));
    }

    #[test]
    fn test_client_debug_hides_secret() {
        let client = PaystackClient::new(ClientConfig::new("https://api.paystack.co/", "sk_live_x"));
        assert!(!format!("{:?}", client).contains("sk_live_x"));
    }
}
