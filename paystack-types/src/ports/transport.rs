//! Transport port.
//!
//! A transport performs exactly one HTTP exchange per call. It owns the
//! connection pool and any timeouts; the client only hands it finished
//! requests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::envelope::{ApiRequest, RawResponse};
use crate::error::TransportError;

/// Port trait for HTTP transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the status code and raw body.
    ///
    /// Non-2xx answers are not errors at this level.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request).await
    }
}
