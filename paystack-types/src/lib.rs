//! # Paystack Types
//!
//! Transport-free core of the Paystack client: configuration, the
//! request/response envelope contract, request payloads and the transport
//! port. Nothing in this crate performs IO.
//!
//! ## Layout
//!
//! - `config` - [`ClientConfig`], base URL joining and auth headers
//! - `envelope` - [`ApiRequest`], [`RawResponse`] and [`ApiResponse`]
//! - `dto` - one payload type per endpoint
//! - `error` - [`PaystackError`] and [`TransportError`]
//! - `ports` - the [`Transport`] trait HTTP adapters implement

pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use dto::*;
pub use envelope::{ApiRequest, ApiResponse, HttpMethod, RawResponse};
pub use error::{PaystackError, TransportError};
pub use ports::Transport;
