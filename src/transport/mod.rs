//! HTTP transport abstraction used by the API client.
//!
//! The client never talks to a concrete HTTP stack directly; it goes through
//! the [`ApiTransport`] trait so the underlying client can be long-lived,
//! shared, and swapped out in tests.

pub mod reqwest_client;

pub use reqwest_client::ReqwestApiTransport;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use thiserror::Error;
use url::Url;

/// Contract that abstracts the underlying HTTP transport for API calls.
///
/// Implementations are expected to be cheap to share (`Arc`) and to reuse
/// connections across calls.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
    ) -> Result<ApiHttpResponse, TransportError>;
}

/// Minimal response representation returned by the transport abstraction.
#[derive(Debug, Clone)]
pub struct ApiHttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Errors surfaced by the transport layer, including cancellation of an
/// in-flight call.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport error: {0}")]
    Http(String),
}
