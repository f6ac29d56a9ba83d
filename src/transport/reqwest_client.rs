//! Reqwest-based implementation of the `ApiTransport` trait.
//!
//! Provides a thin adapter around `reqwest::Client` that converts between the
//! shared HTTP representations used by the API client and the concrete
//! transport.

use std::sync::Arc;

use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use url::Url;

use super::{ApiHttpResponse, ApiTransport, TransportError};

/// Reqwest-backed HTTP transport reused across API calls.
pub struct ReqwestApiTransport {
    client: Client,
}

impl ReqwestApiTransport {
    /// Creates a transport with a fresh `reqwest::Client`. The client keeps
    /// its connection pool alive for the lifetime of the transport.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|err| TransportError::Http(err.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client, e.g. one already configured with
    /// proxies or timeouts by the caller.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestApiTransport {
    fn default() -> Self {
        Self::new().expect("failed to create reqwest transport")
    }
}

#[async_trait]
impl ApiTransport for ReqwestApiTransport {
    async fn send(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
    ) -> Result<ApiHttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(headers.clone());

        if let Some(data) = body {
            builder = builder.body(data.to_vec());
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Http(err.to_string()))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Http(err.to_string()))?;

        Ok(ApiHttpResponse {
            status,
            headers,
            body,
        })
    }
}

type _AssertSync = Arc<ReqwestApiTransport>;
