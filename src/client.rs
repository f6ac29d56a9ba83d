//! High level RooLink API client.
//!
//! Wires the payload types, the transport seam, and per-operation response
//! extraction into an ergonomic client for the RooLink anti-bot bypass
//! service. Every operation is a single request/response exchange; the
//! service responds with a JSON object whose relevant fields are checked and
//! extracted here.

use std::collections::HashMap;
use std::sync::Arc;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::api::{
    CptChallenge, PixelPayload, RequestLimit, SbsdBody, SbsdPayload, ScriptData, SensorPayload,
    SensorResponse,
};
use crate::transport::{ApiTransport, ReqwestApiTransport, TransportError};

/// Default service endpoint.
const BASE_URL: &str = "https://www.roolink.io/api/v1";

/// Result alias used across the client.
pub type RooLinkResult<T> = Result<T, RooLinkError>;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum RooLinkError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("request failed with status code {status}")]
    Service { status: u16 },
    #[error("failed to parse {0}")]
    Parse(&'static str),
    #[error("failed to encode request payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("header conversion failed: {0}")]
    InvalidHeader(String),
}

/// Immutable client configuration: the service credential, the site the
/// generated payloads target, and the browser identity they claim.
#[derive(Debug, Clone)]
pub struct RooLinkConfig {
    pub api_key: String,
    pub protected_url: String,
    pub user_agent: String,
    pub base_url: String,
}

impl RooLinkConfig {
    pub fn new(
        api_key: impl Into<String>,
        protected_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            protected_url: protected_url.into(),
            user_agent: user_agent.into(),
            base_url: BASE_URL.to_string(),
        }
    }
}

/// Fluent builder for [`RooLink`].
pub struct RooLinkBuilder {
    config: RooLinkConfig,
    transport: Option<Arc<dyn ApiTransport>>,
}

impl RooLinkBuilder {
    pub fn new(
        api_key: impl Into<String>,
        protected_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            config: RooLinkConfig::new(api_key, protected_url, user_agent),
            transport: None,
        }
    }

    /// Point the client at a different service endpoint, e.g. a staging
    /// deployment or a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Inject a custom transport. The default is a shared
    /// [`ReqwestApiTransport`] that reuses its connection pool across calls.
    pub fn with_transport(mut self, transport: Arc<dyn ApiTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> RooLinkResult<RooLink> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestApiTransport::new()?),
        };

        Ok(RooLink {
            config: self.config,
            transport,
        })
    }
}

/// Client for the RooLink API.
///
/// Holds no per-call mutable state; a single instance can serve concurrent
/// calls without locking. Each operation is independent of the others.
pub struct RooLink {
    config: RooLinkConfig,
    transport: Arc<dyn ApiTransport>,
}

impl RooLink {
    /// Construct a client with the default reqwest transport.
    pub fn new(
        api_key: impl Into<String>,
        protected_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> RooLinkResult<Self> {
        RooLinkBuilder::new(api_key, protected_url, user_agent).build()
    }

    /// Obtain a builder to customise the client instance.
    pub fn builder(
        api_key: impl Into<String>,
        protected_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> RooLinkBuilder {
        RooLinkBuilder::new(api_key, protected_url, user_agent)
    }

    /// The configuration the client was constructed with.
    pub fn config(&self) -> &RooLinkConfig {
        &self.config
    }

    /// Fetches the remaining request quota for the held credential.
    pub async fn request_limit(&self) -> RooLinkResult<RequestLimit> {
        let url = self.endpoint(&format!("/limit?key={}", self.config.api_key))?;
        let response = self.execute(Method::GET, url, None, &HashMap::new()).await?;

        let requests = response
            .get("requests")
            .and_then(Value::as_i64)
            .ok_or(RooLinkError::Parse("request limit"))?;

        Ok(RequestLimit { requests })
    }

    /// Submits a raw challenge script body and returns the structured fields
    /// the service extracted from it.
    pub async fn parse_script_data(&self, script_body: &[u8]) -> RooLinkResult<ScriptData> {
        let url = self.endpoint("/parse")?;
        let overrides = HashMap::from([(String::from("content-type"), String::from("text/plain"))]);
        let response = self
            .execute(Method::POST, url, Some(script_body.to_vec()), &overrides)
            .await?;

        // A response that does not round-trip into the descriptor shape is a
        // contract violation, not a zero-valued descriptor.
        serde_json::from_value(Value::Object(response))
            .map_err(|_| RooLinkError::Parse("script data"))
    }

    /// Generates sensor data for the protected site.
    pub async fn generate_sensor_data(
        &self,
        options: &SensorPayload,
    ) -> RooLinkResult<SensorResponse> {
        let url = self.endpoint("/sensor")?;
        let body = serde_json::to_vec(options)?;
        let response = self
            .execute(Method::POST, url, Some(body), &HashMap::new())
            .await?;

        let sensor = response
            .get("sensor")
            .and_then(Value::as_str)
            .ok_or(RooLinkError::Parse("sensor data"))?;

        Ok(SensorResponse {
            sensor: sensor.to_string(),
        })
    }

    /// Generates an SBSD body for the given visitor.
    pub async fn generate_sbsd_body(&self, options: &SbsdPayload) -> RooLinkResult<SbsdBody> {
        let url = self.endpoint("/sbsd")?;
        let body = serde_json::to_vec(options)?;
        let response = self
            .execute(Method::POST, url, Some(body), &HashMap::new())
            .await?;

        let body = response
            .get("body")
            .and_then(Value::as_str)
            .ok_or(RooLinkError::Parse("SBSD body"))?;

        Ok(SbsdBody {
            body: body.to_string(),
        })
    }

    /// Generates pixel data for the given page token.
    pub async fn generate_pixel_data(&self, options: &PixelPayload) -> RooLinkResult<String> {
        let url = self.endpoint("/pixel")?;
        let body = serde_json::to_vec(options)?;
        let response = self
            .execute(Method::POST, url, Some(body), &HashMap::new())
            .await?;

        // The service reports pixel output under the `sensor` key, same as
        // the sensor endpoint.
        let pixel = response
            .get("sensor")
            .and_then(Value::as_str)
            .ok_or(RooLinkError::Parse("pixel data"))?;

        Ok(pixel.to_string())
    }

    /// Generates sec-cpt answers. The answer shape is not fixed in advance,
    /// so the whole response object is returned unmodified.
    pub async fn generate_sec_cpt_answers(
        &self,
        options: &CptChallenge,
    ) -> RooLinkResult<Map<String, Value>> {
        let url = self.endpoint("/sec-cpt")?;
        let body = serde_json::to_vec(options)?;
        self.execute(Method::POST, url, Some(body), &HashMap::new())
            .await
    }

    fn endpoint(&self, path: &str) -> RooLinkResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url, path))?)
    }

    /// Shared request path all operations funnel through: default headers,
    /// per-call overrides, one transport round-trip, status check, and a
    /// generic JSON object for the caller to extract fields from.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        header_overrides: &HashMap<String, String>,
    ) -> RooLinkResult<Map<String, Value>> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&self.config.api_key)
                .map_err(|_| RooLinkError::InvalidHeader("x-api-key".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in header_overrides {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| RooLinkError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| RooLinkError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        log::debug!("-> {} {}", method, url);

        let response = self
            .transport
            .send(&method, &url, &headers, body.as_deref())
            .await?;

        if response.status >= 400 {
            log::warn!("{} {} failed with status {}", method, url, response.status);
            return Err(RooLinkError::Service {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|_| RooLinkError::Parse("response body"))
    }
}
