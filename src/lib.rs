//! # roolink-rs
//!
//! Rust client for the RooLink anti-bot bypass API.
//!
//! RooLink generates the forged telemetry Akamai-style bot defences expect
//! from a genuine browser session: sensor data, SBSD bodies, pixel payloads,
//! and sec-cpt answers. This crate wraps the service's HTTP endpoints behind
//! a typed async client and bundles the two HTML extractors used to scrape
//! challenge parameters from a protected page. Replaying the generated
//! values against the target site is left to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use roolink_rs::RooLink;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RooLink::new("api-key", "https://www.example.com", "Mozilla/5.0")?;
//!     let limit = client.request_limit().await?;
//!     println!("requests remaining: {}", limit.requests);
//!     Ok(())
//! }
//! ```

mod client;

pub mod api;
pub mod extract;
pub mod transport;

pub use crate::client::{
    RooLink,
    RooLinkBuilder,
    RooLinkConfig,
    RooLinkError,
    RooLinkResult,
};

pub use crate::api::{
    CptChallenge,
    PixelPayload,
    RequestLimit,
    SbsdBody,
    SbsdPayload,
    ScriptData,
    SensorPayload,
    SensorResponse,
};

pub use crate::extract::{
    ExtractError,
    parse_bazadebezolkohpepadr,
    parse_script_url,
};

pub use crate::transport::{
    ApiHttpResponse,
    ApiTransport,
    ReqwestApiTransport,
    TransportError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
