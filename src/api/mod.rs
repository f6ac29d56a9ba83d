//! Request payloads and response results for the RooLink API.
//!
//! Field names follow the service's wire contract exactly; several of them
//! (`_abck`, `bm_sz`, `bm_o`, `bazadebezolkohpepadr`) are cookie and token
//! names lifted verbatim from the protected pages the payloads describe.

use serde::{Deserialize, Serialize};

/// Remaining request quota for the held credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLimit {
    pub requests: i64,
}

/// Structured fields extracted from an anti-bot vendor script by the parse
/// endpoint: script version, device class, numeric key, and the ordered
/// integer sequence the sensor generator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptData {
    pub ver: String,
    pub dvc: String,
    pub key: i64,
    pub din: Vec<i64>,
}

/// Inputs for sensor generation.
#[derive(Debug, Clone, Serialize)]
pub struct SensorPayload {
    pub url: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    #[serde(rename = "_abck")]
    pub abck: String,
    pub bm_sz: String,
    #[serde(rename = "scriptData")]
    pub script_data: Option<ScriptData>,
    pub sec_cpt: bool,
    pub stepper: bool,
    pub index: i64,
    pub keyboard: bool,
    pub flags: String,
}

/// Inputs for SBSD body generation.
#[derive(Debug, Clone, Serialize)]
pub struct SbsdPayload {
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub vid: String,
    #[serde(rename = "bm_o")]
    pub cookie: String,
    #[serde(rename = "static")]
    pub is_static: bool,
}

/// Inputs for pixel data generation. The token is the numeric value scraped
/// from the protected page, see [`crate::extract::parse_bazadebezolkohpepadr`].
#[derive(Debug, Clone, Serialize)]
pub struct PixelPayload {
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub bazadebezolkohpepadr: i64,
    pub hash: String,
}

/// A sec-cpt proof-of-work challenge for the service to answer.
#[derive(Debug, Clone, Serialize)]
pub struct CptChallenge {
    pub token: String,
    pub timestamp: i64,
    pub nonce: String,
    pub difficulty: i64,
    pub cookie: String,
}

/// Generated sensor output. The service reports it under the short `sensor`
/// response key; the serialized form uses `sensor_data`, the name the
/// protected site expects when the value is replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorResponse {
    #[serde(rename = "sensor_data")]
    pub sensor: String,
}

/// Generated SBSD body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbsdBody {
    pub body: String,
}
