//! Pure HTML extractors for values embedded in protected pages.
//!
//! Both functions are deterministic over their input text and independent of
//! the API client. Patterns match what the anti-bot vendor actually emits,
//! not general HTML.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static BAZADEBEZOLKOHPEPADR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"bazadebezolkohpepadr="([^"]+)""#).unwrap());

// The src path is restricted to the lowercase-alnum/-/_// class the vendor
// uses for its randomized script paths; anything broader would match
// unrelated script tags on the page.
static SCRIPT_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<script type="text/javascript"\s+(?:nonce=".*?"\s+)?src="([a-z\d/\-_]+)"></script>"#)
        .unwrap()
});

/// Errors surfaced by the HTML extractors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to parse {0}")]
    NotFound(&'static str),
    #[error("invalid numeric value: {0}")]
    Conversion(#[from] std::num::ParseIntError),
}

/// Extracts the numeric pixel token the anti-bot script plants on the page
/// as a `bazadebezolkohpepadr="…"` attribute.
pub fn parse_bazadebezolkohpepadr(html: &str) -> Result<i64, ExtractError> {
    let capture = BAZADEBEZOLKOHPEPADR_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or(ExtractError::NotFound("bazadebezolkohpepadr"))?;

    Ok(capture.as_str().parse()?)
}

/// Extracts the `src` path of the vendor's challenge script tag, with or
/// without an interleaved `nonce` attribute.
pub fn parse_script_url(html: &str) -> Result<String, ExtractError> {
    SCRIPT_URL_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|capture| capture.as_str().to_string())
        .ok_or(ExtractError::NotFound("script URL"))
}
