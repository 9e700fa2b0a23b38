//! Outbound gateway base URL validation (SSRF guard).
//!
//! Tenant administrators supply the base URL of their self-hosted messaging
//! gateway, and the platform later opens HTTP connections to it. Before that
//! URL is stored or dialed it must pass [`validate_outbound_base_url`], which
//! either returns a canonical form or fails with one of two classified
//! errors: [`OutboundUrlError::InvalidBaseUrl`] for input the tenant must
//! correct, [`OutboundUrlError::PrivateAddressBlocked`] for destinations the
//! platform refuses to dial.
//!
//! The checks are lexical: the hostname is judged as written, without DNS
//! resolution. A public-looking name that resolves to a private address at
//! connect time is not caught here; callers wanting that guarantee must
//! resolve and re-check immediately before connecting.

mod error;
mod host;
mod normalize;
mod scheme;

pub use error::{InvalidUrlReason, OutboundUrlError};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validates a tenant-supplied gateway base URL, returning its canonical form.
///
/// The canonical form is trimmed, trailing-slash-free, and scheme-qualified
/// (`https://` is inferred when no scheme was written; plain `http` must be
/// spelled out and is only accepted when `allow_http` is set). Port, path,
/// query, and fragment are preserved as supplied. `file:`, `ftp:`,
/// `javascript:`, `data:`, and `vbscript:` are refused unconditionally.
///
/// Pure and deterministic: identical input yields identical output, and a
/// successful output re-validates to itself.
///
/// # Examples
///
/// - `validate_outbound_base_url(Some("example.com"), false)` → `"https://example.com"`
/// - `validate_outbound_base_url(Some("https://example.com/"), false)` → `"https://example.com"`
/// - `validate_outbound_base_url(Some("https://10.0.0.1"), false)` → `PrivateAddressBlocked`
pub fn validate_outbound_base_url(
    candidate: Option<&str>,
    allow_http: bool,
) -> Result<String, OutboundUrlError> {
    let normalized = normalize::normalize_candidate(candidate.unwrap_or(""));
    if normalized.is_empty() {
        return Err(OutboundUrlError::invalid(InvalidUrlReason::Missing));
    }

    scheme::screen_dangerous_scheme(&normalized)?;
    let qualified = normalize::ensure_scheme(&normalized);

    let parsed = url::Url::parse(&qualified)
        .map_err(|_| OutboundUrlError::invalid(InvalidUrlReason::Malformed))?;

    scheme::check_scheme_policy(parsed.scheme(), allow_http)?;

    let host = parsed.host_str().unwrap_or("");
    if host.is_empty() {
        return Err(OutboundUrlError::invalid(InvalidUrlReason::EmptyHost));
    }
    host::check_host(host)?;

    Ok(qualified)
}

/// A gateway base URL that has passed validation.
///
/// Constructible only through [`OutboundBaseUrl::parse`], so a function that
/// takes this type is guaranteed a policy-checked destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OutboundBaseUrl(String);

impl OutboundBaseUrl {
    /// Validates `candidate` and wraps the canonical form.
    pub fn parse(candidate: Option<&str>, allow_http: bool) -> Result<Self, OutboundUrlError> {
        validate_outbound_base_url(candidate, allow_http).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutboundBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OutboundBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OutboundBaseUrl {
    type Error = OutboundUrlError;

    /// Re-validates on deserialization. `http` is accepted here: a stored
    /// value was already policy-checked at entry, and rejecting it now would
    /// make previously accepted settings unreadable.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(&value), true)
    }
}

impl From<OutboundBaseUrl> for String {
    fn from(url: OutboundBaseUrl) -> Self {
        url.0
    }
}
