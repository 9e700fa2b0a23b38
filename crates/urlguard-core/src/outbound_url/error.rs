//! Classified validation errors.

use std::fmt;
use thiserror::Error;

/// Detail for the `InvalidBaseUrl` kind, so callers can map each case to its
/// own remediation copy (e.g. a localized error-key lookup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// Candidate was absent, or empty after trimming.
    Missing,
    /// Candidate did not parse as a URL.
    Malformed,
    /// Scheme is never acceptable for outbound gateway traffic.
    UnsupportedScheme { scheme: String },
    /// Plain `http` supplied while the call site requires `https`.
    HttpNotAllowed,
    /// Parsed URL carries no hostname.
    EmptyHost,
}

impl fmt::Display for InvalidUrlReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUrlReason::Missing => write!(f, "a non-empty URL is required"),
            InvalidUrlReason::Malformed => write!(f, "malformed URL"),
            InvalidUrlReason::UnsupportedScheme { scheme } => {
                write!(f, "unsupported protocol '{scheme}'")
            }
            InvalidUrlReason::HttpNotAllowed => write!(f, "must use HTTPS"),
            InvalidUrlReason::EmptyHost => write!(f, "URL has no hostname"),
        }
    }
}

/// Why a candidate gateway base URL was refused.
///
/// Exactly two kinds, and callers are expected to branch on them: bad input
/// the tenant must fix versus a well-formed URL that targets an address the
/// platform will never dial. Both are terminal; the guard never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutboundUrlError {
    #[error("invalid gateway base URL: {reason}")]
    InvalidBaseUrl { reason: InvalidUrlReason },

    #[error("gateway base URL targets a blocked address: {host}")]
    PrivateAddressBlocked { host: String },
}

impl OutboundUrlError {
    pub(crate) fn invalid(reason: InvalidUrlReason) -> Self {
        Self::InvalidBaseUrl { reason }
    }

    pub(crate) fn blocked(host: impl Into<String>) -> Self {
        Self::PrivateAddressBlocked { host: host.into() }
    }
}
