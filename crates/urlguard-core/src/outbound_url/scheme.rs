//! Scheme policy: dangerous-scheme screen and the http/https allowlist.

use super::error::{InvalidUrlReason, OutboundUrlError};

/// Schemes that must never reach an outbound connection, whatever the policy.
const DANGEROUS_SCHEMES: &[&str] = &["file:", "ftp:", "javascript:", "data:", "vbscript:"];

/// Refuses candidates that spell out a dangerous scheme.
///
/// Runs on the raw candidate before scheme inference, so `file:///etc/passwd`
/// is refused outright instead of being absorbed into an inferred `https://`
/// prefix and surviving as a host named `file`.
pub fn screen_dangerous_scheme(candidate: &str) -> Result<(), OutboundUrlError> {
    let lower = candidate.to_ascii_lowercase();
    for prefix in DANGEROUS_SCHEMES {
        if lower.starts_with(prefix) {
            return Err(OutboundUrlError::invalid(
                InvalidUrlReason::UnsupportedScheme {
                    scheme: prefix.trim_end_matches(':').to_string(),
                },
            ));
        }
    }
    Ok(())
}

/// Applies the scheme allowlist to a parsed URL's scheme (already lower-cased
/// by the `url` crate): `https` always, `http` only when `allow_http`.
pub fn check_scheme_policy(scheme: &str, allow_http: bool) -> Result<(), OutboundUrlError> {
    match scheme {
        "https" => Ok(()),
        "http" if allow_http => Ok(()),
        "http" => Err(OutboundUrlError::invalid(InvalidUrlReason::HttpNotAllowed)),
        other => Err(OutboundUrlError::invalid(
            InvalidUrlReason::UnsupportedScheme {
                scheme: other.to_string(),
            },
        )),
    }
}
