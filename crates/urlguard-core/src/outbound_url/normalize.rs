//! Candidate normalization: trimming, trailing-slash stripping, scheme inference.

/// Trims surrounding whitespace and strips every trailing `/`.
pub fn normalize_candidate(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// True if the string starts with `http://` or `https://`, case-insensitive.
pub fn has_http_scheme(s: &str) -> bool {
    let prefix = |p: &str| s.get(..p.len()).is_some_and(|h| h.eq_ignore_ascii_case(p));
    prefix("http://") || prefix("https://")
}

/// Prepends `https://` when the candidate spells out no http(s) scheme.
///
/// The inferred scheme is always the encrypted one; plain `http` must be
/// written out by the tenant and separately allowed by policy.
pub fn ensure_scheme(normalized: &str) -> String {
    if has_http_scheme(normalized) {
        normalized.to_string()
    } else {
        format!("https://{normalized}")
    }
}
