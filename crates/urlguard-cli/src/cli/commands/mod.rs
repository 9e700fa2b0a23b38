//! Command implementations.

mod batch;
mod check;
mod config;

pub use batch::run_batch;
pub use check::run_check;
pub use config::run_config;

use urlguard_core::config::GuardConfig;
use urlguard_core::outbound_url::{validate_outbound_base_url, OutboundUrlError};

/// Exit code when the candidate is rejected as invalid input.
pub(crate) const EXIT_INVALID: i32 = 2;
/// Exit code when the candidate targets a blocked address.
pub(crate) const EXIT_BLOCKED: i32 = 3;

/// Runs the core guard, then the deployment blocklist from the config file.
///
/// The extra hostnames are compared exactly (case-insensitive) against the
/// canonical URL's host, after the built-in checks have passed.
pub(crate) fn check_candidate(
    cfg: &GuardConfig,
    candidate: &str,
    allow_http: bool,
) -> Result<String, OutboundUrlError> {
    let canonical = validate_outbound_base_url(Some(candidate), allow_http)?;

    if !cfg.blocked_hosts.is_empty() {
        // The canonical form is guaranteed parseable with a host.
        if let Some(host) = url::Url::parse(&canonical)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
        {
            if cfg
                .blocked_hosts
                .iter()
                .any(|blocked| blocked.eq_ignore_ascii_case(&host))
            {
                return Err(OutboundUrlError::PrivateAddressBlocked { host });
            }
        }
    }

    Ok(canonical)
}

/// Exit code for a refused candidate, by error kind.
pub(crate) fn exit_code_for(err: &OutboundUrlError) -> i32 {
    match err {
        OutboundUrlError::InvalidBaseUrl { .. } => EXIT_INVALID,
        OutboundUrlError::PrivateAddressBlocked { .. } => EXIT_BLOCKED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_blocklist_applies_after_core_checks() {
        let cfg = GuardConfig {
            allow_http: false,
            blocked_hosts: vec!["Forbidden.Example.com".to_string()],
        };

        assert_eq!(
            check_candidate(&cfg, "https://ok.example.com", false).unwrap(),
            "https://ok.example.com"
        );
        assert!(matches!(
            check_candidate(&cfg, "https://forbidden.example.com", false),
            Err(OutboundUrlError::PrivateAddressBlocked { .. })
        ));
        // Core denylist still wins even with an empty extra list.
        assert!(check_candidate(&GuardConfig::default(), "https://10.0.0.1", false).is_err());
    }

    #[test]
    fn exit_codes_by_kind() {
        let invalid = check_candidate(&GuardConfig::default(), "", false).unwrap_err();
        assert_eq!(exit_code_for(&invalid), EXIT_INVALID);

        let blocked = check_candidate(&GuardConfig::default(), "https://localhost", false)
            .unwrap_err();
        assert_eq!(exit_code_for(&blocked), EXIT_BLOCKED);
    }
}
