//! Check command: validate a single gateway base URL.

use anyhow::Result;
use urlguard_core::config::GuardConfig;

use super::{check_candidate, exit_code_for};

/// Validate one candidate and print the verdict. Returns the exit code
/// (0 accepted, 2 invalid input, 3 blocked address).
pub fn run_check(cfg: &GuardConfig, url: &str, allow_http: bool, json: bool) -> Result<i32> {
    let allow_http = allow_http || cfg.allow_http;

    match check_candidate(cfg, url, allow_http) {
        Ok(canonical) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "url": canonical })
                );
            } else {
                println!("{canonical}");
            }
            Ok(0)
        }
        Err(err) => {
            let code = exit_code_for(&err);
            if json {
                let kind = match code {
                    super::EXIT_BLOCKED => "private_address_blocked",
                    _ => "invalid_base_url",
                };
                println!(
                    "{}",
                    serde_json::json!({ "ok": false, "kind": kind, "error": err.to_string() })
                );
            } else {
                eprintln!("{err}");
            }
            Ok(code)
        }
    }
}
