//! Tests for check, batch, and config subcommand parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_check() {
    match parse(&["urlguard", "check", "https://gateway.example.com"]) {
        CliCommand::Check {
            url,
            allow_http,
            json,
        } => {
            assert_eq!(url, "https://gateway.example.com");
            assert!(!allow_http);
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_flags() {
    match parse(&[
        "urlguard",
        "check",
        "http://gateway.example.com",
        "--allow-http",
        "--json",
    ]) {
        CliCommand::Check {
            url,
            allow_http,
            json,
        } => {
            assert_eq!(url, "http://gateway.example.com");
            assert!(allow_http);
            assert!(json);
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_parse_batch_with_path() {
    match parse(&["urlguard", "batch", "urls.txt"]) {
        CliCommand::Batch { path, allow_http } => {
            assert_eq!(path, Some(PathBuf::from("urls.txt")));
            assert!(!allow_http);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_stdin() {
    match parse(&["urlguard", "batch", "--allow-http"]) {
        CliCommand::Batch { path, allow_http } => {
            assert!(path.is_none());
            assert!(allow_http);
        }
        _ => panic!("expected Batch reading stdin"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(
        parse(&["urlguard", "config"]),
        CliCommand::Config
    ));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["urlguard", "resolve", "x"]).is_err());
}

#[test]
fn cli_check_requires_url() {
    assert!(Cli::try_parse_from(["urlguard", "check"]).is_err());
}
