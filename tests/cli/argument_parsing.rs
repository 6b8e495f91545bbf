//! CLI argument parsing tests
//!
//! Tests for command-line argument parsing and flag validation.

use clap::Parser;
use std::path::PathBuf;
use verstamp::app::cli::args::Args;

#[test]
fn test_parse_version_and_builder() {
    let args = Args::try_parse_from(["verstamp", "2.3-SNAPSHOT", "--builder", "alice"]).unwrap();

    assert_eq!(args.version, Some("2.3-SNAPSHOT".to_string()));
    assert_eq!(args.builder, Some("alice".to_string()));
}

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["verstamp"]).unwrap();

    assert_eq!(args.version, None);
    assert_eq!(args.builder, None);
    assert_eq!(args.config_file, None);
    assert!(!args.color);
    assert!(!args.no_color);
    assert_eq!(args.log_level, None);
}

#[test]
fn test_color_flags_conflict() {
    let result = Args::try_parse_from(["verstamp", "--color", "--no-color"]);
    assert!(result.is_err());
}

#[test]
fn test_log_level_values_validated() {
    assert!(Args::try_parse_from(["verstamp", "--log-level", "debug"]).is_ok());
    assert!(Args::try_parse_from(["verstamp", "--log-level", "loud"]).is_err());
}

#[test]
fn test_log_format_values_validated() {
    assert!(Args::try_parse_from(["verstamp", "--log-format", "json"]).is_ok());
    assert!(Args::try_parse_from(["verstamp", "--log-format", "ext"]).is_ok());
    assert!(Args::try_parse_from(["verstamp", "--log-format", "xml"]).is_err());
}

#[test]
fn test_config_file_argument() {
    let args = Args::try_parse_from(["verstamp", "--config-file", "/tmp/verstamp.toml"]).unwrap();
    assert_eq!(args.config_file, Some(PathBuf::from("/tmp/verstamp.toml")));
}

#[test]
fn test_effective_log_file_magic_values() {
    let mut args = Args::try_parse_from(["verstamp", "--log-file", "none"]).unwrap();
    assert_eq!(args.effective_log_file(), None);

    args = Args::try_parse_from(["verstamp", "--log-file", "-"]).unwrap();
    assert_eq!(args.effective_log_file(), None);

    args = Args::try_parse_from(["verstamp", "--log-file", "build.log"]).unwrap();
    assert_eq!(args.effective_log_file(), Some("build.log".to_string()));
}

#[test]
fn test_merge_cli_overrides_builder() {
    let mut args = Args::new();
    args.builder = Some("from-config".to_string());

    let cli = Args::try_parse_from(["verstamp", "--builder", "from-cli"]).unwrap();
    args.merge_cli(cli);

    assert_eq!(args.builder, Some("from-cli".to_string()));
}

#[test]
fn test_merge_cli_keeps_config_values_when_unset() {
    let mut args = Args::new();
    args.builder = Some("from-config".to_string());
    args.log_level = Some("warn".to_string());

    let cli = Args::try_parse_from(["verstamp", "1.2.3"]).unwrap();
    args.merge_cli(cli);

    assert_eq!(args.builder, Some("from-config".to_string()));
    assert_eq!(args.log_level, Some("warn".to_string()));
    assert_eq!(args.version, Some("1.2.3".to_string()));
}

#[test]
fn test_merge_cli_color_overrides_config_no_color() {
    let mut args = Args::new();
    args.no_color = true;

    let cli = Args::try_parse_from(["verstamp", "--color"]).unwrap();
    args.merge_cli(cli);

    assert!(args.color);
    assert!(!args.no_color);
}
