//! TOML configuration tests
//!
//! Tests for configuration file loading and the config-then-CLI precedence.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use verstamp::app::cli::args::Args;

fn table(contents: &str) -> toml::Table {
    contents.parse::<toml::Table>().unwrap()
}

#[test]
fn test_apply_toml_values() {
    let mut args = Args::new();
    let config = table(
        r#"
builder = "release-bot"
log-level = "debug"
log-format = "json"
"#,
    );

    Args::apply_toml_values(&mut args, &config);

    assert_eq!(args.builder, Some("release-bot".to_string()));
    assert_eq!(args.log_level, Some("debug".to_string()));
    assert_eq!(args.log_format, Some("json".to_string()));
}

#[test]
fn test_apply_toml_color_keys() {
    let mut args = Args::new();
    Args::apply_toml_values(&mut args, &table("color = true"));
    assert!(args.color);
    assert!(!args.no_color);

    // Legacy key: no-color=true is equivalent to color=false
    let mut args = Args::new();
    Args::apply_toml_values(&mut args, &table("no-color = true"));
    assert!(!args.color);
    assert!(args.no_color);
}

#[test]
fn test_apply_toml_log_file_magic_values() {
    let mut args = Args::new();
    args.log_file = Some(PathBuf::from("build.log"));
    Args::apply_toml_values(&mut args, &table(r#"log-file = "none""#));
    assert_eq!(args.log_file, None);

    let mut args = Args::new();
    Args::apply_toml_values(&mut args, &table(r#"log-file = "stamp.log""#));
    assert_eq!(args.log_file, Some(PathBuf::from("stamp.log")));
}

#[test]
fn test_apply_toml_ignores_unknown_keys() {
    let mut args = Args::new();
    Args::apply_toml_values(&mut args, &table(r#"unknown-key = "value""#));

    assert_eq!(args.builder, None);
    assert_eq!(args.log_level, None);
}

#[test]
fn test_parse_config_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("verstamp.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, r#"builder = "nightly""#).unwrap();
    writeln!(file, r#"log-level = "warn""#).unwrap();

    let mut args = Args::new();
    Args::parse_config_file(&mut args, Some(config_path));

    assert_eq!(args.builder, Some("nightly".to_string()));
    assert_eq!(args.log_level, Some("warn".to_string()));
}

#[test]
fn test_cli_takes_precedence_over_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("verstamp.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, r#"builder = "from-config""#).unwrap();

    let mut args = Args::new();
    Args::parse_config_file(&mut args, Some(config_path));

    let cli = Args::try_parse_from(["verstamp", "--builder", "from-cli"]).unwrap();
    args.merge_cli(cli);

    assert_eq!(args.builder, Some("from-cli".to_string()));
}

#[test]
fn test_default_config_path_shape() {
    if let Some(path) = Args::default_config_path() {
        assert!(path.ends_with(PathBuf::from("Verstamp").join("verstamp.toml")));
    }
}
