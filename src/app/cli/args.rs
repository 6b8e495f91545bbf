//! Command line argument parsing
//!
//! Configuration file values are applied to a fresh `Args` first, then the
//! parsed command line is merged on top so CLI arguments always win.

use clap::Parser;
use std::path::PathBuf;

/// Arguments structure with all command-line options
#[derive(Parser, Debug, Clone)]
#[command(name = "verstamp")]
#[command(about = "Artifact version stamping tool for packaged builds")]
#[command(version = crate::core::version::full_version())]
pub struct Args {
    /// Candidate version to resolve (defaults to the unspecified sentinel)
    #[arg(id = "candidate_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Builder name recorded in snapshot build metadata (defaults to the OS account)
    #[arg(long = "builder", value_name = "NAME")]
    pub builder: Option<String>,

    /// Configuration file path
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored output (overrides TTY detection and NO_COLOR)
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            version: None,
            builder: None,
            config_file: None,
            color: false,
            no_color: false,
            log_level: None,
            log_file: None,
            log_format: Some("text".to_string()), // Default format
        }
    }
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge command-line values over configuration file values
    pub fn merge_cli(&mut self, cli: Args) {
        if cli.version.is_some() {
            self.version = cli.version;
        }
        if cli.builder.is_some() {
            self.builder = cli.builder;
        }
        if cli.config_file.is_some() {
            self.config_file = cli.config_file;
        }
        if cli.color {
            self.color = true;
            self.no_color = false;
        }
        if cli.no_color {
            self.no_color = true;
            self.color = false;
        }
        if cli.log_level.is_some() {
            self.log_level = cli.log_level;
        }
        if cli.log_file.is_some() {
            self.log_file = cli.log_file;
        }
        if cli.log_format.is_some() {
            self.log_format = cli.log_format;
        }
    }

    /// Log file path as a string, with the 'none' and '-' magic values
    /// (which disable file logging) resolved away
    pub fn effective_log_file(&self) -> Option<String> {
        self.log_file.as_ref().and_then(|p| {
            let s = p.to_string_lossy();
            if s.eq_ignore_ascii_case("none") || s == "-" {
                None
            } else {
                Some(s.to_string())
            }
        })
    }
}
