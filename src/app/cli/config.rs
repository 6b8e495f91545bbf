//! TOML configuration file parsing and loading
//!
//! Handles loading and parsing of the TOML configuration file, including
//! default config file discovery under the platform config directory.

use std::path::PathBuf;

use super::args::Args;
use crate::core::strings::title_case;

impl Args {
    /// Default configuration file path: `<config_dir>/Verstamp/verstamp.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(title_case("verstamp")).join("verstamp.toml"))
    }

    /// Load the config file (explicit path or default location) and apply it
    ///
    /// An explicitly specified file must exist and parse; the default file is
    /// optional. Errors here are fatal: logging is not up yet, so they go to
    /// stderr directly.
    pub fn parse_config_file(args: &mut Self, config_file: Option<PathBuf>) {
        let config_path = match config_file {
            Some(path) => {
                // User specified a config file - it must exist
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => {
                // Use default config path if it exists
                match Self::default_config_path() {
                    Some(path) if path.exists() => Some(path),
                    _ => None, // No config file to load
                }
            }
        };

        if let Some(path) = config_path {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match contents.parse::<toml::Table>() {
                    Ok(config) => Self::apply_toml_values(args, &config),
                    Err(e) => {
                        eprintln!("Error parsing configuration file {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading configuration file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }

    /// Apply TOML configuration values to Args
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) {
        if let Some(builder) = config.get("builder").and_then(|v| v.as_str()) {
            args.builder = Some(builder.to_string());
        }
        if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
            args.color = color;
            args.no_color = !color;
        }
        if let Some(no_color_enabled) = config.get("no-color").and_then(|v| v.as_bool()) {
            // Legacy key: no-color=true is equivalent to color=false
            args.no_color = no_color_enabled;
            args.color = !no_color_enabled;
        }
        if let Some(log_level) = config.get("log-level").and_then(|v| v.as_str()) {
            args.log_level = Some(log_level.to_string());
        }
        if let Some(log_file) = config.get("log-file").and_then(|v| v.as_str()) {
            if log_file.eq_ignore_ascii_case("none") || log_file == "-" {
                args.log_file = None; // Magic values "none" and "-" disable file logging
            } else {
                args.log_file = Some(PathBuf::from(log_file));
            }
        }
        if let Some(log_format) = config.get("log-format").and_then(|v| v.as_str()) {
            args.log_format = Some(log_format.to_string());
        }
    }
}
