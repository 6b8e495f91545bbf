use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;

use super::cli::args::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::identity::{ConfiguredIdentityProvider, IdentityProvider, SystemIdentityProvider};
use crate::core::logging::{init_logging, reconfigure_logging};
use crate::core::resolver::{VersionResolver, DEFAULT_VERSION};
use crate::core::time::SystemTimeProvider;

/// Initialize application startup
pub fn startup() {
    let cli = Args::parse();

    // Stage 1: logging from the command line alone, so config loading is logged
    let use_color = (cli.color || std::io::stdout().is_terminal()) && !cli.no_color;
    if let Err(e) = init_logging(
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
        cli.effective_log_file().as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        std::process::exit(1);
    }

    log::debug!("verstamp: Artifact version stamping tool starting");

    // Stage 2: configuration file, then CLI arguments on top
    let mut args = Args::new();
    Args::parse_config_file(&mut args, cli.config_file.clone());
    args.merge_cli(cli);

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    if let Err(e) = reconfigure_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.effective_log_file().as_deref(),
        use_color,
    ) {
        log::warn!("Could not apply logging settings from configuration: {}", e);
    }

    // Stage 3: resolve the candidate version and print the result
    let identity: Arc<dyn IdentityProvider> = match &args.builder {
        Some(name) => Arc::new(ConfiguredIdentityProvider::new(name.clone())),
        None => Arc::new(SystemIdentityProvider),
    };
    let resolver = VersionResolver::new(Arc::new(SystemTimeProvider), identity);

    let candidate = args
        .version
        .clone()
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());
    log::debug!("Resolving candidate version '{}'", candidate);

    match resolver.resolve(&candidate) {
        Ok(final_version) => {
            log::debug!("Resolved '{}' to '{}'", candidate, final_version);
            println!("{}", final_version);
        }
        Err(e) => {
            log_error_with_context(&e, "Version resolution");
            std::process::exit(1);
        }
    }
}
