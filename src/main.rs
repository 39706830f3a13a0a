//! rosterd server entrypoint.
//!
//! The heavy lifting (initialization, middleware wiring, graceful shutdown)
//! lives in dedicated modules so this file remains a thin orchestrator.

use anyhow::Result;
use log::info;

use rosterd_server::config::ServerConfig;
use rosterd_server::lifecycle::{bootstrap, run};
use rosterd_server::logging;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fall back to defaults when the file is missing)
    let config_path = "config.toml";
    let config = match ServerConfig::from_file(config_path) {
        Ok(cfg) => {
            eprintln!(
                "Loaded config from: {}",
                std::fs::canonicalize(config_path)
                    .unwrap_or_else(|_| std::path::PathBuf::from(config_path))
                    .display()
            );
            cfg
        }
        Err(e) => {
            eprintln!("No usable config.toml ({}), using built-in defaults", e);
            ServerConfig::default()
        }
    };
    config.validate()?;

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        Some(&config.logging.targets),
        &config.logging.format,
    )?;

    info!("rosterd v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    // Build application state and kick off background services
    let components = bootstrap(&config).await?;

    // Run HTTP server until termination signal is received
    run(&config, components).await
}
