//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting so `main.rs` stays a thin
//! orchestrator: opening the store, wiring the HTTP server, starting the
//! background jobs, and coordinating graceful shutdown.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use log::info;

use rosterd_api::{configure_routes, ApiContext};
use rosterd_jobs::{
    DailyRollupExecutor, EmailDispatchExecutor, JobScheduler, LogEmailSender,
};
use rosterd_store::Store;

use crate::config::ServerConfig;
use crate::middleware;

/// Aggregated application components shared between the HTTP server and
/// shutdown handling.
pub struct ApplicationComponents {
    pub store: Store,
    pub scheduler: JobScheduler,
}

/// Open the store and prepare the background job scheduler.
pub async fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    let phase_start = std::time::Instant::now();

    if let Some(parent) = Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = Store::open(&config.database.path, config.database.max_connections).await?;
    info!(
        "Store ready ({:.2}ms)",
        phase_start.elapsed().as_secs_f64() * 1000.0
    );

    let mut scheduler = JobScheduler::new();
    scheduler.register(
        Arc::new(
            EmailDispatchExecutor::new(store.emails(), Arc::new(LogEmailSender)).with_limits(
                config.jobs.dispatch_batch_size,
                config.jobs.max_send_attempts,
            ),
        ),
        Duration::from_secs(config.jobs.email_dispatch_interval_seconds),
    );
    scheduler.register(
        Arc::new(DailyRollupExecutor::new(
            store.users(),
            store.emails(),
            store.stats(),
        )),
        Duration::from_secs(config.jobs.rollup_interval_seconds),
    );

    Ok(ApplicationComponents { store, scheduler })
}

/// Run the HTTP server until a termination signal is received, then stop the
/// background jobs.
pub async fn run(config: &ServerConfig, mut components: ApplicationComponents) -> Result<()> {
    components.scheduler.start();

    let ctx = ApiContext::new(
        components.store.clone(),
        config.pagination.default_page_size,
        config.pagination.max_page_size,
    );

    let cors_source = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::build_request_logger())
            .wrap(middleware::build_cors_from_config(&cors_source))
            .app_data(web::Data::new(ctx.clone()))
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?;

    info!(
        "Listening on http://{}:{}",
        config.server.host, config.server.port
    );

    // Actix installs its own signal handler; run() returns once graceful
    // shutdown has completed.
    server.run().await?;

    info!("HTTP server stopped, shutting down background jobs");
    components.scheduler.shutdown().await;
    info!("Shutdown complete");
    Ok(())
}
