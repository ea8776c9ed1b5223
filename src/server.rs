//! HTTP server initialization and runtime setup.
//!
//! Handles the storage connection, migrations, service wiring and the Axum
//! server lifecycle.

use crate::application::shortener::{CanonicalShortener, ShortenerConfig};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

/// Total number of storage connection attempts at startup.
const CONNECT_ATTEMPTS: usize = 5;

/// Pause between storage connection attempts.
const CONNECT_RETRY_INTERVAL_MS: u64 = 2000;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage (PostgreSQL pool with migrations, or in-memory for `memory://`)
/// - Shortener and services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The storage connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_repository(&config).await?;

    let shortener = Arc::new(CanonicalShortener::new(ShortenerConfig {
        domain: config.domain.clone(),
        prefix: config.prefix.clone(),
        slug_length: config.slug_length,
    }));

    let state = AppState::new(repository, shortener, config.ttl()?, config.request_timeout);

    let app = app_router(state, &config.prefix);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the storage selected by `database_url`.
async fn connect_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    if config.is_in_memory() {
        tracing::warn!("Using in-memory storage, records are lost on restart");
        return Ok(Arc::new(MemoryUrlRepository::new()));
    }

    let pool = connect_with_retry(config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

/// Connects to PostgreSQL, retrying at a fixed interval.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy =
        FixedInterval::from_millis(CONNECT_RETRY_INTERVAL_MS).take(CONNECT_ATTEMPTS - 1);

    let mut attempt = 0;
    Retry::spawn(strategy, || {
        attempt += 1;
        let current = attempt;
        async move {
            PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(&config.database_url)
                .await
                .inspect_err(|e| {
                    tracing::warn!(
                        attempt = current,
                        max_attempts = CONNECT_ATTEMPTS,
                        error = %e,
                        "Failed to connect to database"
                    );
                })
        }
    })
    .await
    .with_context(|| format!("Could not connect to database after {CONNECT_ATTEMPTS} attempts"))
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
