//! hr-server process entry point

use std::net::SocketAddr;
use std::time::Duration;

use hr_server::api::{self, HttpOptions};
use hr_server::middleware::RateLimiter;
use hr_server::{AppState, Config, db, logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db_host = %config.database.host,
        db_name = %config.database.name,
        "Starting hr-server"
    );

    let pool = db::connect(&config.database).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
    })?;
    db::schema::prepare(&pool).await?;
    tracing::info!("Database ready");

    let rate_limiter = RateLimiter::new(
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    )
    .trust_forwarded(config.rate_limit_trust_forwarded);

    // Periodic cleanup of expired rate-limit windows
    let cleanup_limiter = rate_limiter.clone();
    let cleanup_every = Duration::from_secs(config.rate_limit_window_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_every);
        loop {
            interval.tick().await;
            cleanup_limiter.cleanup().await;
        }
    });

    let state = AppState::from_pool(pool.clone(), rate_limiter);
    let app = api::build_app(state, HttpOptions::from(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("hr-server listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("hr-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
