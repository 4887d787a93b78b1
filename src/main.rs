//! CI/CD backend API server binary.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cicd_backend::config::AppConfig;
use cicd_backend::routes::{app_router, AppState};
use cicd_backend::{metrics, migration};

#[derive(Parser)]
#[command(name = "cicd-backend", about = "CI/CD platform backend API")]
struct Cli {
    /// Server port
    #[arg(short, long, env = "PORT", default_value = "5001")]
    port: u16,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG wins, LOG_LEVEL is the platform's knob
    let default_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_level))
    };
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    }

    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.database_url.clone());

    tracing::info!("Starting CI/CD backend API...");

    // Database pool
    let manager =
        AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.effective_database_url());
    let pool = Pool::builder(manager)
        .max_size(10)
        .build()
        .context("build database pool")?;

    // Ensure the schema exists before serving queries
    {
        let mut conn = pool
            .get()
            .await
            .map_err(|e| anyhow::anyhow!("database pool: {e}"))?;
        tracing::info!("Running database migrations...");
        migration::run_migrations(&mut conn).await?;
        tracing::info!("Database migrations completed.");
    }

    let metrics_handle = metrics::install_recorder()?;

    let app = app_router(AppState {
        pool,
        config,
        metrics: metrics_handle,
    })
    .layer(TraceLayer::new_for_http())
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
