//! Criado server binary.
//!
//! Boot order: environment, tracing, database pool and migrations, then
//! the HTTP listener. Missing required configuration aborts startup.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use criado::adapter::inbound::http::{router, AppState};
use criado::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use criado::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is a convenience; absence is fine.
    let _ = dotenvy::dotenv();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "criado=info,tower_http=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env().context("failed to load configuration")?;

    let pool = create_pool(&config.database_url).context("failed to create database pool")?;
    run_migrations(&pool).context("failed to run migrations")?;
    info!(database_url = %config.database_url, "database ready");

    let bind_addr = config.bind_addr;
    let app = router(AppState::new(config, pool));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
