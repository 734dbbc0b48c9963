//! Backend entry-point: loads settings, prepares PostgreSQL, serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::config::TodoSettings;
use todo_backend::inbound::http::health::HealthState;
use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};

use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = TodoSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let pool = DbPool::new(
        PoolConfig::new(settings.database_url()).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(|e| std::io::Error::other(format!("database unavailable: {e}")))?;

    DieselTodoRepository::new(pool.clone())
        .ensure_schema()
        .await
        .map_err(|e| std::io::Error::other(format!("schema setup failed: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(&pool);
    let bind_addr = settings.bind_address();
    info!(host = %bind_addr.0, port = bind_addr.1, "starting todo server");

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::make_metrics()?));

    create_server(health_state, http_state, config)?.await
}
