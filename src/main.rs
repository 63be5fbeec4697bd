use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::Config;
use mergington::database::CsvRosterStore;
use mergington::services::activity_registry::ActivityRegistry;
use mergington::services::roster_service::RosterService;
use mergington::web;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let store = CsvRosterStore::new(config.participants_path(), config.students_path());
    info!(
        participants = %store.participants_path().display(),
        students = %store.students_path().display(),
        "loading roster"
    );

    let service = Arc::new(RosterService::open(ActivityRegistry::seeded(), Arc::new(store)).await);
    let app = web::app(service, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid HOST/PORT")?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(port) = config.fallback_port() else {
                return Err(e).with_context(|| format!("could not bind {}", addr));
            };
            let fallback = SocketAddr::new(addr.ip(), port);
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind {} or {}", addr, fallback))?
        }
    };

    info!(
        addr = %listener.local_addr()?,
        build = env!("MERGINGTON_BUILD_ID"),
        "server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
