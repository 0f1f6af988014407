use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use eventos::modules::eventos::adapters::outbound::eventos_in_memory::InMemoryEventos;
use eventos::shell::config::AppConfig;
use eventos::shell::http::{BASE_PATH, router};
use eventos::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    // In-memory store, seeded on every boot
    let state = AppState {
        eventos: Arc::new(InMemoryEventos::seeded()),
    };

    let app = router(state, &config);

    tracing::info!(environment = ?config.environment, "Eventos API: http://{}{}/eventos", addr, BASE_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
