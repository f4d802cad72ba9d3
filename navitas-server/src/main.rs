use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navitas_server::config::ServerConfig;
use navitas_server::web::{AppState, create_router};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let addr = config.bind_addr;

    // Build app state and router
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    info!("Navitas parser listening on http://{addr}");
    info!("  GET  /health              - Health check");
    info!("  POST /api/navitas/parse   - Parse a paste for preview");
    info!("  POST /api/navitas/import  - Convert a paste into option drafts");

    axum::serve(listener, app).await.expect("Server error");
}
