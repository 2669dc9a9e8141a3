use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medichat::config::AppConfig;
use medichat::routes::configure_routes;
use medichat::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing credential is startup-fatal; everything else degrades
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("FATAL: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;
    let state = Arc::new(AppState::initialize(&config));
    let routes = configure_routes(state);

    tracing::info!("Starting server on http://127.0.0.1:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}
