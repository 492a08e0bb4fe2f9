use station_server::config::ServerConfig;
use station_server::stations::StationDataset;
use station_server::web::{AppState, create_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr, honouring RUST_LOG when set
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,station_server=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env()?;

    // Load the dataset once; it is never modified while serving
    let dataset = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading station dataset");
            StationDataset::load(path)?
        }
        None => StationDataset::builtin(),
    };
    tracing::info!(records = dataset.len(), "station dataset ready");

    let app = create_router(AppState::new(dataset));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Station directory listening on http://{}", config.addr);
    tracing::info!("  GET  /stations?city=&code=  - List stations");
    tracing::info!("  GET  /hello                 - Health check");
    tracing::info!("  GET  /test                  - Plain-text smoke test");

    axum::serve(listener, app).await?;
    Ok(())
}
