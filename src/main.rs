use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_lookup_server::{create_router, AppState, Config, ResponseSlot, WeatherClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_lookup_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing configuration is fatal before the listener is bound
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let weather_client = Arc::new(WeatherClient::new(config.clone())?);
    let response_slot = Arc::new(ResponseSlot::new());
    let config = Arc::new(config);

    let state = AppState {
        config,
        weather_client,
        response_slot,
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    tracing::info!("Server starting on http://0.0.0.0:8000");

    axum::serve(listener, app).await?;

    Ok(())
}
