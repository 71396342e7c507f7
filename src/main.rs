// Weather Report server v0.1
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_report::{routes, AppConfig, WeatherService};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_report=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let service = WeatherService::new(&config).expect("Failed to build weather service");
    let app = routes::router(service);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Weather server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
