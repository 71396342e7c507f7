use axum::http::Method;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::services::forecast::WeatherService;

pub mod health;
pub mod weather;

/// Weather Report API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Report API",
        version = "0.1.0",
        description = "Plain-text 24-hour and 7-day weather reports for a place name. \
            Resolves the name with the Open-Meteo geocoder and fetches the forecast \
            from Open-Meteo on every request.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Weather", description = "Weather reports"),
    ),
    paths(
        health::health_check,
        weather::get_weather_report,
    ),
    components(
        schemas(
            health::HealthResponse,
        )
    )
)]
pub struct ApiDoc;

/// Build the application router.
///
/// The report route is a catch-all, so it only sees paths the static routes
/// (health, Swagger UI) don't claim.
pub fn router(service: WeatherService) -> Router {
    // Read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(weather::usage))
        .route("/api/v1/health", get(health::health_check))
        .route("/*place", get(weather::get_weather_report))
        .with_state(service)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
