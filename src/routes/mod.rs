pub mod dashboard_routes;
pub mod parking_form_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/parking-form", parking_form_routes::create_parking_form_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "parking-management",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
