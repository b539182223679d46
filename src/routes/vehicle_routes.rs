use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};
use uuid::Uuid;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let vehicles = state.vehicle_repository().find_all().await?;
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let vehicle = state
        .vehicle_repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
    Ok(Json(VehicleResponse::from(vehicle)))
}
