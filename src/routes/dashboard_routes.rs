use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use crate::dto::api_response::ApiResponse;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/vehicles/:id", delete(delete_vehicle))
}

async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = state.dashboard_controller();
    let view = controller.load().await?;
    Ok(Json(DashboardResponse::from_view(&view, &state.config.local_offset)))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DashboardResponse>>, AppError> {
    let controller = state.dashboard_controller();
    let mut view = controller.load().await?;
    controller.delete(&mut view, id).await?;

    Ok(Json(ApiResponse::success_with_message(
        DashboardResponse::from_view(&view, &state.config.local_offset),
        "Vehículo eliminado exitosamente".to_string(),
    )))
}
