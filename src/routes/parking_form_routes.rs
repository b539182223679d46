use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use crate::dto::api_response::ApiResponse;
use crate::dto::parking_form_dto::{FormSessionResponse, SubmitResponse};
use crate::models::draft::FieldChange;
use crate::models::form_session::FormMode;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};
use chrono::Utc;
use uuid::Uuid;

pub fn create_parking_form_router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_create_form))
        .route("/vehicles/:vehicle_id", post(open_edit_form))
        .route("/sessions/:session_id", get(get_form).patch(update_field).delete(close_form))
        .route("/sessions/:session_id/submit", post(submit_form))
}

async fn open_create_form(
    State(state): State<AppState>,
) -> (StatusCode, Json<FormSessionResponse>) {
    let session = state.parking_form_controller().open_create();
    let response = FormSessionResponse::from(&session);
    state.store_form_session(session).await;
    (StatusCode::CREATED, Json(response))
}

async fn open_edit_form(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<(StatusCode, Json<FormSessionResponse>), AppError> {
    let session = state.parking_form_controller().open_edit(vehicle_id).await?;
    let response = FormSessionResponse::from(&session);
    state.store_form_session(session).await;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FormSessionResponse>, AppError> {
    let session = state
        .get_form_session(session_id)
        .await
        .ok_or_else(|| not_found_error("Form session", &session_id.to_string()))?;
    Ok(Json(FormSessionResponse::from(&session)))
}

async fn update_field(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    payload: Result<Json<FieldChange>, JsonRejection>,
) -> Result<Json<FormSessionResponse>, AppError> {
    let Json(change) = payload?;

    let controller = state.parking_form_controller();
    let ttl = state.config.form_session_ttl;
    let mut sessions = state.form_sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .filter(|session| !session.is_expired(Utc::now(), ttl))
        .ok_or_else(|| not_found_error("Form session", &session_id.to_string()))?;

    controller.apply_change(session, change);
    Ok(Json(FormSessionResponse::from(&*session)))
}

async fn submit_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubmitResponse>>, AppError> {
    // La sesión sale del mapa mientras se envía: un segundo envío no la encuentra
    let mut session = state
        .remove_form_session(session_id)
        .await
        .ok_or_else(|| not_found_error("Form session", &session_id.to_string()))?;

    let outcome = match state.parking_form_controller().submit(&mut session).await {
        Ok(outcome) => outcome,
        Err(e) => {
            state.store_form_session(session).await;
            return Err(e);
        }
    };

    let message = match outcome.mode {
        FormMode::Create => "Vehículo agregado exitosamente",
        FormMode::Edit(_) => "Vehículo actualizado exitosamente",
    };

    Ok(Json(ApiResponse::success_with_message(
        SubmitResponse {
            vehicle_id: outcome.vehicle_id,
        },
        message.to_string(),
    )))
}

async fn close_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .remove_form_session(session_id)
        .await
        .ok_or_else(|| not_found_error("Form session", &session_id.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
