use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::draft::VehicleDraft;
use crate::models::form_session::FormSession;

// Response de una sesión de formulario
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSessionResponse {
    pub session_id: Uuid,
    pub mode: &'static str,
    pub vehicle_id: Option<Uuid>,
    pub draft: VehicleDraft,
    pub opened_at: DateTime<Utc>,
}

// Response de un envío exitoso
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub vehicle_id: Uuid,
}

impl From<&FormSession> for FormSessionResponse {
    fn from(session: &FormSession) -> Self {
        Self {
            session_id: session.id,
            mode: session.mode.as_str(),
            vehicle_id: session.mode.vehicle_id(),
            draft: session.draft.clone(),
            opened_at: session.opened_at,
        }
    }
}
