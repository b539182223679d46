use chrono::FixedOffset;
use serde::Serialize;

use crate::dto::vehicle_dto::VehicleRowResponse;
use crate::models::dashboard::{DashboardSummary, DashboardView};

// Response del dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub capacity: i64,
    pub summary: DashboardSummary,
    pub vehicles: Vec<VehicleRowResponse>,
}

impl DashboardResponse {
    pub fn from_view(view: &DashboardView, offset: &FixedOffset) -> Self {
        Self {
            capacity: view.capacity(),
            summary: view.summary,
            vehicles: view
                .vehicles
                .iter()
                .map(|vehicle| VehicleRowResponse::from_record(vehicle, offset))
                .collect(),
        }
    }
}
