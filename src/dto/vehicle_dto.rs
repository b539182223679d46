use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::VehicleRecord;
use crate::utils::datetime::format_display_date;

/// Texto del listado cuando no hay hora de salida
pub const NO_EXIT_TIME: &str = "N/A";

// Response de vehículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub license_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub status: String,
    pub address: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub parking_charge: i64,
}

// Fila del listado del dashboard, con fechas ya formateadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRowResponse {
    pub id: Uuid,
    pub owner_name: String,
    pub vehicle_type: String,
    pub license_number: String,
    pub entry_time: String,
    pub exit_time: String,
    pub status: String,
    pub parking_charge: i64,
}

impl From<VehicleRecord> for VehicleResponse {
    fn from(vehicle: VehicleRecord) -> Self {
        Self {
            id: vehicle.id,
            license_number: vehicle.license_number,
            vehicle_type: vehicle.vehicle_type,
            owner_name: vehicle.owner_name,
            owner_phone: vehicle.owner_phone,
            status: vehicle.status.as_str().to_string(),
            address: vehicle.address,
            entry_time: vehicle.entry_time,
            exit_time: vehicle.exit_time,
            parking_charge: vehicle.parking_charge,
        }
    }
}

impl VehicleRowResponse {
    pub fn from_record(vehicle: &VehicleRecord, offset: &FixedOffset) -> Self {
        Self {
            id: vehicle.id,
            owner_name: vehicle.owner_name.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            license_number: vehicle.license_number.clone(),
            entry_time: format_display_date(&vehicle.entry_time, offset),
            exit_time: vehicle
                .exit_time
                .as_ref()
                .map(|exit| format_display_date(exit, offset))
                .unwrap_or_else(|| NO_EXIT_TIME.to_string()),
            status: vehicle.status.as_str().to_string(),
            parking_charge: vehicle.parking_charge,
        }
    }
}
