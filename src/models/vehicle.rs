//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo estacionado y su conversión
//! desde/hacia el documento guardado en la colección `vehicles`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::document::{Document, FieldValue};
use crate::utils::errors::StoreError;

/// Nombres de campo tal como se guardan en el documento
pub mod fields {
    pub const LICENSE_NUMBER: &str = "licenseNumber";
    pub const VEHICLE_TYPE: &str = "vehicleType";
    pub const OWNER_NAME: &str = "ownerName";
    pub const OWNER_PHONE: &str = "ownerPhone";
    pub const STATUS: &str = "status";
    pub const ADDRESS: &str = "address";
    pub const ENTRY_TIME: &str = "entryTime";
    pub const EXIT_TIME: &str = "exitTime";
    pub const PARKING_CHARGE: &str = "parkingCharge";
}

/// Tipo de vehículo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[default]
    Car,
    Truck,
    Microbus,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
            VehicleType::Microbus => "Microbus",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Car" => Ok(VehicleType::Car),
            "Truck" => Ok(VehicleType::Truck),
            "Microbus" => Ok(VehicleType::Microbus),
            other => Err(format!("Unknown vehicle type '{}'", other)),
        }
    }
}

/// Estado de estacionamiento - se guarda como "in"/"out"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingStatus {
    #[default]
    In,
    Out,
}

impl ParkingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParkingStatus::In => "in",
            ParkingStatus::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ParkingStatus::In)
    }
}

/// El checkbox del formulario: marcado = dentro
impl From<bool> for ParkingStatus {
    fn from(checked: bool) -> Self {
        if checked {
            ParkingStatus::In
        } else {
            ParkingStatus::Out
        }
    }
}

impl FromStr for ParkingStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in" => Ok(ParkingStatus::In),
            "out" => Ok(ParkingStatus::Out),
            other => Err(format!("Unknown parking status '{}'", other)),
        }
    }
}

/// Campos que se escriben al crear o actualizar un vehículo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub license_number: String,
    pub vehicle_type: VehicleType,
    pub owner_name: String,
    pub owner_phone: String,
    pub status: ParkingStatus,
    pub address: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub parking_charge: i64,
}

impl NewVehicle {
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert(fields::LICENSE_NUMBER.to_string(), self.license_number.into());
        document.insert(fields::VEHICLE_TYPE.to_string(), self.vehicle_type.as_str().into());
        document.insert(fields::OWNER_NAME.to_string(), self.owner_name.into());
        document.insert(fields::OWNER_PHONE.to_string(), self.owner_phone.into());
        document.insert(fields::STATUS.to_string(), self.status.as_str().into());
        document.insert(fields::ADDRESS.to_string(), self.address.into());
        document.insert(fields::ENTRY_TIME.to_string(), self.entry_time.into());
        document.insert(fields::EXIT_TIME.to_string(), self.exit_time.into());
        document.insert(fields::PARKING_CHARGE.to_string(), self.parking_charge.into());
        document
    }
}

/// Vehicle persistido en la colección
///
/// `vehicle_type` se conserva tal como está guardado: documentos escritos por
/// otros clientes pueden traer tipos fuera del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: Uuid,
    pub license_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub status: ParkingStatus,
    pub address: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub parking_charge: i64,
}

impl VehicleRecord {
    /// Tipo conocido del vehículo, `None` si el documento trae otro valor
    pub fn kind(&self) -> Option<VehicleType> {
        self.vehicle_type.parse().ok()
    }

    pub fn from_document(id: Uuid, document: &Document) -> Result<Self, StoreError> {
        let text = |name: &str| -> String {
            document
                .get(name)
                .and_then(FieldValue::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let malformed = |field: &'static str, reason: &str| StoreError::Malformed {
            id,
            field,
            reason: reason.to_string(),
        };

        let status = match document.get(fields::STATUS) {
            Some(FieldValue::String(value)) => value
                .parse()
                .map_err(|e: String| malformed(fields::STATUS, &e))?,
            Some(FieldValue::Boolean(checked)) => ParkingStatus::from(*checked),
            None | Some(FieldValue::Null) => ParkingStatus::In,
            Some(_) => return Err(malformed(fields::STATUS, "expected string")),
        };

        let entry_time = document
            .get(fields::ENTRY_TIME)
            .and_then(FieldValue::as_timestamp)
            .ok_or_else(|| malformed(fields::ENTRY_TIME, "missing timestamp"))?;

        let exit_time = match document.get(fields::EXIT_TIME) {
            None | Some(FieldValue::Null) => None,
            Some(FieldValue::Timestamp(value)) => Some(*value),
            Some(_) => return Err(malformed(fields::EXIT_TIME, "expected timestamp")),
        };

        let parking_charge = document
            .get(fields::PARKING_CHARGE)
            .and_then(FieldValue::as_integer)
            .unwrap_or(0);

        Ok(Self {
            id,
            license_number: text(fields::LICENSE_NUMBER),
            vehicle_type: text(fields::VEHICLE_TYPE),
            owner_name: text(fields::OWNER_NAME),
            owner_phone: text(fields::OWNER_PHONE),
            status,
            address: text(fields::ADDRESS),
            entry_time,
            exit_time,
            parking_charge,
        })
    }
}
