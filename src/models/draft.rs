//! Borrador del formulario de estacionamiento
//!
//! Estado mutable de un vehículo mientras se crea o edita. Las fechas se
//! guardan en la representación editable del formulario y solo se convierten
//! a instantes absolutos al enviar.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::document::{Document, FieldValue};
use crate::models::vehicle::{fields, NewVehicle, ParkingStatus, VehicleRecord, VehicleType};
use crate::services::parking_charge::calculate_parking_charge;
use crate::utils::datetime::{parse_local_input, to_local_input};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{
    validate_local_datetime, validate_not_empty, validate_optional_local_datetime,
};

/// Borrador de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    #[validate(custom = "validate_not_empty")]
    pub license_number: String,

    pub vehicle_type: VehicleType,

    #[validate(custom = "validate_not_empty")]
    pub owner_name: String,

    #[validate(custom = "validate_not_empty")]
    pub owner_phone: String,

    /// `true` = dentro
    pub status: bool,

    #[validate(custom = "validate_not_empty")]
    pub address: String,

    #[validate(custom = "validate_local_datetime")]
    pub entry_time: String,

    #[validate(custom = "validate_optional_local_datetime")]
    pub exit_time: String,

    /// Derivado de `entry_time`/`exit_time`, nunca se asigna directamente
    pub parking_charge: i64,

    /// Tipo guardado fuera del catálogo; se conserva mientras no se elija otro
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_vehicle_type: Option<String>,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            license_number: String::new(),
            vehicle_type: VehicleType::Car,
            owner_name: String::new(),
            owner_phone: String::new(),
            status: true,
            address: String::new(),
            entry_time: String::new(),
            exit_time: String::new(),
            parking_charge: 0,
            stored_vehicle_type: None,
        }
    }
}

/// Cambio de un campo editable del formulario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    LicenseNumber(String),
    VehicleType(VehicleType),
    OwnerName(String),
    OwnerPhone(String),
    Status(bool),
    Address(String),
    EntryTime(String),
    ExitTime(String),
}

impl FieldChange {
    /// Indica si el cambio afecta al cobro
    pub fn affects_charge(&self) -> bool {
        matches!(self, FieldChange::EntryTime(_) | FieldChange::ExitTime(_))
    }
}

impl VehicleDraft {
    /// Construir el borrador de edición a partir de un registro guardado
    pub fn from_record(record: &VehicleRecord, offset: &FixedOffset) -> Self {
        let mut draft = Self {
            license_number: record.license_number.clone(),
            vehicle_type: record.kind().unwrap_or_default(),
            owner_name: record.owner_name.clone(),
            owner_phone: record.owner_phone.clone(),
            status: record.status.is_in(),
            address: record.address.clone(),
            entry_time: to_local_input(&record.entry_time, offset),
            exit_time: record
                .exit_time
                .as_ref()
                .map(|exit| to_local_input(exit, offset))
                .unwrap_or_default(),
            parking_charge: record.parking_charge,
            stored_vehicle_type: match record.kind() {
                Some(_) => None,
                None => Some(record.vehicle_type.clone()),
            },
        };
        draft.refresh_charge(offset);
        draft
    }

    /// Aplicar un cambio y recalcular el cobro si corresponde
    pub fn apply(&mut self, change: FieldChange, offset: &FixedOffset) {
        let affects_charge = change.affects_charge();

        match change {
            FieldChange::LicenseNumber(value) => self.license_number = value,
            FieldChange::VehicleType(value) => {
                self.vehicle_type = value;
                self.stored_vehicle_type = None;
            }
            FieldChange::OwnerName(value) => self.owner_name = value,
            FieldChange::OwnerPhone(value) => self.owner_phone = value,
            FieldChange::Status(value) => self.status = value,
            FieldChange::Address(value) => self.address = value,
            FieldChange::EntryTime(value) => self.entry_time = value,
            FieldChange::ExitTime(value) => self.exit_time = value,
        }

        if affects_charge {
            self.refresh_charge(offset);
        }
    }

    /// Recalcular el cobro cuando ambas fechas están presentes
    ///
    /// Si falta alguna (o no se puede leer) se conserva el valor anterior.
    pub fn refresh_charge(&mut self, offset: &FixedOffset) {
        let entry = parse_local_input(&self.entry_time, offset);
        let exit = parse_local_input(&self.exit_time, offset);

        if let (Some(entry), Some(exit)) = (entry, exit) {
            self.parking_charge = calculate_parking_charge(&entry, &exit);
        }
    }

    /// Validar y convertir el borrador en los campos a guardar
    pub fn to_new_vehicle(&self, offset: &FixedOffset) -> AppResult<NewVehicle> {
        self.validate()?;

        let entry_time = parse_local_input(&self.entry_time, offset)
            .ok_or_else(|| validation_error("entryTime", "Invalid entry time"))?;

        let exit_time = if self.exit_time.trim().is_empty() {
            None
        } else {
            Some(
                parse_local_input(&self.exit_time, offset)
                    .ok_or_else(|| validation_error("exitTime", "Invalid exit time"))?,
            )
        };

        Ok(NewVehicle {
            license_number: self.license_number.clone(),
            vehicle_type: self.vehicle_type,
            owner_name: self.owner_name.clone(),
            owner_phone: self.owner_phone.clone(),
            status: ParkingStatus::from(self.status),
            address: self.address.clone(),
            entry_time,
            exit_time,
            parking_charge: self.parking_charge,
        })
    }

    /// Validar y convertir el borrador en el documento a fusionar al editar
    ///
    /// Un tipo guardado fuera del catálogo se reescribe tal cual.
    pub fn to_document(&self, offset: &FixedOffset) -> AppResult<Document> {
        let mut document = self.to_new_vehicle(offset)?.into_document();
        if let Some(stored) = &self.stored_vehicle_type {
            document.insert(fields::VEHICLE_TYPE.to_string(), FieldValue::from(stored.as_str()));
        }
        Ok(document)
    }
}
