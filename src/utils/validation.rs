//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar los campos del
//! formulario de estacionamiento antes de enviarlos al almacén.

use validator::ValidationError;

use crate::utils::datetime::parse_local_naive;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar un valor `datetime-local` obligatorio
pub fn validate_local_datetime(value: &str) -> Result<(), ValidationError> {
    validate_not_empty(value)?;
    if parse_local_naive(value).is_none() {
        let mut error = ValidationError::new("datetime_local");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DDTHH:MM".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar un valor `datetime-local` opcional (vacío = ausente)
pub fn validate_optional_local_datetime(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_local_datetime(value)
}
