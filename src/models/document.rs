//! Modelo de documento genérico
//!
//! Un documento es un mapa de nombre de campo a valor, tal como lo guarda
//! el almacén de documentos remoto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Valor de un campo de documento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Timestamp(DateTime<Utc>),
    Null,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Campos de un documento
pub type Document = BTreeMap<String, FieldValue>;

/// Documento almacenado junto con su identificador
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub fields: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_option_maps_to_null() {
        let absent: Option<DateTime<Utc>> = None;
        assert!(FieldValue::from(absent).is_null());

        let present = Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        assert_eq!(FieldValue::from(present).as_timestamp(), present);
    }

    #[test]
    fn test_field_value_json_shape() {
        let value = FieldValue::Integer(30);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "integer", "value": 30 }));

        let null = serde_json::to_value(FieldValue::Null).unwrap();
        assert_eq!(null, serde_json::json!({ "type": "null" }));
    }
}
