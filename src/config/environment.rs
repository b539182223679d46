//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::time::Duration;

use crate::models::dashboard::DEFAULT_CAPACITY;
use crate::repositories::vehicle_repository::VEHICLES_COLLECTION;
use crate::utils::datetime::parse_utc_offset;

/// Una hora
pub const DEFAULT_FORM_SESSION_TTL_SECS: u64 = 3600;

/// Backend del almacén de documentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(anyhow!("STORAGE_BACKEND desconocido: '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub storage_backend: StorageBackend,
    pub vehicle_collection: String,
    pub parking_capacity: i64,
    /// Zona de la representación editable del formulario y del listado
    pub local_offset: FixedOffset,
    /// Tiempo máximo que se guarda un formulario abierto sin enviar
    pub form_session_ttl: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            storage_backend: StorageBackend::Memory,
            vehicle_collection: VEHICLES_COLLECTION.to_string(),
            parking_capacity: DEFAULT_CAPACITY,
            local_offset: Utc.fix(),
            form_session_ttl: Duration::from_secs(DEFAULT_FORM_SESSION_TTL_SECS),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno
    ///
    /// Las variables ausentes toman el valor por defecto; si hay
    /// `DATABASE_URL` y no se indica backend se usa PostgreSQL.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a valid number")?,
            Err(_) => defaults.port,
        };

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value)?,
            Err(_) if env::var("DATABASE_URL").is_ok() => StorageBackend::Postgres,
            Err(_) => defaults.storage_backend,
        };

        let parking_capacity = match env::var("PARKING_CAPACITY") {
            Ok(value) => value
                .parse()
                .context("PARKING_CAPACITY must be a valid number")?,
            Err(_) => defaults.parking_capacity,
        };

        let local_offset = match env::var("LOCAL_UTC_OFFSET") {
            Ok(value) => parse_utc_offset(&value)
                .ok_or_else(|| anyhow!("LOCAL_UTC_OFFSET inválido: '{}'", value))?,
            Err(_) => defaults.local_offset,
        };

        let form_session_ttl = match env::var("FORM_SESSION_TTL_SECS") {
            Ok(value) => Duration::from_secs(
                value
                    .parse()
                    .context("FORM_SESSION_TTL_SECS must be a valid number")?,
            ),
            Err(_) => defaults.form_session_ttl,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            storage_backend,
            vehicle_collection: env::var("VEHICLE_COLLECTION").unwrap_or(defaults.vehicle_collection),
            parking_capacity,
            local_offset,
            form_session_ttl,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.parking_capacity, 50);
        assert_eq!(config.vehicle_collection, "vehicles");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.form_session_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(StorageBackend::parse("memory").unwrap(), StorageBackend::Memory);
        assert_eq!(StorageBackend::parse(" Postgres ").unwrap(), StorageBackend::Postgres);
        assert!(StorageBackend::parse("firestore").is_err());
    }
}
