//! Sesión del formulario de estacionamiento
//!
//! Una sesión vive mientras el usuario tiene el formulario abierto: guarda el
//! modo (alta o edición) y el borrador. Se pasa explícitamente al
//! controlador, no hay estado global del formulario.

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

use crate::models::draft::VehicleDraft;

/// Modo del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit(_) => "edit",
        }
    }

    pub fn vehicle_id(&self) -> Option<Uuid> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    pub id: Uuid,
    pub mode: FormMode,
    pub draft: VehicleDraft,
    pub opened_at: DateTime<Utc>,
}

impl FormSession {
    pub fn create() -> Self {
        Self::with_draft(FormMode::Create, VehicleDraft::default())
    }

    pub fn edit(vehicle_id: Uuid, draft: VehicleDraft) -> Self {
        Self::with_draft(FormMode::Edit(vehicle_id), draft)
    }

    fn with_draft(mode: FormMode, draft: VehicleDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            draft,
            opened_at: Utc::now(),
        }
    }

    /// Indica si la sesión lleva abierta más de `ttl`
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match (now - self.opened_at).to_std() {
            Ok(age) => age > ttl,
            Err(_) => false,
        }
    }

    /// Volver el borrador a sus valores por defecto
    pub fn reset(&mut self) {
        self.draft = VehicleDraft::default();
    }
}
