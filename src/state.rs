//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::dashboard_controller::DashboardController;
use crate::controllers::parking_form_controller::ParkingFormController;
use crate::models::form_session::FormSession;
use crate::repositories::document_store::DocumentStore;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: EnvironmentConfig,
    pub form_sessions: Arc<RwLock<HashMap<Uuid, FormSession>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: EnvironmentConfig) -> Self {
        Self {
            store,
            config,
            form_sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn vehicle_repository(&self) -> VehicleRepository {
        VehicleRepository::new(self.store.clone(), self.config.vehicle_collection.clone())
    }

    pub fn dashboard_controller(&self) -> DashboardController {
        DashboardController::new(self.vehicle_repository(), self.config.parking_capacity)
    }

    pub fn parking_form_controller(&self) -> ParkingFormController {
        ParkingFormController::new(self.vehicle_repository(), self.config.local_offset)
    }

    /// Guardar una sesión de formulario
    ///
    /// De paso descarta las sesiones abiertas hace más de `form_session_ttl`.
    pub async fn store_form_session(&self, session: FormSession) {
        let now = Utc::now();
        let ttl = self.config.form_session_ttl;
        let mut sessions = self.form_sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, existing| !existing.is_expired(now, ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("🧹 {} sesiones de formulario expiradas descartadas", evicted);
        }

        let id = session.id;
        sessions.insert(id, session);
        log::info!("💾 Sesión de formulario {} guardada ({} activas)", id, sessions.len());
    }

    /// Obtener una copia de una sesión de formulario vigente
    pub async fn get_form_session(&self, id: Uuid) -> Option<FormSession> {
        let sessions = self.form_sessions.read().await;
        sessions
            .get(&id)
            .filter(|session| !session.is_expired(Utc::now(), self.config.form_session_ttl))
            .cloned()
    }

    /// Cerrar una sesión de formulario
    pub async fn remove_form_session(&self, id: Uuid) -> Option<FormSession> {
        let mut sessions = self.form_sessions.write().await;
        sessions.remove(&id)
    }
}
