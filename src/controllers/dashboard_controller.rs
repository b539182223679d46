use crate::models::dashboard::DashboardView;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub struct DashboardController {
    repository: VehicleRepository,
    capacity: i64,
}

impl DashboardController {
    pub fn new(repository: VehicleRepository, capacity: i64) -> Self {
        Self {
            repository,
            capacity,
        }
    }

    /// Cargar todos los vehículos y calcular los contadores
    pub async fn load(&self) -> Result<DashboardView, AppError> {
        let vehicles = self.repository.find_all().await?;
        let view = DashboardView::new(vehicles, self.capacity);

        log::info!(
            "📊 Dashboard cargado: {} vehículos, {} plazas libres",
            view.summary.total_parked,
            view.summary.empty_slots
        );
        Ok(view)
    }

    /// Eliminar un vehículo
    ///
    /// Si el almacén falla el listado queda como estaba.
    pub async fn delete(&self, view: &mut DashboardView, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await.map_err(|e| {
            log::error!("❌ Error eliminando vehículo {}: {}", id, e);
            e
        })?;

        view.remove(id);
        log::info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}
