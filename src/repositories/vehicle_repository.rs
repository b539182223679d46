use crate::models::document::Document;
use crate::models::vehicle::{NewVehicle, VehicleRecord};
use crate::repositories::document_store::DocumentStore;
use crate::utils::errors::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Colección por defecto de los vehículos
pub const VEHICLES_COLLECTION: &str = "vehicles";

#[derive(Clone)]
pub struct VehicleRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl VehicleRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> Result<Uuid, AppError> {
        let id = self
            .store
            .create(&self.collection, vehicle.into_document())
            .await?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleRecord>, AppError> {
        let Some(document) = self.store.get(&self.collection, id).await? else {
            return Ok(None);
        };

        let vehicle = VehicleRecord::from_document(id, &document)?;
        Ok(Some(vehicle))
    }

    /// Listar todos los vehículos
    ///
    /// Los documentos que no se pueden leer como vehículo se omiten.
    pub async fn find_all(&self) -> Result<Vec<VehicleRecord>, AppError> {
        let documents = self.store.list_all(&self.collection).await?;

        let vehicles = documents
            .iter()
            .filter_map(|doc| match VehicleRecord::from_document(doc.id, &doc.fields) {
                Ok(vehicle) => Some(vehicle),
                Err(e) => {
                    log::warn!("⚠️ Documento omitido del listado: {}", e);
                    None
                }
            })
            .collect();

        Ok(vehicles)
    }

    /// Fusionar los campos dados en un vehículo existente
    pub async fn update(&self, id: Uuid, fields: Document) -> Result<(), AppError> {
        self.store.update(&self.collection, id, fields).await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(&self.collection, id).await?;
        Ok(())
    }
}
