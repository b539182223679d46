use crate::models::draft::{FieldChange, VehicleDraft};
use crate::models::form_session::{FormMode, FormSession};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use chrono::FixedOffset;
use uuid::Uuid;

/// Resultado de un envío exitoso
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub vehicle_id: Uuid,
    pub mode: FormMode,
}

pub struct ParkingFormController {
    repository: VehicleRepository,
    offset: FixedOffset,
}

impl ParkingFormController {
    pub fn new(repository: VehicleRepository, offset: FixedOffset) -> Self {
        Self { repository, offset }
    }

    /// Abrir el formulario de alta con el borrador por defecto
    pub fn open_create(&self) -> FormSession {
        FormSession::create()
    }

    /// Abrir el formulario de edición cargando el vehículo
    pub async fn open_edit(&self, vehicle_id: Uuid) -> Result<FormSession, AppError> {
        let vehicle = self
            .repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let draft = VehicleDraft::from_record(&vehicle, &self.offset);
        log::info!("📝 Formulario de edición abierto para vehículo {}", vehicle_id);
        Ok(FormSession::edit(vehicle_id, draft))
    }

    /// Aplicar un cambio de campo al borrador
    pub fn apply_change(&self, session: &mut FormSession, change: FieldChange) {
        session.draft.apply(change, &self.offset);
    }

    /// Enviar el borrador
    ///
    /// Valida, convierte y hace exactamente una escritura (alta o
    /// actualización según el modo). Si tiene éxito el borrador vuelve a sus
    /// valores por defecto; si falla queda intacto para reintentar.
    pub async fn submit(&self, session: &mut FormSession) -> Result<SubmitOutcome, AppError> {
        let vehicle_id = match session.mode {
            FormMode::Create => {
                let vehicle = session.draft.to_new_vehicle(&self.offset)?;
                let id = self.repository.create(vehicle).await.map_err(|e| {
                    log::error!("❌ Error agregando vehículo: {}", e);
                    e
                })?;
                log::info!("✅ Vehículo {} agregado", id);
                id
            }
            FormMode::Edit(id) => {
                let fields = session.draft.to_document(&self.offset)?;
                self.repository.update(id, fields).await.map_err(|e| {
                    log::error!("❌ Error actualizando vehículo {}: {}", id, e);
                    e
                })?;
                log::info!("✅ Vehículo {} actualizado", id);
                id
            }
        };

        session.reset();

        Ok(SubmitOutcome {
            vehicle_id,
            mode: session.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{Document, StoredDocument};
    use crate::models::vehicle::{ParkingStatus, VehicleType};
    use crate::repositories::document_store::{DocumentStore, MemoryDocumentStore};
    use crate::repositories::vehicle_repository::VEHICLES_COLLECTION;
    use crate::utils::errors::StoreError;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn controller_with(store: Arc<dyn DocumentStore>) -> (ParkingFormController, VehicleRepository) {
        let repository = VehicleRepository::new(store, VEHICLES_COLLECTION);
        (ParkingFormController::new(repository.clone(), utc()), repository)
    }

    fn fill(controller: &ParkingFormController, session: &mut FormSession) {
        for change in [
            FieldChange::LicenseNumber("123".to_string()),
            FieldChange::VehicleType(VehicleType::Car),
            FieldChange::OwnerName("A".to_string()),
            FieldChange::OwnerPhone("555".to_string()),
            FieldChange::Address("X".to_string()),
            FieldChange::EntryTime("2024-01-01T10:00".to_string()),
        ] {
            controller.apply_change(session, change);
        }
    }

    /// Almacén que falla todas las escrituras y cuenta los intentos
    #[derive(Default)]
    struct FailingStore {
        writes: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn list_all(&self, _collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
            Ok(Vec::new())
        }

        async fn get(&self, _collection: &str, _id: Uuid) -> Result<Option<Document>, StoreError> {
            Ok(None)
        }

        async fn create(&self, collection: &str, _fields: Document) -> Result<Uuid, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::MissingDocument {
                collection: collection.to_string(),
                id: Uuid::nil(),
            })
        }

        async fn update(&self, collection: &str, id: Uuid, _fields: Document) -> Result<(), StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::MissingDocument {
                collection: collection.to_string(),
                id,
            })
        }

        async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError> {
            Err(StoreError::MissingDocument {
                collection: collection.to_string(),
                id,
            })
        }
    }

    #[tokio::test]
    async fn test_create_submit_computes_charge_and_resets() {
        let (controller, repository) = controller_with(Arc::new(MemoryDocumentStore::new()));
        let mut session = controller.open_create();
        fill(&controller, &mut session);
        controller.apply_change(&mut session, FieldChange::ExitTime("2024-01-01T12:30".to_string()));
        assert_eq!(session.draft.parking_charge, 30);

        let outcome = controller.submit(&mut session).await.unwrap();
        assert_eq!(outcome.mode, FormMode::Create);
        assert_eq!(session.draft, VehicleDraft::default());

        let stored = repository.find_by_id(outcome.vehicle_id).await.unwrap().unwrap();
        assert_eq!(stored.license_number, "123");
        assert_eq!(stored.owner_name, "A");
        assert_eq!(stored.owner_phone, "555");
        assert_eq!(stored.address, "X");
        assert_eq!(stored.kind(), Some(VehicleType::Car));
        assert_eq!(stored.status, ParkingStatus::In);
        assert_eq!(stored.entry_time, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        assert_eq!(stored.exit_time, Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap()));
        assert_eq!(stored.parking_charge, 30);
    }

    #[tokio::test]
    async fn test_entry_only_keeps_zero_charge_and_status_in() {
        let (controller, repository) = controller_with(Arc::new(MemoryDocumentStore::new()));
        let mut session = controller.open_create();
        fill(&controller, &mut session);

        let outcome = controller.submit(&mut session).await.unwrap();
        let stored = repository.find_by_id(outcome.vehicle_id).await.unwrap().unwrap();

        assert_eq!(stored.parking_charge, 0);
        assert_eq!(stored.status, ParkingStatus::In);
        assert!(stored.exit_time.is_none());
    }

    #[tokio::test]
    async fn test_edit_recomputes_charge_and_keeps_other_fields() {
        let (controller, repository) = controller_with(Arc::new(MemoryDocumentStore::new()));
        let mut session = controller.open_create();
        fill(&controller, &mut session);
        controller.apply_change(&mut session, FieldChange::ExitTime("2024-01-01T11:00".to_string()));
        let created = controller.submit(&mut session).await.unwrap();

        let mut edit = controller.open_edit(created.vehicle_id).await.unwrap();
        assert_eq!(edit.mode, FormMode::Edit(created.vehicle_id));
        assert_eq!(edit.draft.exit_time, "2024-01-01T11:00");
        assert_eq!(edit.draft.parking_charge, 10);

        controller.apply_change(&mut edit, FieldChange::ExitTime("2024-01-01T15:10".to_string()));
        let outcome = controller.submit(&mut edit).await.unwrap();
        assert_eq!(outcome.vehicle_id, created.vehicle_id);

        let stored = repository.find_by_id(created.vehicle_id).await.unwrap().unwrap();
        assert_eq!(stored.license_number, "123");
        assert_eq!(stored.parking_charge, 60);
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exit_only_edit_keeps_unknown_vehicle_type() {
        let store = Arc::new(MemoryDocumentStore::new());
        let (controller, repository) = controller_with(store.clone());
        let mut session = controller.open_create();
        fill(&controller, &mut session);
        let mut fields = session.draft.to_new_vehicle(&utc()).unwrap().into_document();
        fields.insert(
            crate::models::vehicle::fields::VEHICLE_TYPE.to_string(),
            "Bicycle".into(),
        );
        let id = store.create(VEHICLES_COLLECTION, fields).await.unwrap();

        let mut edit = controller.open_edit(id).await.unwrap();
        controller.apply_change(&mut edit, FieldChange::ExitTime("2024-01-01T12:30".to_string()));
        controller.submit(&mut edit).await.unwrap();

        let stored = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.vehicle_type, "Bicycle");
        assert_eq!(stored.parking_charge, 30);
    }

    #[tokio::test]
    async fn test_open_edit_missing_vehicle_is_not_found() {
        let (controller, _) = controller_with(Arc::new(MemoryDocumentStore::new()));
        let result = controller.open_edit(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_storage_call() {
        let store = Arc::new(FailingStore::default());
        let (controller, _) = controller_with(store.clone());
        let mut session = controller.open_create();
        controller.apply_change(&mut session, FieldChange::LicenseNumber("123".to_string()));

        let result = controller.submit(&mut session).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
        assert_eq!(session.draft.license_number, "123");
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_draft() {
        let store = Arc::new(FailingStore::default());
        let (controller, _) = controller_with(store.clone());
        let mut session = controller.open_create();
        fill(&controller, &mut session);
        let before = session.draft.clone();

        let result = controller.submit(&mut session).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert_eq!(session.draft, before);
    }
}
