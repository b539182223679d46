//! Almacén de documentos
//!
//! Contrato del almacén remoto (colecciones de documentos direccionados por
//! identificador) y una implementación en memoria para desarrollo y tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::document::{Document, StoredDocument};
use crate::utils::errors::StoreError;

/// Operaciones del almacén de documentos
///
/// Cada llamada es atómica solo en la medida en que lo garantice el backend;
/// no hay transacciones ni control de concurrencia entre llamadas.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Listar todos los documentos de una colección
    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;

    /// Obtener un documento, `None` si no existe
    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError>;

    /// Crear un documento y devolver el identificador asignado
    async fn create(&self, collection: &str, fields: Document) -> Result<Uuid, StoreError>;

    /// Fusionar campos en un documento existente
    async fn update(&self, collection: &str, id: Uuid, fields: Document) -> Result<(), StoreError>;

    /// Eliminar un documento existente
    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError>;
}

/// Almacén en memoria, conserva el orden de inserción
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<StoredDocument>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing(collection: &str, id: Uuid) -> StoreError {
    StoreError::MissingDocument {
        collection: collection.to_string(),
        id,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        let document = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| doc.id == id))
            .map(|doc| doc.fields.clone());
        Ok(document)
    }

    async fn create(&self, collection: &str, fields: Document) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, fields });
        tracing::debug!("📥 Documento {} creado en '{}'", id, collection);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: Uuid, fields: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| missing(collection, id))?;

        document.fields.extend(fields);
        tracing::debug!("✏️ Documento {} actualizado en '{}'", id, collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections
            .get_mut(collection)
            .ok_or_else(|| missing(collection, id))?;

        let position = documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or_else(|| missing(collection, id))?;

        documents.remove(position);
        tracing::debug!("🗑️ Documento {} eliminado de '{}'", id, collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::FieldValue;

    fn document(name: &str) -> Document {
        let mut fields = Document::new();
        fields.insert("ownerName".to_string(), FieldValue::from(name));
        fields.insert("parkingCharge".to_string(), FieldValue::Integer(0));
        fields
    }

    #[tokio::test]
    async fn test_create_get_and_list() {
        let store = MemoryDocumentStore::new();
        let first = store.create("vehicles", document("A")).await.unwrap();
        let second = store.create("vehicles", document("B")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.get("vehicles", first).await.unwrap(), Some(document("A")));

        let listed = store.list_all("vehicles").await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec![first, second]);

        assert!(store.list_all("other").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryDocumentStore::new();
        let id = store.create("vehicles", document("A")).await.unwrap();

        let mut change = Document::new();
        change.insert("parkingCharge".to_string(), FieldValue::Integer(30));
        store.update("vehicles", id, change).await.unwrap();

        let stored = store.get("vehicles", id).await.unwrap().unwrap();
        assert_eq!(stored["ownerName"], FieldValue::from("A"));
        assert_eq!(stored["parkingCharge"], FieldValue::Integer(30));
    }

    #[tokio::test]
    async fn test_missing_documents() {
        let store = MemoryDocumentStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.get("vehicles", id).await.unwrap(), None);
        assert!(matches!(
            store.update("vehicles", id, Document::new()).await,
            Err(StoreError::MissingDocument { .. })
        ));
        assert!(matches!(
            store.delete("vehicles", id).await,
            Err(StoreError::MissingDocument { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let store = MemoryDocumentStore::new();
        let keep = store.create("vehicles", document("A")).await.unwrap();
        let gone = store.create("vehicles", document("B")).await.unwrap();

        store.delete("vehicles", gone).await.unwrap();

        let listed = store.list_all("vehicles").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep);
    }
}
