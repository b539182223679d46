//! Almacén de documentos sobre PostgreSQL
//!
//! Cada documento se guarda como JSONB en la tabla `documents`, indexado por
//! colección e identificador.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::document::{Document, StoredDocument};
use crate::repositories::document_store::DocumentStore;
use crate::utils::errors::StoreError;

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, Json<Document>)>(
            "SELECT id, fields FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(fields))| StoredDocument { id, fields })
            .collect())
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, (Json<Document>,)>(
            "SELECT fields FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(fields),)| fields))
    }

    async fn create(&self, collection: &str, fields: Document) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, fields, created_at)
            VALUES ($1, $2, $3, NOW())
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;

        tracing::debug!("📥 Documento {} creado en '{}'", id, collection);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: Uuid, fields: Document) -> Result<(), StoreError> {
        // `||` fusiona las claves de primer nivel del JSONB
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET fields = fields || $3
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingDocument {
                collection: collection.to_string(),
                id,
            });
        }

        tracing::debug!("✏️ Documento {} actualizado en '{}'", id, collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingDocument {
                collection: collection.to_string(),
                id,
            });
        }

        tracing::debug!("🗑️ Documento {} eliminado de '{}'", id, collection);
        Ok(())
    }
}
