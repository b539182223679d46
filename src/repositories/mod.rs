pub mod document_store;
pub mod pg_document_store;
pub mod vehicle_repository;
