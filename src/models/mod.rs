//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del estacionamiento: el registro
//! de vehículo guardado, el borrador del formulario y el dashboard.

pub mod dashboard;
pub mod document;
pub mod draft;
pub mod form_session;
pub mod vehicle;
