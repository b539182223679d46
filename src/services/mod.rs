//! Services module
//!
//! Este módulo contiene la lógica de negocio que no depende del almacén.

pub mod parking_charge;

pub use parking_charge::*;
