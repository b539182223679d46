//! Parking Management
//!
//! Backend del estacionamiento: dashboard de vehículos estacionados con sus
//! contadores y formulario de alta/edición con cálculo del cobro, sobre un
//! almacén de documentos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
