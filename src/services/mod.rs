//! Services module
//!
//! Este módulo contiene la lógica de negocio: emisión/revocación de
//! credenciales, el motor de reservas y la calculadora de facturación.

pub mod auth_service;
pub mod billing_service;
pub mod jwt_service;
pub mod reservation_service;
