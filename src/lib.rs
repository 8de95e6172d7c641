//! KeyTurn - API de back-office para agencias de alquiler de vehículos
//!
//! Autenticación JWT con revocación persistida, motor de reservas con
//! coherencia transaccional reserva-vehículo y facturación con
//! instantáneas.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
