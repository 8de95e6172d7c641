//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod customer;
pub mod damage_report;
pub mod invoice;
pub mod rate_plan;
pub mod reservation;
pub mod settings;
pub mod token_blacklist;
pub mod user;
pub mod vehicle;
