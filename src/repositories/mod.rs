//! Repositorios de acceso a datos
//!
//! Capa de persistencia tipada por entidad. Las operaciones que deben
//! escribir dos entidades de forma atómica no viven aquí sino en los
//! servicios, dentro de una transacción sqlx.

pub mod analytics_repository;
pub mod customer_repository;
pub mod damage_report_repository;
pub mod invoice_repository;
pub mod rate_plan_repository;
pub mod reservation_repository;
pub mod settings_repository;
pub mod token_blacklist_repository;
pub mod user_repository;
pub mod vehicle_repository;
