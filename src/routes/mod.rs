//! Rutas de la API
//!
//! Cada submódulo arma el router de un recurso. Todos menos auth se
//! montan detrás del middleware de autenticación en main.

pub mod agent_routes;
pub mod analytics_routes;
pub mod auth_routes;
pub mod customer_routes;
pub mod damage_report_routes;
pub mod invoice_routes;
pub mod rate_plan_routes;
pub mod reservation_routes;
pub mod settings_routes;
pub mod vehicle_routes;
