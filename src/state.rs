//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::services::jwt_service::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, jwt: Arc<JwtService>) -> Self {
        Self { pool, config, jwt }
    }
}
