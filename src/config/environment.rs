//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! La ausencia del secreto de firma JWT es un error fatal de configuración,
//! nunca se reemplaza por un valor por defecto.

use std::env;

use crate::models::user::UserRole;
use crate::utils::errors::AppError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Vida útil del token en días
    pub jwt_lifetime_days: i64,
    /// Rol asignado a los usuarios que se registran por sí mismos.
    /// Decisión de política explícita, configurable vía DEFAULT_USER_ROLE.
    pub default_role: UserRole,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::Configuration("JWT_SECRET must be set".to_string()))?;
        if jwt_secret.trim().is_empty() {
            return Err(AppError::Configuration(
                "JWT_SECRET must not be empty".to_string(),
            ));
        }

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("PORT must be a valid number".to_string()))?;

        let jwt_lifetime_days = env::var("JWT_LIFETIME_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("JWT_LIFETIME_DAYS must be a valid number".to_string())
            })?;

        let default_role = match env::var("DEFAULT_USER_ROLE") {
            Ok(value) => UserRole::from_str(&value).ok_or_else(|| {
                AppError::Configuration(format!("Unknown DEFAULT_USER_ROLE '{}'", value))
            })?,
            Err(_) => UserRole::Agent,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret,
            jwt_lifetime_days,
            default_role,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
