//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el front-office.

use tower_http::cors::CorsLayer;

/// CORS abierto con credenciales (espejo del origin del request)
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
