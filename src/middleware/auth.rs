//! Middleware de autenticación
//!
//! Verifica la credencial bearer y consulta el conjunto de revocación.
//! El logout NO se monta detrás de este middleware: una credencial
//! expirada o ya revocada también debe poder cerrar sesión.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::repositories::token_blacklist_repository::TokenBlacklistRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Principal autenticado, inyectado como extensión del request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Extrae el token del header `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get("Authorization")?.to_str().ok()?;
    header.strip_prefix("Bearer ")
}

/// Middleware de autenticación con chequeo de revocación
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| {
            AppError::Unauthorized("Missing or invalid Authorization header".to_string())
        })?
        .to_string();

    // Firma y expiración primero; una credencial vencida es Invalid token,
    // aunque además figure en el conjunto de revocación
    let claims = state.jwt.authenticate(&token)?;

    let blacklist = TokenBlacklistRepository::new(state.pool.clone());
    if blacklist.is_revoked(&token).await? {
        return Err(AppError::Unauthorized("Token has been revoked".to_string()));
    }

    let role = UserRole::from_str(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

    request.extensions_mut().insert(AuthUser {
        id: claims.sub,
        email: claims.email,
        role,
    });

    Ok(next.run(request).await)
}

/// Gate de autorización por roles, aplicado dentro de cada handler
pub fn require_role(user: &AuthUser, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_require_role() {
        let admin = AuthUser {
            id: Uuid::new_v4(),
            email: "admin@keyturn.test".to_string(),
            role: UserRole::Admin,
        };
        let agent = AuthUser {
            id: Uuid::new_v4(),
            email: "agent@keyturn.test".to_string(),
            role: UserRole::Agent,
        };

        assert!(require_role(&admin, &[UserRole::Admin]).is_ok());
        assert!(require_role(&agent, &[UserRole::Admin]).is_err());
        assert!(require_role(&agent, &[UserRole::Admin, UserRole::Agent]).is_ok());
    }
}
