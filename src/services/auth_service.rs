//! Servicio de autenticación
//!
//! Registro, login, perfil y logout. El logout es la única operación del
//! sistema que nunca devuelve error al caller: la revocación es idempotente
//! y best-effort desde su punto de vista.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::models::user::UserRole;
use crate::repositories::token_blacklist_repository::TokenBlacklistRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;

pub struct AuthService {
    users: UserRepository,
    blacklist: TokenBlacklistRepository,
    jwt: Arc<JwtService>,
    default_role: UserRole,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: Arc<JwtService>, default_role: UserRole) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            blacklist: TokenBlacklistRepository::new(pool),
            jwt,
            default_role,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self
            .users
            .create(request.name, request.email, password_hash, self.default_role)
            .await?;

        let token = self.jwt.issue(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.jwt.issue(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Revoca la credencial. Nunca falla hacia el caller.
    ///
    /// Acepta tokens expirados, manipulados o ya revocados: la expiración se
    /// recupera decodificando sin verificar (con fallback a la vida útil
    /// estándar) y el insert duplicado colapsa a un no-op.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else {
            // Sin token: ya está "deslogueado"
            return;
        };

        let expires_at = self.jwt.expires_at_or_default(token);

        if let Err(e) = self.blacklist.insert(token, expires_at).await {
            tracing::warn!("Logout revocation write failed: {}", e);
        }

        // Barrido oportunista de filas ya vencidas; la corrección no
        // depende de él (la membresía compara expiración en la lectura)
        match self.blacklist.purge_expired().await {
            Ok(purged) if purged > 0 => {
                tracing::debug!("Purged {} expired revocation rows", purged);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Blacklist purge failed: {}", e),
        }
    }
}
