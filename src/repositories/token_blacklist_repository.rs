//! Repositorio del conjunto de revocación de tokens
//!
//! La membresía compara la expiración en la lectura: una fila vencida que
//! aún no se purgó no vuelve a rechazar la credencial (ya está simplemente
//! expirada). La inserción colapsa duplicados a un no-op para que dos
//! logouts concurrentes del mismo token observen éxito ambos.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::utils::errors::AppError;

pub struct TokenBlacklistRepository {
    pool: PgPool,
}

impl TokenBlacklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// ¿Está este token revocado y todavía dentro de su vida natural?
    pub async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        let revoked: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM token_blacklist WHERE token = $1 AND expires_at > NOW())",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(revoked)
    }

    /// Registra (token, expires_at). Idempotente: el duplicado es un no-op.
    pub async fn insert(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO token_blacklist (token, expires_at)
            VALUES ($1, $2)
            ON CONFLICT (token) DO NOTHING
            "#,
        )
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Limpieza perezosa de filas vencidas; se dispara en cada logout
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM token_blacklist WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
