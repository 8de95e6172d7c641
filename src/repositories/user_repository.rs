//! Repositorio de usuarios
//!
//! El email se almacena siempre en minúsculas: la unicidad es
//! case-insensitive por construcción.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{User, UserRole};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, LOWER($2), $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Email already in use".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn list_agents(&self) -> Result<Vec<User>, AppError> {
        let agents = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = 'agent' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(agents)
    }

    /// Actualiza nombre/email de un agente. El rol y el hash quedan fuera
    /// del alcance de esta operación.
    pub async fn update_agent(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, AppError> {
        let agent = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE(LOWER($3), email),
                updated_at = NOW()
            WHERE id = $1 AND role = 'agent'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Email already in use".to_string())
            } else {
                AppError::Database(e)
            }
        })?
        .ok_or_else(|| AppError::NotFound("Agent not found".to_string()))?;

        Ok(agent)
    }

    pub async fn delete_agent(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = 'agent'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Agent not found".to_string()));
        }

        Ok(())
    }
}
