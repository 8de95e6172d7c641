//! Repositorio de settings (singleton con bootstrap perezoso)

use sqlx::PgPool;

use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::models::settings::Settings;
use crate::utils::errors::AppError;

pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Devuelve la fila singleton, creándola con defaults si no existe todavía
    pub async fn get_or_create(&self) -> Result<Settings, AppError> {
        if let Some(settings) =
            sqlx::query_as::<_, Settings>("SELECT * FROM settings ORDER BY created_at LIMIT 1")
                .fetch_optional(&self.pool)
                .await?
        {
            return Ok(settings);
        }

        let settings = sqlx::query_as::<_, Settings>(
            "INSERT INTO settings DEFAULT VALUES RETURNING *",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn update(&self, request: UpdateSettingsRequest) -> Result<Settings, AppError> {
        let current = self.get_or_create().await?;

        let settings = sqlx::query_as::<_, Settings>(
            r#"
            UPDATE settings
            SET company_name = $2, currency = $3, tax_rate_percent = $4,
                invoice_prefix = $5, support_email = $6, support_phone = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.company_name.unwrap_or(current.company_name))
        .bind(request.currency.unwrap_or(current.currency))
        .bind(request.tax_rate_percent.unwrap_or(current.tax_rate_percent))
        .bind(request.invoice_prefix.unwrap_or(current.invoice_prefix))
        .bind(request.support_email.or(current.support_email))
        .bind(request.support_phone.or(current.support_phone))
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
