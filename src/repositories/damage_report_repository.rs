//! Repositorio de reportes de daños

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::damage_report_dto::{
    CreateDamageReportRequest, DamageReportQuery, UpdateDamageReportRequest,
};
use crate::models::damage_report::{DamageReport, DamageSeverity, DamageStatus};
use crate::utils::errors::AppError;

pub struct DamageReportRepository {
    pool: PgPool,
}

impl DamageReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `reported_by` es el principal autenticado que levanta el reporte
    pub async fn create(
        &self,
        request: CreateDamageReportRequest,
        reported_by: Uuid,
    ) -> Result<DamageReport, AppError> {
        let report = sqlx::query_as::<_, DamageReport>(
            r#"
            INSERT INTO damage_reports (vehicle_id, reservation_id, reported_by_user_id, title, description, severity, status, cost_estimate, photos, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.vehicle_id)
        .bind(request.reservation_id)
        .bind(reported_by)
        .bind(request.title)
        .bind(request.description)
        .bind(request.severity.unwrap_or(DamageSeverity::Low))
        .bind(request.status.unwrap_or(DamageStatus::Open))
        .bind(request.cost_estimate.unwrap_or(Decimal::ZERO))
        .bind(request.photos.unwrap_or_default())
        .bind(request.occurred_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
                AppError::NotFound("Vehicle not found".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DamageReport>, AppError> {
        let report = sqlx::query_as::<_, DamageReport>("SELECT * FROM damage_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn list(&self, query: DamageReportQuery) -> Result<Vec<DamageReport>, AppError> {
        let reports = sqlx::query_as::<_, DamageReport>(
            r#"
            SELECT * FROM damage_reports
            WHERE ($1::damage_status IS NULL OR status = $1)
              AND ($2::damage_severity IS NULL OR severity = $2)
              AND ($3::uuid IS NULL OR vehicle_id = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.status)
        .bind(query.severity)
        .bind(query.vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDamageReportRequest,
    ) -> Result<DamageReport, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Damage report not found".to_string()))?;

        let report = sqlx::query_as::<_, DamageReport>(
            r#"
            UPDATE damage_reports
            SET title = $2, description = $3, severity = $4, status = $5,
                cost_estimate = $6, photos = $7, occurred_at = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.title.unwrap_or(current.title))
        .bind(request.description.or(current.description))
        .bind(request.severity.unwrap_or(current.severity))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.cost_estimate.unwrap_or(current.cost_estimate))
        .bind(request.photos.unwrap_or(current.photos))
        .bind(request.occurred_at.or(current.occurred_at))
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM damage_reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Damage report not found".to_string()));
        }

        Ok(())
    }
}
