//! Repositorio de planes de tarifas

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::rate_plan_dto::{CreateRatePlanRequest, RatePlanQuery, UpdateRatePlanRequest};
use crate::models::rate_plan::RatePlan;
use crate::utils::errors::AppError;

pub struct RatePlanRepository {
    pool: PgPool,
}

impl RatePlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateRatePlanRequest) -> Result<RatePlan, AppError> {
        let plan = sqlx::query_as::<_, RatePlan>(
            r#"
            INSERT INTO rate_plans (name, category, base_daily_rate, weekend_multiplier, weekly_discount_percent, active, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.name)
        .bind(request.category)
        .bind(request.base_daily_rate)
        .bind(request.weekend_multiplier.unwrap_or(Decimal::ONE))
        .bind(request.weekly_discount_percent.unwrap_or(Decimal::ZERO))
        .bind(request.active.unwrap_or(true))
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn list(&self, query: RatePlanQuery) -> Result<Vec<RatePlan>, AppError> {
        let plans = sqlx::query_as::<_, RatePlan>(
            r#"
            SELECT * FROM rate_plans
            WHERE ($1::boolean IS NULL OR active = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.active)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRatePlanRequest,
    ) -> Result<RatePlan, AppError> {
        let current = sqlx::query_as::<_, RatePlan>("SELECT * FROM rate_plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Rate plan not found".to_string()))?;

        let plan = sqlx::query_as::<_, RatePlan>(
            r#"
            UPDATE rate_plans
            SET name = $2, category = $3, base_daily_rate = $4, weekend_multiplier = $5,
                weekly_discount_percent = $6, active = $7, notes = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.category.or(current.category))
        .bind(request.base_daily_rate.unwrap_or(current.base_daily_rate))
        .bind(request.weekend_multiplier.unwrap_or(current.weekend_multiplier))
        .bind(
            request
                .weekly_discount_percent
                .unwrap_or(current.weekly_discount_percent),
        )
        .bind(request.active.unwrap_or(current.active))
        .bind(request.notes.or(current.notes))
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rate_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rate plan not found".to_string()));
        }

        Ok(())
    }
}
