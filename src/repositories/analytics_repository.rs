//! Repositorio de analítica (conteos y revenue agregado)

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::analytics_dto::AnalyticsSummary;
use crate::utils::errors::AppError;

pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary, AppError> {
        let (vehicles, reservations, invoices, active_reservations, available_vehicles): (
            i64,
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM vehicles),
                (SELECT COUNT(*) FROM reservations),
                (SELECT COUNT(*) FROM invoices),
                (SELECT COUNT(*) FROM reservations WHERE status = 'active'),
                (SELECT COUNT(*) FROM vehicles WHERE status = 'available')
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let total_revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total), 0) FROM invoices WHERE status = 'paid'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(AnalyticsSummary {
            vehicles,
            reservations,
            invoices,
            active_reservations,
            available_vehicles,
            total_revenue,
        })
    }
}
