//! Repositorio de reservas (solo lecturas)
//!
//! Las escrituras de reservas acoplan dos entidades (Reservation + Vehicle)
//! y viven en el motor de reservas, dentro de una transacción.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::reservation_dto::ReservationQuery;
use crate::models::reservation::Reservation;
use crate::utils::errors::AppError;

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reservation)
    }

    pub async fn list(&self, query: ReservationQuery) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE ($1::reservation_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR vehicle_id = $2)
              AND ($3::uuid IS NULL OR customer_id = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.status)
        .bind(query.vehicle_id)
        .bind(query.customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }
}
