//! Repositorio de vehículos
//!
//! Acceso a datos de la tabla vehicles. El cambio available↔rented NO pasa
//! por aquí: lo hace el motor de reservas dentro de su transacción. El
//! update directo de status queda para los toggles administrativos de
//! mantenimiento.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleQuery};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        if request.daily_rate <= rust_decimal::Decimal::ZERO {
            return Err(AppError::Validation(
                "dailyRate must be positive".to_string(),
            ));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (make, model, year, color, license_plate, mileage, category, status, daily_rate, features, next_service_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'available'::vehicle_status), $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(request.make)
        .bind(request.model)
        .bind(request.year)
        .bind(request.color)
        .bind(request.license_plate)
        .bind(request.mileage.unwrap_or(0))
        .bind(request.category)
        .bind(request.status)
        .bind(request.daily_rate)
        .bind(request.features.unwrap_or_default())
        .bind(request.next_service_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("License plate already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self, query: VehicleQuery) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::vehicle_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR category ILIKE $2)
              AND ($3::text IS NULL
                   OR make ILIKE '%' || $3 || '%'
                   OR model ILIKE '%' || $3 || '%'
                   OR license_plate ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.status)
        .bind(query.category)
        .bind(query.q)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if let Some(rate) = request.daily_rate {
            if rate <= rust_decimal::Decimal::ZERO {
                return Err(AppError::Validation(
                    "dailyRate must be positive".to_string(),
                ));
            }
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, year = $4, color = $5, license_plate = $6,
                mileage = $7, category = $8, status = $9, daily_rate = $10,
                features = $11, next_service_date = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.make.unwrap_or(current.make))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.color.or(current.color))
        .bind(request.license_plate.unwrap_or(current.license_plate))
        .bind(request.mileage.unwrap_or(current.mileage))
        .bind(request.category.or(current.category))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.daily_rate.unwrap_or(current.daily_rate))
        .bind(request.features.unwrap_or(current.features))
        .bind(request.next_service_date.or(current.next_service_date))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("License plate already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
