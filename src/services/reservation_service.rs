//! Motor de reservas
//!
//! Máquina de estados Vehicle × Reservation. Toda escritura que acopla las
//! dos entidades ocurre dentro de UNA transacción Postgres: o ambas son
//! visibles o ninguna. El `SELECT ... FOR UPDATE` sobre el vehículo
//! serializa dos create concurrentes: exactamente uno lo observa
//! `available`; el otro ve `rented` y falla con Conflict sin mutar nada.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::reservation_dto::{CreateReservationRequest, UpdateReservationRequest};
use crate::models::customer::Customer;
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

/// endDate estrictamente posterior a startDate
pub fn validate_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::Validation(
            "endDate must be after startDate".to_string(),
        ));
    }
    Ok(())
}

/// Un vehículo solo admite una reserva activa: cualquier estado distinto
/// de `available` (ya rentado, o en mantenimiento) rechaza el create
pub fn ensure_bookable(vehicle: &Vehicle) -> Result<(), AppError> {
    if vehicle.status != VehicleStatus::Available {
        return Err(AppError::Conflict("Vehicle is not available".to_string()));
    }
    Ok(())
}

/// Decide si una transición de estados libera el vehículo. Solo la salida
/// de `active` hacia un estado terminal libera; repetirla sobre una
/// reserva ya terminal no vuelve a liberar.
pub fn releases_on_transition(current: ReservationStatus, next: ReservationStatus) -> bool {
    current == ReservationStatus::Active && next.releases_vehicle()
}

pub struct ReservationService {
    pool: PgPool,
}

impl ReservationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea una reserva activa y marca el vehículo como rentado, atómicamente.
    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, AppError> {
        validate_range(request.start_date, request.end_date)?;

        let mut tx = self.pool.begin().await?;

        // FOR UPDATE: ningún otro create puede observar este vehículo hasta el commit
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(request.vehicle_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if let Err(e) = ensure_bookable(&vehicle) {
            tx.rollback().await?;
            return Err(e);
        }

        let customer = match sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(request.customer_id)
            .fetch_optional(&mut *tx)
            .await?
        {
            Some(customer) => customer,
            None => {
                tx.rollback().await?;
                return Err(AppError::NotFound("Customer not found".to_string()));
            }
        };

        // Snapshot del cliente capturado en este instante
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (vehicle_id, customer_id, customer_name, customer_phone, start_date, end_date, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, 'active', $7)
            RETURNING *
            "#,
        )
        .bind(request.vehicle_id)
        .bind(request.customer_id)
        .bind(customer.full_name)
        .bind(customer.phone)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.notes)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET status = 'rented', updated_at = NOW() WHERE id = $1")
            .bind(request.vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(reservation)
    }

    /// Actualiza una reserva. Si el patch cambia `customerId`, el snapshot se
    /// recalcula del nuevo cliente; una transición a estado terminal libera
    /// el vehículo en la misma transacción.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let current =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let status = request.status.unwrap_or(current.status);
        if current.status.is_terminal() && status != current.status {
            tx.rollback().await?;
            return Err(AppError::Conflict(
                "Reservation is no longer active".to_string(),
            ));
        }

        let start = request.start_date.unwrap_or(current.start_date);
        let end = request.end_date.unwrap_or(current.end_date);
        if let Err(e) = validate_range(start, end) {
            tx.rollback().await?;
            return Err(e);
        }

        // Los snapshots solo cambian cuando el patch re-apunta el cliente
        let (customer_id, customer_name, customer_phone) = match request.customer_id {
            Some(new_customer_id) => {
                let customer = match sqlx::query_as::<_, Customer>(
                    "SELECT * FROM customers WHERE id = $1",
                )
                .bind(new_customer_id)
                .fetch_optional(&mut *tx)
                .await?
                {
                    Some(customer) => customer,
                    None => {
                        tx.rollback().await?;
                        return Err(AppError::NotFound("Customer not found".to_string()));
                    }
                };
                (new_customer_id, customer.full_name, customer.phone)
            }
            None => (
                current.customer_id,
                current.customer_name.clone(),
                current.customer_phone.clone(),
            ),
        };

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET customer_id = $2, customer_name = $3, customer_phone = $4,
                start_date = $5, end_date = $6, status = $7, notes = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .bind(customer_name)
        .bind(customer_phone)
        .bind(start)
        .bind(end)
        .bind(status)
        .bind(request.notes.or(current.notes))
        .fetch_one(&mut *tx)
        .await?;

        if releases_on_transition(current.status, status) {
            self.release_vehicle(&mut tx, current.vehicle_id).await?;
        }

        tx.commit().await?;

        Ok(reservation)
    }

    /// Cancela la reserva y libera el vehículo. Idempotente: una reserva ya
    /// terminal conserva su estado pero el vehículo se libera igual.
    pub async fn cancel(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.status == ReservationStatus::Active {
            sqlx::query(
                "UPDATE reservations SET status = 'cancelled', updated_at = NOW() WHERE id = $1",
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        self.release_vehicle(&mut tx, reservation.vehicle_id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// Liberación incondicional: no se condiciona al estado previo del
    /// vehículo, de modo que también repara un estado inconsistente.
    async fn release_vehicle(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        vehicle_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET status = 'available', updated_at = NOW() WHERE id = $1")
            .bind(vehicle_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn vehicle_with_status(status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            color: None,
            license_plate: "KT-1234".to_string(),
            mileage: 12000,
            category: None,
            status,
            daily_rate: Decimal::new(5000, 2),
            features: vec![],
            next_service_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_range_must_be_strictly_increasing() {
        let now = Utc::now();
        assert!(validate_range(now, now + Duration::hours(1)).is_ok());
        assert!(validate_range(now, now).is_err());
        assert!(validate_range(now, now - Duration::hours(1)).is_err());
    }

    #[test]
    fn test_only_available_vehicles_are_bookable() {
        assert!(ensure_bookable(&vehicle_with_status(VehicleStatus::Available)).is_ok());

        // Un vehículo ya rentado es el que observa el perdedor de dos
        // creates concurrentes: Conflict, sin mutar nada
        assert!(matches!(
            ensure_bookable(&vehicle_with_status(VehicleStatus::Rented)),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            ensure_bookable(&vehicle_with_status(VehicleStatus::Maintenance)),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_release_only_on_leaving_active() {
        use ReservationStatus::*;

        assert!(releases_on_transition(Active, Completed));
        assert!(releases_on_transition(Active, Cancelled));
        assert!(!releases_on_transition(Active, Active));

        // Repetir la transición sobre una reserva ya terminal es un no-op
        assert!(!releases_on_transition(Completed, Completed));
        assert!(!releases_on_transition(Cancelled, Cancelled));
        assert!(!releases_on_transition(Completed, Cancelled));
    }
}
