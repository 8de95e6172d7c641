//! Calculadora de facturación
//!
//! Deriva una factura de una reserva y la tarifa diaria del vehículo.
//! La duración se factura en días enteros (techo, mínimo 1) y los montos
//! se calculan con Decimal: sin deriva de redondeo para tarifas en centavos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::invoice_dto::{GenerateInvoiceRequest, UpdateInvoiceRequest};
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::repositories::invoice_repository::{InvoiceRepository, NewInvoice};
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Días de renta: techo de (end − start) en días calendario, mínimo 1.
/// Una renta del mismo día factura 1 día; 25 horas facturan 2.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    let days = (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY);
    days.max(1)
}

/// total = max(0, subtotal + tax − discount); nunca negativo
pub fn invoice_total(subtotal: Decimal, tax: Decimal, discount: Decimal) -> Decimal {
    (subtotal + tax - discount).max(Decimal::ZERO)
}

pub struct BillingService {
    reservations: ReservationRepository,
    vehicles: VehicleRepository,
    invoices: InvoiceRepository,
}

impl BillingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reservations: ReservationRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            invoices: InvoiceRepository::new(pool),
        }
    }

    /// Genera una factura en `draft` a partir de una reserva.
    ///
    /// `customer_name` sale del snapshot de la propia reserva y
    /// `vehicle_label` se captura aquí: la factura queda legible aunque el
    /// vehículo o el cliente cambien después.
    pub async fn generate_invoice(
        &self,
        reservation_id: Uuid,
        request: GenerateInvoiceRequest,
    ) -> Result<Invoice, AppError> {
        let reservation = self
            .reservations
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let vehicle = self
            .vehicles
            .find_by_id(reservation.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let days = rental_days(reservation.start_date, reservation.end_date);
        let subtotal = Decimal::from(days) * vehicle.daily_rate;
        let tax = request.tax.unwrap_or(Decimal::ZERO);
        let discount = request.discount.unwrap_or(Decimal::ZERO);
        let total = invoice_total(subtotal, tax, discount);

        self.invoices
            .create(NewInvoice {
                reservation_id: reservation.id,
                customer_name: reservation.customer_name,
                vehicle_label: vehicle.label(),
                subtotal,
                tax,
                discount,
                total,
                notes: request.notes,
            })
            .await
    }

    /// Actualiza la factura. Una transición a `paid` sella `paidAt` con la
    /// hora actual si el caller no lo suministró explícitamente.
    pub async fn update_invoice(
        &self,
        id: Uuid,
        request: UpdateInvoiceRequest,
    ) -> Result<Invoice, AppError> {
        let current = self
            .invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

        let status = request.status.unwrap_or(current.status);
        let issued_at = request.issued_at.unwrap_or(current.issued_at);

        let paid_at = if status == InvoiceStatus::Paid {
            request
                .paid_at
                .or(current.paid_at)
                .or_else(|| Some(Utc::now()))
        } else {
            request.paid_at.or(current.paid_at)
        };

        self.invoices
            .update(id, status, issued_at, paid_at, request.notes.or(current.notes))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day_zero() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_exact_24h_bills_one_day() {
        let start = day_zero();
        assert_eq!(rental_days(start, start + Duration::hours(24)), 1);
    }

    #[test]
    fn test_25h_bills_two_days() {
        let start = day_zero();
        assert_eq!(rental_days(start, start + Duration::hours(25)), 2);
    }

    #[test]
    fn test_sub_day_rental_bills_minimum_one_day() {
        let start = day_zero();
        assert_eq!(rental_days(start, start + Duration::minutes(30)), 1);
        assert_eq!(rental_days(start, start), 1);
    }

    #[test]
    fn test_three_full_days() {
        let start = day_zero();
        assert_eq!(rental_days(start, start + Duration::days(3)), 3);
    }

    #[test]
    fn test_subtotal_exact_for_integer_cent_rates() {
        // Tarifa 50.00 por 3 días: 150.00 exacto, sin deriva
        let rate = Decimal::new(5000, 2);
        let subtotal = Decimal::from(3i64) * rate;
        assert_eq!(subtotal, Decimal::new(15000, 2));
        assert_eq!(invoice_total(subtotal, Decimal::ZERO, Decimal::ZERO), subtotal);
    }

    #[test]
    fn test_total_never_negative() {
        let subtotal = Decimal::new(10000, 2);
        let tax = Decimal::new(500, 2);
        let discount = Decimal::new(99999, 2);
        assert_eq!(invoice_total(subtotal, tax, discount), Decimal::ZERO);
    }

    #[test]
    fn test_total_applies_tax_and_discount() {
        let subtotal = Decimal::new(10000, 2); // 100.00
        let tax = Decimal::new(825, 2); // 8.25
        let discount = Decimal::new(1000, 2); // 10.00
        assert_eq!(invoice_total(subtotal, tax, discount), Decimal::new(9825, 2));
    }
}
