//! Reglas de facturación de punta a punta, sin base de datos:
//! duración en días enteros, subtotal exacto en Decimal y clamp del total.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use keyturn_backend::services::billing_service::{invoice_total, rental_days};
use keyturn_backend::services::reservation_service::validate_range;

#[test]
fn three_day_rental_at_fifty_per_day() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    let end = start + Duration::days(3);

    let days = rental_days(start, end);
    assert_eq!(days, 3);

    let daily_rate = Decimal::new(5000, 2); // 50.00
    let subtotal = Decimal::from(days) * daily_rate;
    assert_eq!(subtotal, Decimal::new(15000, 2)); // 150.00

    let tax = Decimal::new(1000, 2); // 10.00
    let discount = Decimal::new(500, 2); // 5.00
    assert_eq!(invoice_total(subtotal, tax, discount), Decimal::new(15500, 2));
}

#[test]
fn partial_days_round_up() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

    // 2 días y 1 hora facturan 3 días
    assert_eq!(rental_days(start, start + Duration::hours(49)), 3);
    // exactamente 48 horas facturan 2
    assert_eq!(rental_days(start, start + Duration::hours(48)), 2);
}

#[test]
fn same_day_rental_bills_one_day() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let end = start + Duration::hours(4);

    assert_eq!(rental_days(start, end), 1);
}

#[test]
fn oversized_discount_clamps_total_to_zero() {
    let subtotal = Decimal::new(5000, 2);
    let discount = Decimal::new(20000, 2);

    assert_eq!(invoice_total(subtotal, Decimal::ZERO, discount), Decimal::ZERO);
}

#[test]
fn reservation_window_must_be_positive() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

    assert!(validate_range(start, start + Duration::hours(1)).is_ok());
    assert!(validate_range(start, start).is_err());
    assert!(validate_range(start, start - Duration::hours(1)).is_err());
}
