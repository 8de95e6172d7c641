//! Modelo de Reservation
//!
//! `customer_name` y `customer_phone` son campos snapshot: se copian del
//! Customer en el momento de crear (o re-apuntar) la reserva y no se
//! vuelven a resolver en lecturas posteriores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la reserva - mapea al ENUM reservation_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Los estados terminales no transicionan más
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Completed | ReservationStatus::Cancelled)
    }

    /// Transiciones que devuelven el vehículo a `available`
    pub fn releases_vehicle(&self) -> bool {
        self.is_terminal()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states_release_vehicle() {
        assert!(!ReservationStatus::Active.is_terminal());
        assert!(ReservationStatus::Completed.releases_vehicle());
        assert!(ReservationStatus::Cancelled.releases_vehicle());
    }
}
