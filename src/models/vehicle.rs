//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su enum de estado.
//! `status` es la única fuente de verdad sobre la disponibilidad: solo el
//! motor de reservas lo muta (los admins pueden alternar maintenance).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub license_plate: String,
    pub mileage: i32,
    pub category: Option<String>,
    pub status: VehicleStatus,
    pub daily_rate: Decimal,
    pub features: Vec<String>,
    pub next_service_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Etiqueta snapshot para facturas, p.ej. "Toyota Camry 2023 (ABC-123)"
    pub fn label(&self) -> String {
        format!(
            "{} {} {} ({})",
            self.make, self.model, self.year, self.license_plate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            color: Some("Blue".to_string()),
            license_plate: "ABC-123".to_string(),
            mileage: 12000,
            category: Some("Midsize".to_string()),
            status: VehicleStatus::Available,
            daily_rate: Decimal::new(5000, 2),
            features: vec![],
            next_service_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_vehicle_label() {
        assert_eq!(sample_vehicle().label(), "Toyota Camry 2023 (ABC-123)");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
        let back: VehicleStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(back, VehicleStatus::Maintenance);
    }
}
