//! DTOs de vehículos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::vehicle::VehicleStatus;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, message = "make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(range(min = 1950, max = 2100, message = "year is out of range"))]
    pub year: i32,
    pub color: Option<String>,
    #[validate(length(min = 1, message = "licensePlate is required"))]
    pub license_plate: String,
    pub mileage: Option<i32>,
    pub category: Option<String>,
    pub status: Option<VehicleStatus>,
    pub daily_rate: Decimal,
    pub features: Option<Vec<String>>,
    pub next_service_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub mileage: Option<i32>,
    pub category: Option<String>,
    pub status: Option<VehicleStatus>,
    pub daily_rate: Option<Decimal>,
    pub features: Option<Vec<String>>,
    pub next_service_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuery {
    pub status: Option<VehicleStatus>,
    pub category: Option<String>,
    pub q: Option<String>,
}
