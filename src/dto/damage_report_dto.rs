//! DTOs de reportes de daños

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::damage_report::{DamageSeverity, DamageStatus};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDamageReportRequest {
    pub vehicle_id: Uuid,
    pub reservation_id: Option<Uuid>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub severity: Option<DamageSeverity>,
    pub status: Option<DamageStatus>,
    pub cost_estimate: Option<Decimal>,
    pub photos: Option<Vec<String>>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDamageReportRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<DamageSeverity>,
    pub status: Option<DamageStatus>,
    pub cost_estimate: Option<Decimal>,
    pub photos: Option<Vec<String>>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReportQuery {
    pub status: Option<DamageStatus>,
    pub severity: Option<DamageSeverity>,
    pub vehicle_id: Option<Uuid>,
}
