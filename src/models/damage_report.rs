//! Modelo de DamageReport

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Severidad del daño - mapea al ENUM damage_severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "damage_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DamageSeverity {
    Low,
    Medium,
    High,
}

/// Estado del reporte - mapea al ENUM damage_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "damage_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DamageStatus {
    Open,
    InReview,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub reported_by_user_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub severity: DamageSeverity,
    pub status: DamageStatus,
    pub cost_estimate: Decimal,
    pub photos: Vec<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
