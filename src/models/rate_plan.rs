//! Modelo de RatePlan

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub base_daily_rate: Decimal,
    pub weekend_multiplier: Decimal,
    pub weekly_discount_percent: Decimal,
    pub active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
