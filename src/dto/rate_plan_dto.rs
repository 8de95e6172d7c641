//! DTOs de planes de tarifas

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatePlanRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category: Option<String>,
    pub base_daily_rate: Decimal,
    pub weekend_multiplier: Option<Decimal>,
    pub weekly_discount_percent: Option<Decimal>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatePlanRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub base_daily_rate: Option<Decimal>,
    pub weekend_multiplier: Option<Decimal>,
    pub weekly_discount_percent: Option<Decimal>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RatePlanQuery {
    pub active: Option<bool>,
}
