//! DTOs de analítica

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub vehicles: i64,
    pub reservations: i64,
    pub invoices: i64,
    pub active_reservations: i64,
    pub available_vehicles: i64,
    pub total_revenue: Decimal,
}
