//! Modelo de Settings (fila singleton, bootstrap perezoso en la primera lectura)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: Uuid,
    pub company_name: String,
    pub currency: String,
    pub tax_rate_percent: Decimal,
    pub invoice_prefix: String,
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
