//! DTOs de facturación

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::invoice::InvoiceStatus;

/// tax y discount por defecto valen 0 si el caller no los envía
#[derive(Debug, Default, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub tax: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    pub status: Option<InvoiceStatus>,
    pub issued_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceQuery {
    pub status: Option<InvoiceStatus>,
}
