//! DTOs de configuración de la empresa

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub company_name: Option<String>,
    pub currency: Option<String>,
    pub tax_rate_percent: Option<Decimal>,
    pub invoice_prefix: Option<String>,
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
}
