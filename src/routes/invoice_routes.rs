//! Rutas de facturación
//!
//! La generación toma una instantánea de la reserva y el vehículo al
//! momento de emitir, así la factura queda legible aunque luego cambien.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::dto::invoice_dto::{GenerateInvoiceRequest, InvoiceQuery, UpdateInvoiceRequest};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::invoice_repository::InvoiceRepository;
use crate::services::billing_service::BillingService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/from-reservation/:id", post(generate_invoice))
        .route(
            "/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

async fn list_invoices(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<InvoiceQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let invoices = InvoiceRepository::new(state.pool.clone()).list(query).await?;

    Ok(Json(json!({ "invoices": invoices })))
}

async fn get_invoice(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let invoice = InvoiceRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    Ok(Json(json!({ "invoice": invoice })))
}

async fn generate_invoice(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(reservation_id): Path<Uuid>,
    body: Option<Json<GenerateInvoiceRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    // POST sin cuerpo es válido: tax y discount quedan en 0
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let invoice = BillingService::new(state.pool.clone())
        .generate_invoice(reservation_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

async fn update_invoice(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let invoice = BillingService::new(state.pool.clone())
        .update_invoice(id, request)
        .await?;

    Ok(Json(json!({ "invoice": invoice })))
}

async fn delete_invoice(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    InvoiceRepository::new(state.pool.clone()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use rust_decimal::Decimal;

    async fn extract_body(request: Request<Body>) -> GenerateInvoiceRequest {
        let extracted = Option::<Json<GenerateInvoiceRequest>>::from_request(request, &())
            .await
            .unwrap();
        extracted.map(|Json(r)| r).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_missing_body_defaults_tax_and_discount() {
        let request = Request::builder()
            .method("POST")
            .uri("/from-reservation/7f7a1c1e-0000-0000-0000-000000000001")
            .body(Body::empty())
            .unwrap();

        let body = extract_body(request).await;

        assert_eq!(body.tax, None);
        assert_eq!(body.discount, None);
        assert_eq!(body.notes, None);
    }

    #[tokio::test]
    async fn test_json_body_still_parses() {
        let request = Request::builder()
            .method("POST")
            .uri("/from-reservation/7f7a1c1e-0000-0000-0000-000000000001")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"tax": "10.00", "discount": "5.00"}"#))
            .unwrap();

        let body = extract_body(request).await;

        assert_eq!(body.tax, Some(Decimal::new(1000, 2)));
        assert_eq!(body.discount, Some(Decimal::new(500, 2)));
    }
}
