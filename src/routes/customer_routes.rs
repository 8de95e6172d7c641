//! Rutas del padrón de clientes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{CreateCustomerRequest, CustomerQuery, UpdateCustomerRequest};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::customer_repository::CustomerRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

async fn list_customers(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let customers = CustomerRepository::new(state.pool.clone()).list(query).await?;

    Ok(Json(json!({ "customers": customers })))
}

async fn get_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let customer = CustomerRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

    Ok(Json(json!({ "customer": customer })))
}

async fn create_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;
    request.validate()?;

    let customer = CustomerRepository::new(state.pool.clone()).create(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "customer": customer }))))
}

async fn update_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let customer = CustomerRepository::new(state.pool.clone())
        .update(id, request)
        .await?;

    Ok(Json(json!({ "customer": customer })))
}

async fn delete_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    CustomerRepository::new(state.pool.clone()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}
