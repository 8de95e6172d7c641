//! Rutas de planes tarifarios
//!
//! Lectura para admin y agente; escritura solo para admin.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dto::rate_plan_dto::{CreateRatePlanRequest, RatePlanQuery, UpdateRatePlanRequest};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::rate_plan_repository::RatePlanRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rate_plan_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rate_plans).post(create_rate_plan))
        .route("/:id", put(update_rate_plan).delete(delete_rate_plan))
}

async fn list_rate_plans(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<RatePlanQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let plans = RatePlanRepository::new(state.pool.clone()).list(query).await?;

    Ok(Json(json!({ "ratePlans": plans })))
}

async fn create_rate_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateRatePlanRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin])?;
    request.validate()?;

    let plan = RatePlanRepository::new(state.pool.clone()).create(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "ratePlan": plan }))))
}

async fn update_rate_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRatePlanRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    let plan = RatePlanRepository::new(state.pool.clone())
        .update(id, request)
        .await?;

    Ok(Json(json!({ "ratePlan": plan })))
}

async fn delete_rate_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    RatePlanRepository::new(state.pool.clone()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}
