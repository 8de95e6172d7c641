//! Rutas de reportes de daños

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dto::damage_report_dto::{
    CreateDamageReportRequest, DamageReportQuery, UpdateDamageReportRequest,
};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::damage_report_repository::DamageReportRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_damage_report_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(create_report))
        .route("/:id", get(get_report).put(update_report).delete(delete_report))
}

async fn list_reports(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<DamageReportQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let reports = DamageReportRepository::new(state.pool.clone()).list(query).await?;

    Ok(Json(json!({ "damageReports": reports })))
}

async fn get_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let report = DamageReportRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Damage report not found".to_string()))?;

    Ok(Json(json!({ "damageReport": report })))
}

async fn create_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateDamageReportRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;
    request.validate()?;

    let report = DamageReportRepository::new(state.pool.clone())
        .create(request, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "damageReport": report }))))
}

async fn update_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDamageReportRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let report = DamageReportRepository::new(state.pool.clone())
        .update(id, request)
        .await?;

    Ok(Json(json!({ "damageReport": report })))
}

async fn delete_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    DamageReportRepository::new(state.pool.clone()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}
