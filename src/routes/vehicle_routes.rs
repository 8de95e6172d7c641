//! Rutas de la flota de vehículos
//!
//! Lectura para admin y agente; altas, cambios y bajas solo para admin.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleQuery};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<VehicleQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let vehicles = VehicleRepository::new(state.pool.clone()).list(query).await?;

    Ok(Json(json!({ "vehicles": vehicles })))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let vehicle = VehicleRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    Ok(Json(json!({ "vehicle": vehicle })))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin])?;
    request.validate()?;

    let vehicle = VehicleRepository::new(state.pool.clone()).create(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "vehicle": vehicle }))))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    let vehicle = VehicleRepository::new(state.pool.clone())
        .update(id, request)
        .await?;

    Ok(Json(json!({ "vehicle": vehicle })))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    VehicleRepository::new(state.pool.clone()).delete(id).await?;

    Ok(Json(json!({ "ok": true })))
}
