//! Rutas del motor de reservas
//!
//! Las escrituras pasan por ReservationService, que mantiene en una sola
//! transacción la coherencia reserva-vehículo.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::dto::reservation_dto::{
    CreateReservationRequest, ReservationQuery, UpdateReservationRequest,
};
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::services::reservation_service::ReservationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route(
            "/:id",
            get(get_reservation)
                .put(update_reservation)
                .delete(cancel_reservation),
        )
}

async fn list_reservations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let reservations = ReservationRepository::new(state.pool.clone())
        .list(query)
        .await?;

    Ok(Json(json!({ "reservations": reservations })))
}

async fn get_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let reservation = ReservationRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

    Ok(Json(json!({ "reservation": reservation })))
}

async fn create_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let reservation = ReservationService::new(state.pool.clone())
        .create(request)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "reservation": reservation }))))
}

async fn update_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let reservation = ReservationService::new(state.pool.clone())
        .update(id, request)
        .await?;

    Ok(Json(json!({ "reservation": reservation })))
}

/// El DELETE es una cancelación, no un borrado: la fila queda como historial
async fn cancel_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    ReservationService::new(state.pool.clone()).cancel(id).await?;

    Ok(Json(json!({ "ok": true })))
}
