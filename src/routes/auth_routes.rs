//! Rutas de autenticación
//!
//! Registro, login, perfil y logout. El logout es público a propósito:
//! lee su propio header Authorization para que una credencial expirada o
//! ya revocada también pueda cerrar sesión.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use crate::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::middleware::auth::{bearer_token, require_auth, AuthUser};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route(
            "/me",
            get(me).route_layer(middleware::from_fn_with_state(state, require_auth)),
        )
}

fn auth_service(state: &AppState) -> AuthService {
    AuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.config.default_role,
    )
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let response = auth_service(&state).register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "token": response.token, "user": response.user })),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let response = auth_service(&state).login(request).await?;

    Ok(Json(json!({ "token": response.token, "user": response.user })))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let profile = auth_service(&state).me(user.id).await?;

    Ok(Json(json!({ "user": profile })))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    auth_service(&state).logout(bearer_token(&headers)).await;

    Json(json!({ "message": "Logged out successfully" }))
}
