//! Rutas de configuración de la agencia
//!
//! Documento único: el GET lo crea con valores por defecto si no existe.

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde_json::{json, Value};

use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::settings_repository::SettingsRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

async fn get_settings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let settings = SettingsRepository::new(state.pool.clone()).get_or_create().await?;

    Ok(Json(json!({ "settings": settings })))
}

async fn update_settings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    let settings = SettingsRepository::new(state.pool.clone()).update(request).await?;

    Ok(Json(json!({ "settings": settings })))
}
