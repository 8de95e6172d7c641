//! Rutas de analítica del back-office

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde_json::{json, Value};

use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::analytics_repository::AnalyticsRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new().route("/summary", get(summary))
}

async fn summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin, UserRole::Agent])?;

    let summary = AnalyticsRepository::new(state.pool.clone()).summary().await?;

    Ok(Json(json!({ "summary": summary })))
}
