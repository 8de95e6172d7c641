//! Rutas de gestión de agentes (solo admin)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dto::agent_dto::{CreateAgentRequest, UpdateAgentRequest};
use crate::dto::auth_dto::UserResponse;
use crate::middleware::auth::{require_role, AuthUser};
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_agent_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_agents).post(create_agent))
        .route("/:id", put(update_agent).delete(delete_agent))
}

async fn list_agents(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    let agents = UserRepository::new(state.pool.clone()).list_agents().await?;
    let agents: Vec<UserResponse> = agents.into_iter().map(UserResponse::from).collect();

    Ok(Json(json!({ "agents": agents })))
}

async fn create_agent(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, &[UserRole::Admin])?;
    request.validate()?;

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

    let agent = UserRepository::new(state.pool.clone())
        .create(request.name, request.email, password_hash, UserRole::Agent)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "agent": UserResponse::from(agent) })),
    ))
}

async fn update_agent(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAgentRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    let agent = UserRepository::new(state.pool.clone())
        .update_agent(id, request.name, request.email)
        .await?;

    Ok(Json(json!({ "agent": UserResponse::from(agent) })))
}

async fn delete_agent(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[UserRole::Admin])?;

    UserRepository::new(state.pool.clone()).delete_agent(id).await?;

    Ok(Json(json!({ "ok": true })))
}
