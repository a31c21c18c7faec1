//! Axum route handlers for sessions and the personal profile.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{PersonalProfile, ProfileField};
use crate::session::SessionHandle;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Free-text profile fields. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct ProfileTextRequest {
    pub career_goals: Option<String>,
    pub additional_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub field: ProfileField,
    pub value: String,
}

pub(crate) async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let handle = state.sessions.create().await;
    let created_at = handle.lock().await.created_at;
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: handle.id(),
            created_at,
        }),
    )
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PersonalProfile>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.profile().await.as_ref().clone()))
}

/// PUT /api/v1/sessions/:id/profile
///
/// Replaces the whole profile; there is no partial update.
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<PersonalProfile>,
) -> Result<Json<PersonalProfile>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.replace_profile(profile).await.as_ref().clone()))
}

/// POST /api/v1/sessions/:id/profile/toggle
pub async fn handle_toggle_profile_value(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<PersonalProfile>, AppError> {
    let value = req.value.trim();
    if value.is_empty() {
        return Err(AppError::Validation("value cannot be empty".to_string()));
    }
    let session = find_session(&state, id).await?;
    let profile = session
        .update_profile(|p| p.toggle(req.field, value))
        .await;
    Ok(Json(profile.as_ref().clone()))
}

/// PATCH /api/v1/sessions/:id/profile
pub async fn handle_update_profile_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProfileTextRequest>,
) -> Result<Json<PersonalProfile>, AppError> {
    let session = find_session(&state, id).await?;
    let profile = session
        .update_profile(|p| {
            let p = match &req.career_goals {
                Some(goals) => p.with_career_goals(goals.as_str()),
                None => p.clone(),
            };
            match &req.additional_info {
                Some(info) => p.with_additional_info(info.as_str()),
                None => p,
            }
        })
        .await;
    Ok(Json(profile.as_ref().clone()))
}
