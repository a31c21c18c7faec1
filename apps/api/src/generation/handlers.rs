//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::assessment::handlers::TOP_SKILL_COUNT;
use crate::assessment::scoring::top_skills;
use crate::errors::AppError;
use crate::generation::profile_options::generate_profile_options;
use crate::generation::recommendations::generate_recommendations;
use crate::models::profile::ProfileOptions;
use crate::models::recommendation::CareerRecommendation;
use crate::models::result::SkillResult;
use crate::session::handlers::find_session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Best match first. Empty when generation failed.
    pub recommendations: Vec<CareerRecommendation>,
    pub top_skills: Vec<SkillResult>,
}

/// GET /api/v1/profile/options
///
/// Always 200: generation failures yield empty option lists.
pub async fn handle_profile_options(State(state): State<AppState>) -> Json<ProfileOptions> {
    Json(generate_profile_options(state.llm.as_ref()).await)
}

/// POST /api/v1/sessions/:id/recommendations
///
/// Requires a completed assessment. Always 200 once that holds: generation
/// failures yield an empty list.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let (results, profile, completed) = {
        let guard = session.lock().await;
        (
            guard.results.get(),
            guard.profile.get(),
            guard.completed_at.is_some(),
        )
    };
    if !completed {
        return Err(AppError::Conflict(
            "Complete the skills assessment before requesting recommendations".to_string(),
        ));
    }

    let recommendations = generate_recommendations(state.llm.as_ref(), &results, &profile).await;

    Ok(Json(RecommendationsResponse {
        recommendations,
        top_skills: top_skills(&results, TOP_SKILL_COUNT),
    }))
}
