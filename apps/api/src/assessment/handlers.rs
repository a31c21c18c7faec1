//! Axum route handlers for the catalog, the skills test, and its results.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::engine::AssessmentView;
use crate::assessment::scoring::{average_percentage, ranked, top_skills};
use crate::catalog::seed_skill_areas;
use crate::errors::AppError;
use crate::generation::questions::generate_questions;
use crate::models::result::SkillResult;
use crate::models::skill::SkillAreaSummary;
use crate::session::handlers::find_session;
use crate::state::AppState;

/// How many areas the results view highlights.
pub const TOP_SKILL_COUNT: usize = 3;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub option: usize,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    /// Catalog order.
    pub results: Vec<SkillResult>,
    /// Highest percentage first.
    pub ranked: Vec<SkillResult>,
    pub top_skills: Vec<SkillResult>,
    pub average_percentage: f64,
    pub completed_at: Option<DateTime<Utc>>,
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog() -> Json<Vec<SkillAreaSummary>> {
    Json(seed_skill_areas().iter().map(SkillAreaSummary::from).collect())
}

/// POST /api/v1/sessions/:id/assessment
///
/// Generates questions for the seed catalog (seed questions on failure) and
/// starts a fresh test.
pub async fn handle_start_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    // generation runs without the session lock held
    let areas = generate_questions(state.llm.as_ref(), &seed_skill_areas()).await;
    let view = session
        .start_assessment(areas, state.config.question_time_limit_secs)
        .await;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.assessment_view().await?))
}

/// POST /api/v1/sessions/:id/assessment/select
pub async fn handle_select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.select(req.option).await?))
}

/// POST /api/v1/sessions/:id/assessment/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.submit().await?))
}

/// POST /api/v1/sessions/:id/assessment/next
pub async fn handle_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.advance().await?))
}

/// POST /api/v1/sessions/:id/assessment/previous
pub async fn handle_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.previous().await?))
}

/// GET /api/v1/sessions/:id/results
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let (results, completed_at) = {
        let guard = session.lock().await;
        (guard.results.get(), guard.completed_at)
    };
    if completed_at.is_none() {
        return Err(AppError::Conflict(
            "Complete the skills assessment before viewing results".to_string(),
        ));
    }
    Ok(Json(ResultsResponse {
        ranked: ranked(&results),
        top_skills: top_skills(&results, TOP_SKILL_COUNT),
        average_percentage: average_percentage(&results),
        results: results.to_vec(),
        completed_at,
    }))
}
