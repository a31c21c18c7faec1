pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::generation::handlers as generation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(assessment::handle_get_catalog))
        .route(
            "/api/v1/profile/options",
            get(generation::handle_profile_options),
        )
        // Sessions and the personal profile
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id/profile",
            get(session::handle_get_profile)
                .put(session::handle_replace_profile)
                .patch(session::handle_update_profile_text),
        )
        .route(
            "/api/v1/sessions/:id/profile/toggle",
            post(session::handle_toggle_profile_value),
        )
        // Skills assessment
        .route(
            "/api/v1/sessions/:id/assessment",
            post(assessment::handle_start_assessment).get(assessment::handle_get_assessment),
        )
        .route(
            "/api/v1/sessions/:id/assessment/select",
            post(assessment::handle_select),
        )
        .route(
            "/api/v1/sessions/:id/assessment/submit",
            post(assessment::handle_submit),
        )
        .route(
            "/api/v1/sessions/:id/assessment/next",
            post(assessment::handle_next),
        )
        .route(
            "/api/v1/sessions/:id/assessment/previous",
            post(assessment::handle_previous),
        )
        .route(
            "/api/v1/sessions/:id/results",
            get(assessment::handle_get_results),
        )
        .route(
            "/api/v1/sessions/:id/recommendations",
            post(generation::handle_recommendations),
        )
        .with_state(state)
}
