use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmBackend;
use crate::session::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production.
    pub llm: Arc<dyn LlmBackend>,
    pub config: Config,
    pub sessions: SessionRegistry,
}
