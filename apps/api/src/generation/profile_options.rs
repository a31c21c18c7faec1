//! Profile option vocabularies for the personal-profile wizard.

use tracing::{info, warn};

use crate::generation::prompts::{
    profile_options_schema, CAREER_GUIDE_SYSTEM, PROFILE_OPTIONS_PROMPT,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{generate_json, GenerationRequest, LlmBackend, LlmError};
use crate::models::profile::ProfileOptions;

fn build_request() -> GenerationRequest {
    GenerationRequest {
        system: format!("{CAREER_GUIDE_SYSTEM} {JSON_ONLY_SYSTEM}"),
        prompt: PROFILE_OPTIONS_PROMPT.to_string(),
        schema: profile_options_schema(),
    }
}

async fn try_generate_profile_options(llm: &dyn LlmBackend) -> Result<ProfileOptions, LlmError> {
    let mut options: ProfileOptions = generate_json(llm, &build_request()).await?;
    for list in [
        &mut options.interests,
        &mut options.personality_traits,
        &mut options.work_environments,
        &mut options.values,
    ] {
        tidy(list);
    }
    Ok(options)
}

/// Trims entries and drops blanks and repeats, keeping first-seen order.
fn tidy(list: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    list.retain_mut(|item| {
        *item = item.trim().to_string();
        !item.is_empty() && seen.insert(item.clone())
    });
}

/// Generates the wizard's option lists. Never fails: on any generation error
/// all four lists come back empty.
pub async fn generate_profile_options(llm: &dyn LlmBackend) -> ProfileOptions {
    match try_generate_profile_options(llm).await {
        Ok(options) => {
            info!(
                "Generated profile options: {} interests, {} traits, {} environments, {} values",
                options.interests.len(),
                options.personality_traits.len(),
                options.work_environments.len(),
                options.values.len()
            );
            options
        }
        Err(e) => {
            warn!("Profile option generation failed, using empty options: {e}");
            ProfileOptions::default()
        }
    }
}
