//! Career recommendations: synthesized from skill results and the personal profile.

use tracing::{info, warn};

use crate::generation::prompts::{
    recommendations_schema, CAREER_GUIDE_SYSTEM, RECOMMENDATIONS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{AUDIENCE_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{generate_json, GenerationRequest, LlmBackend, LlmError};
use crate::models::profile::PersonalProfile;
use crate::models::recommendation::{rank_recommendations, CareerRecommendation};
use crate::models::result::SkillResult;

pub const RECOMMENDATION_COUNT: usize = 5;

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none specified".to_string()
    } else {
        values.join(", ")
    }
}

fn text_or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "none specified"
    } else {
        value.trim()
    }
}

/// One line per area: `- Area: 80.00% (Advanced)`.
fn format_skill_results(results: &[SkillResult]) -> String {
    results
        .iter()
        .map(|r| format!("- {}: {:.2}% ({})", r.area, r.percentage, r.level.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_request(results: &[SkillResult], profile: &PersonalProfile) -> GenerationRequest {
    let prompt = RECOMMENDATIONS_PROMPT_TEMPLATE
        .replace("{recommendation_count}", &RECOMMENDATION_COUNT.to_string())
        .replace("{skill_results}", &format_skill_results(results))
        .replace("{interests}", &join_or_none(&profile.interests))
        .replace("{personality_traits}", &join_or_none(&profile.personality_traits))
        .replace("{work_environment}", &join_or_none(&profile.work_environment))
        .replace("{values}", &join_or_none(&profile.values))
        .replace("{career_goals}", text_or_none(&profile.career_goals))
        .replace("{additional_info}", text_or_none(&profile.additional_info));
    GenerationRequest {
        system: format!("{CAREER_GUIDE_SYSTEM} {AUDIENCE_INSTRUCTION} {JSON_ONLY_SYSTEM}"),
        prompt,
        schema: recommendations_schema(),
    }
}

async fn try_generate_recommendations(
    llm: &dyn LlmBackend,
    results: &[SkillResult],
    profile: &PersonalProfile,
) -> Result<Vec<CareerRecommendation>, LlmError> {
    let recommendations: Vec<CareerRecommendation> =
        generate_json(llm, &build_request(results, profile)).await?;

    if let Some(bad) = recommendations
        .iter()
        .find(|r| !(0.0..=100.0).contains(&r.match_percentage))
    {
        return Err(LlmError::Schema(format!(
            "recommendation '{}' has match percentage {} outside 0-100",
            bad.title, bad.match_percentage
        )));
    }

    Ok(rank_recommendations(recommendations))
}

/// Generates ranked career recommendations. Never fails: on any generation
/// error the list is empty.
pub async fn generate_recommendations(
    llm: &dyn LlmBackend,
    results: &[SkillResult],
    profile: &PersonalProfile,
) -> Vec<CareerRecommendation> {
    match try_generate_recommendations(llm, results, profile).await {
        Ok(recommendations) => {
            info!("Generated {} career recommendations", recommendations.len());
            recommendations
        }
        Err(e) => {
            warn!("Recommendation generation failed, returning none: {e}");
            Vec::new()
        }
    }
}
