use serde::{Deserialize, Serialize};

/// A generated career suggestion. Read-only once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub why_suitable: String,
    pub education_path: String,
    pub salary_range: String,
    pub growth_prospects: String,
    pub key_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    /// 0 to 100
    pub match_percentage: f64,
}

/// Orders recommendations by match percentage, best first. Stable for ties.
pub fn rank_recommendations(mut recommendations: Vec<CareerRecommendation>) -> Vec<CareerRecommendation> {
    recommendations.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    recommendations
}
