// All prompt constants and response schemas for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::Value;

use crate::llm_client::prompts::{
    array_of, number_schema, object_schema, string_array_schema, string_schema,
};

/// System instruction for every career-guidance generation call.
pub const CAREER_GUIDE_SYSTEM: &str = "You are an experienced career counsellor \
    and assessment designer.";

/// Profile option prompt. No placeholders.
pub const PROFILE_OPTIONS_PROMPT: &str = r#"Generate a list of options for a personal profile assessment.
Provide the output as a JSON object with the following keys:
- interests: 14 strings representing different interests and hobbies.
- personalityTraits: 14 strings representing different personality traits.
- workEnvironments: 12 strings representing different work environments.
- values: 12 strings representing different work values and motivations.

Each option should be 1-4 words. Do not repeat options within a list."#;

/// Question generation prompt. Replace `{skill_areas}` and `{questions_per_area}`.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate {questions_per_area} unique, high-quality questions for a skills assessment test for each of the following skill areas:
{skill_areas}

For each skill area return an object with:
- name: the skill area name, copied EXACTLY as listed above.
- questions: an array of {questions_per_area} question objects.

Each question object has:
- id: a unique identifier (e.g. "skill-area-name-1")
- question: the question text.
- options: exactly 4 strings with the possible answers.
- correctAnswer: the 0-based index of the correct answer in options.
- difficulty: "easy", "medium", or "hard".
- explanation: a brief explanation of why the correct answer is right.

Return a JSON array of skill area objects."#;

/// Recommendation prompt. Replace `{skill_results}`, `{interests}`,
/// `{personality_traits}`, `{work_environment}`, `{values}`, `{career_goals}`,
/// `{additional_info}`, `{recommendation_count}`.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Based on the following user data, generate {recommendation_count} personalized career recommendations.

SKILL ASSESSMENT RESULTS:
{skill_results}

PERSONAL PROFILE:
- Interests: {interests}
- Personality Traits: {personality_traits}
- Preferred Work Environment: {work_environment}
- Values: {values}
- Career Goals: {career_goals}
- Additional Information: {additional_info}

For each recommendation provide:
- title: the career title.
- description: a brief description of the career.
- responsibilities: key responsibilities.
- whySuitable: one sentence on why this career suits the user.
- educationPath: the typical education path for this career in India.
- salaryRange: the typical salary range for this career in India.
- growthProspects: the growth prospects for this career in India.
- keySkills: key skills to develop for this career.
- matchingSkills: the user's skills that match this career.
- matchPercentage: a number from 0 to 100.

Return a JSON array of career recommendation objects."#;

pub fn profile_options_schema() -> Value {
    object_schema(
        &[
            ("interests", string_array_schema()),
            ("personalityTraits", string_array_schema()),
            ("workEnvironments", string_array_schema()),
            ("values", string_array_schema()),
        ],
        &["interests", "personalityTraits", "workEnvironments", "values"],
    )
}

fn question_schema() -> Value {
    object_schema(
        &[
            ("id", string_schema()),
            ("question", string_schema()),
            ("options", string_array_schema()),
            ("correctAnswer", serde_json::json!({ "type": "INTEGER" })),
            ("difficulty", string_schema()),
            ("explanation", string_schema()),
        ],
        &[
            "id",
            "question",
            "options",
            "correctAnswer",
            "difficulty",
            "explanation",
        ],
    )
}

pub fn skill_areas_schema() -> Value {
    array_of(object_schema(
        &[
            ("name", string_schema()),
            ("description", string_schema()),
            ("questions", array_of(question_schema())),
        ],
        &["name", "questions"],
    ))
}

pub fn recommendations_schema() -> Value {
    array_of(object_schema(
        &[
            ("title", string_schema()),
            ("description", string_schema()),
            ("responsibilities", string_array_schema()),
            ("whySuitable", string_schema()),
            ("educationPath", string_schema()),
            ("salaryRange", string_schema()),
            ("growthProspects", string_schema()),
            ("keySkills", string_array_schema()),
            ("matchingSkills", string_array_schema()),
            ("matchPercentage", number_schema()),
        ],
        &[
            "title",
            "description",
            "responsibilities",
            "whySuitable",
            "educationPath",
            "salaryRange",
            "growthProspects",
            "keySkills",
            "matchingSkills",
            "matchPercentage",
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_schema_requires_every_field() {
        let schema = skill_areas_schema();
        let question = &schema["items"]["properties"]["questions"]["items"];
        assert_eq!(question["required"].as_array().unwrap().len(), 6);
        assert_eq!(schema["items"]["required"], serde_json::json!(["name", "questions"]));
    }

    #[test]
    fn test_recommendation_schema_requires_every_property() {
        let schema = recommendations_schema();
        let properties = schema["items"]["properties"].as_object().unwrap();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(properties.len(), required.len());
    }

    #[test]
    fn test_templates_have_placeholders() {
        assert!(QUESTIONS_PROMPT_TEMPLATE.contains("{skill_areas}"));
        for placeholder in [
            "{skill_results}",
            "{interests}",
            "{personality_traits}",
            "{work_environment}",
            "{values}",
            "{career_goals}",
            "{recommendation_count}",
        ] {
            assert!(
                RECOMMENDATIONS_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }
}
