//! Question generation: fills the seed catalog with model-written questions.
//!
//! Generated areas are matched back to the seed catalog strictly by exact name.
//! Presentation order always follows the seed catalog, never generation order.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{info, warn};

use crate::generation::prompts::{
    skill_areas_schema, CAREER_GUIDE_SYSTEM, QUESTIONS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{generate_json, GenerationRequest, LlmBackend, LlmError};
use crate::models::skill::{Question, SkillArea};

pub const QUESTIONS_PER_AREA: usize = 5;

/// One skill area as returned by the model.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSkillArea {
    pub name: String,
    // Accepted but unused: seed descriptions are authoritative
    #[allow(dead_code)]
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl GeneratedSkillArea {
    fn check(&self) -> Result<(), String> {
        let mut ids = HashSet::new();
        for question in &self.questions {
            question.check()?;
            if !ids.insert(question.id.as_str()) {
                return Err(format!(
                    "duplicate question id '{}' in area '{}'",
                    question.id, self.name
                ));
            }
        }
        Ok(())
    }
}

fn build_request(seed: &[SkillArea]) -> GenerationRequest {
    let names: Vec<&str> = seed.iter().map(|a| a.name.as_str()).collect();
    let prompt = QUESTIONS_PROMPT_TEMPLATE
        .replace("{skill_areas}", &names.join(", "))
        .replace("{questions_per_area}", &QUESTIONS_PER_AREA.to_string());
    GenerationRequest {
        system: format!("{CAREER_GUIDE_SYSTEM} {JSON_ONLY_SYSTEM}"),
        prompt,
        schema: skill_areas_schema(),
    }
}

/// Replaces each seed area's questions with those of the generated area of the
/// same name. Seed areas with no match get an empty question list; generated
/// areas with no seed counterpart are dropped. First match wins on repeats.
pub fn merge_generated(
    seed: &[SkillArea],
    mut generated: Vec<GeneratedSkillArea>,
) -> Vec<SkillArea> {
    seed.iter()
        .map(|area| {
            let questions = generated
                .iter()
                .position(|g| g.name == area.name)
                .map(|pos| std::mem::take(&mut generated[pos].questions))
                .unwrap_or_default();
            if questions.is_empty() {
                warn!("No generated questions matched skill area '{}'", area.name);
            }
            SkillArea {
                questions,
                ..area.clone()
            }
        })
        .collect()
}

async fn try_generate_questions(
    llm: &dyn LlmBackend,
    seed: &[SkillArea],
) -> Result<Vec<SkillArea>, LlmError> {
    let generated: Vec<GeneratedSkillArea> = generate_json(llm, &build_request(seed)).await?;

    // answers are keyed by question id across the whole test
    let mut seen_ids = HashSet::new();
    for area in &generated {
        area.check().map_err(LlmError::Schema)?;
        for question in &area.questions {
            if !seen_ids.insert(question.id.as_str()) {
                return Err(LlmError::Schema(format!(
                    "question id '{}' repeats across skill areas",
                    question.id
                )));
            }
        }
    }

    let seed_names: HashSet<&str> = seed.iter().map(|a| a.name.as_str()).collect();
    for area in generated.iter().filter(|g| !seed_names.contains(g.name.as_str())) {
        warn!("Dropping generated skill area '{}' with no catalog match", area.name);
    }

    Ok(merge_generated(seed, generated))
}

/// Generates questions for every seed area. Never fails: on any generation
/// error the seed catalog is returned unmodified.
pub async fn generate_questions(llm: &dyn LlmBackend, seed: &[SkillArea]) -> Vec<SkillArea> {
    match try_generate_questions(llm, seed).await {
        Ok(areas) => {
            let total: usize = areas.iter().map(|a| a.questions.len()).sum();
            info!("Generated {total} questions across {} skill areas", areas.len());
            areas
        }
        Err(e) => {
            warn!("Question generation failed, using seed catalog: {e}");
            seed.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{FailingBackend, ScriptedBackend, StaticBackend};
    use crate::models::skill::Difficulty;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("prompt {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option_index: 0,
            difficulty: Difficulty::Easy,
            explanation: String::new(),
        }
    }

    fn seed_area(name: &str, questions: Vec<Question>) -> SkillArea {
        SkillArea {
            name: name.to_string(),
            description: format!("{name} description"),
            icon: "Star".to_string(),
            questions,
        }
    }

    fn generated(name: &str, ids: &[&str]) -> GeneratedSkillArea {
        GeneratedSkillArea {
            name: name.to_string(),
            description: None,
            questions: ids.iter().map(|id| question(id)).collect(),
        }
    }

    fn question_json(id: &str, options: usize, correct: i64) -> String {
        let options: Vec<String> = (0..options).map(|i| format!("\"opt{i}\"")).collect();
        format!(
            r#"{{"id":"{id}","question":"q","options":[{}],"correctAnswer":{correct},
                "difficulty":"easy","explanation":"e"}}"#,
            options.join(",")
        )
    }

    #[test]
    fn test_merge_matches_by_name_and_drops_unknown_areas() {
        let seed = vec![
            seed_area("A", vec![question("a-seed")]),
            seed_area("B", vec![]),
            seed_area("C", vec![]),
        ];
        let merged = merge_generated(&seed, vec![generated("B", &["b1", "b2"]), generated("D", &["d1"])]);

        let names: Vec<&str> = merged.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(merged[0].questions.is_empty());
        assert_eq!(merged[1].questions.len(), 2);
        assert!(merged[2].questions.is_empty());
        assert_eq!(merged[1].description, "B description");
    }

    #[test]
    fn test_merge_follows_seed_order_not_generation_order() {
        let seed = vec![seed_area("A", vec![]), seed_area("B", vec![])];
        let merged = merge_generated(&seed, vec![generated("B", &["b1"]), generated("A", &["a1"])]);
        assert_eq!(merged[0].questions[0].id, "a1");
        assert_eq!(merged[1].questions[0].id, "b1");
    }

    #[test]
    fn test_merge_uses_first_match_for_repeated_names() {
        let seed = vec![seed_area("A", vec![])];
        let merged = merge_generated(&seed, vec![generated("A", &["first"]), generated("A", &["second"])]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].questions.len(), 1);
        assert_eq!(merged[0].questions[0].id, "first");
    }

    #[test]
    fn test_merge_name_match_is_exact() {
        let seed = vec![seed_area("Leadership", vec![])];
        let merged = merge_generated(&seed, vec![generated("leadership", &["l1"])]);
        assert!(merged[0].questions.is_empty());
    }

    #[tokio::test]
    async fn test_generate_questions_merges_valid_response() {
        let seed = vec![seed_area("Math", vec![question("seed")]), seed_area("Art", vec![])];
        let body = format!(
            r#"[{{"name":"Art","questions":[{},{}]}},{{"name":"Cooking","questions":[{}]}}]"#,
            question_json("art-1", 4, 2),
            question_json("art-2", 4, 3),
            question_json("cook-1", 4, 0)
        );
        let backend = StaticBackend::new(body);
        let areas = generate_questions(&backend, &seed).await;

        assert_eq!(areas.len(), 2);
        assert!(areas[0].questions.is_empty());
        assert_eq!(areas[1].questions.len(), 2);
        assert_eq!(areas[1].questions[1].correct_option_index, 3);
    }

    #[tokio::test]
    async fn test_prompt_lists_seed_area_names() {
        let seed = vec![seed_area("Math", vec![]), seed_area("Art", vec![])];
        let backend = ScriptedBackend::new(vec!["[]"]);
        generate_questions(&backend, &seed).await;
        let requests = backend.requests.lock().unwrap();
        assert!(requests[0].prompt.contains("Math, Art"));
        assert_eq!(requests[0].schema["type"], "ARRAY");
    }

    #[tokio::test]
    async fn test_backend_failure_returns_seed_unmodified() {
        let seed = vec![seed_area("Math", vec![question("m1")])];
        let areas = generate_questions(&FailingBackend, &seed).await;
        assert_eq!(areas, seed);
    }

    #[tokio::test]
    async fn test_wrong_option_count_falls_back_to_seed() {
        let seed = vec![seed_area("Math", vec![question("m1")])];
        let body = format!(r#"[{{"name":"Math","questions":[{}]}}]"#, question_json("x", 3, 0));
        let areas = generate_questions(&StaticBackend::new(body), &seed).await;
        assert_eq!(areas, seed);
    }

    #[tokio::test]
    async fn test_out_of_range_answer_falls_back_to_seed() {
        let seed = vec![seed_area("Math", vec![question("m1")])];
        let body = format!(r#"[{{"name":"Math","questions":[{}]}}]"#, question_json("x", 4, 4));
        let areas = generate_questions(&StaticBackend::new(body), &seed).await;
        assert_eq!(areas, seed);
    }

    #[tokio::test]
    async fn test_duplicate_ids_fall_back_to_seed() {
        let seed = vec![seed_area("Math", vec![question("m1")])];
        let body = format!(
            r#"[{{"name":"Math","questions":[{},{}]}}]"#,
            question_json("dup", 4, 0),
            question_json("dup", 4, 1)
        );
        let areas = generate_questions(&StaticBackend::new(body), &seed).await;
        assert_eq!(areas, seed);
    }

    #[tokio::test]
    async fn test_ids_repeated_across_areas_fall_back_to_seed() {
        let seed = vec![
            seed_area("Math", vec![question("m1")]),
            seed_area("Art", vec![question("a1")]),
        ];
        let body = format!(
            r#"[{{"name":"Math","questions":[{}]}},{{"name":"Art","questions":[{}]}}]"#,
            question_json("q1", 4, 0),
            question_json("q1", 4, 1)
        );
        let areas = generate_questions(&StaticBackend::new(body), &seed).await;
        assert_eq!(areas, seed);
    }

    #[tokio::test]
    async fn test_object_instead_of_array_falls_back_to_seed() {
        let seed = vec![seed_area("Math", vec![question("m1")])];
        let areas = generate_questions(&StaticBackend::new(r#"{"name":"Math"}"#), &seed).await;
        assert_eq!(areas, seed);
    }
}
