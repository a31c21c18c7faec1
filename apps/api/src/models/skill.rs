use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Easy")]
    Easy,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Hard")]
    Hard,
}

/// A single multiple-choice question.
///
/// Field names on the wire follow the generation contract (`question`,
/// `correctAnswer`) so model output decodes straight into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_option_index: usize,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl Question {
    /// Checks the structural constraints serde cannot express.
    pub fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("question id is empty".to_string());
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "question '{}' has {} options, expected {OPTIONS_PER_QUESTION}",
                self.id,
                self.options.len()
            ));
        }
        if self.correct_option_index >= self.options.len() {
            return Err(format!(
                "question '{}' has correct answer index {} out of range",
                self.id, self.correct_option_index
            ));
        }
        Ok(())
    }
}

/// A named category of the assessment with its own ordered question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillArea {
    pub name: String,
    pub description: String,
    /// Display hint carried from the seed catalog.
    pub icon: String,
    pub questions: Vec<Question>,
}

impl SkillArea {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Catalog entry without questions, for listing areas before a test starts.
#[derive(Debug, Clone, Serialize)]
pub struct SkillAreaSummary {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub question_count: usize,
}

impl From<&SkillArea> for SkillAreaSummary {
    fn from(area: &SkillArea) -> Self {
        Self {
            name: area.name.clone(),
            description: area.description.clone(),
            icon: area.icon.clone(),
            question_count: area.question_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct: usize) -> Question {
        Question {
            id: "q1".to_string(),
            prompt: "2 + 2?".to_string(),
            options: (0..options).map(|i| i.to_string()).collect(),
            correct_option_index: correct,
            difficulty: Difficulty::Easy,
            explanation: "arithmetic".to_string(),
        }
    }

    #[test]
    fn test_question_decodes_from_generation_wire_names() {
        let json = r#"{
            "id": "math-1",
            "question": "What is 3 * 3?",
            "options": ["6", "9", "12", "3"],
            "correctAnswer": 1,
            "difficulty": "medium",
            "explanation": "3 * 3 = 9"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.prompt, "What is 3 * 3?");
        assert_eq!(q.correct_option_index, 1);
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert!(q.check().is_ok());
    }

    #[test]
    fn test_difficulty_accepts_capitalized_alias() {
        let d: Difficulty = serde_json::from_str(r#""Hard""#).unwrap();
        assert_eq!(d, Difficulty::Hard);
    }

    #[test]
    fn test_check_rejects_wrong_option_count() {
        assert!(question(3, 0).check().is_err());
        assert!(question(5, 0).check().is_err());
    }

    #[test]
    fn test_check_rejects_out_of_range_correct_index() {
        assert!(question(4, 4).check().is_err());
        assert!(question(4, 3).check().is_ok());
    }

    #[test]
    fn test_negative_correct_answer_fails_decode() {
        let json = r#"{"id":"x","question":"?","options":["a","b","c","d"],
            "correctAnswer":-1,"difficulty":"easy","explanation":""}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
