use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::AssessmentError;
use crate::models::result::Answer;

/// Question id → captured answer. Write-once per question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    entries: BTreeMap<String, Answer>,
}

impl AnswerRecord {
    /// Records an answer. Fails if the question already has one; existing
    /// entries are never overwritten.
    pub fn record(&mut self, question_id: &str, answer: Answer) -> Result<(), AssessmentError> {
        if self.entries.contains_key(question_id) {
            return Err(AssessmentError::AlreadyAnswered(question_id.to_string()));
        }
        self.entries.insert(question_id.to_string(), answer);
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<Answer> {
        self.entries.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_write_is_rejected_and_first_kept() {
        let mut answers = AnswerRecord::default();
        answers.record("q1", Answer::Selected(2)).unwrap();
        let err = answers.record("q1", Answer::Selected(0)).unwrap_err();
        assert!(matches!(err, AssessmentError::AlreadyAnswered(id) if id == "q1"));
        assert_eq!(answers.get("q1"), Some(Answer::Selected(2)));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_serializes_as_id_to_index_map() {
        let mut answers = AnswerRecord::default();
        answers.record("b", Answer::TimedOut).unwrap();
        answers.record("a", Answer::Selected(1)).unwrap();
        assert_eq!(serde_json::to_string(&answers).unwrap(), r#"{"a":1,"b":-1}"#);
    }
}
