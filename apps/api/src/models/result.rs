use serde::{Deserialize, Serialize};

/// Wire value recorded when a question was submitted without a selection.
pub const NO_ANSWER: i32 = -1;

/// A captured answer. Serialized as the selected option index, or `-1` when
/// the countdown expired without a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Answer {
    Selected(usize),
    TimedOut,
}

impl Answer {
    pub fn is_correct_for(&self, correct_option_index: usize) -> bool {
        matches!(self, Answer::Selected(i) if *i == correct_option_index)
    }
}

impl From<Answer> for i32 {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Selected(i) => i as i32,
            Answer::TimedOut => NO_ANSWER,
        }
    }
}

impl TryFrom<i32> for Answer {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            NO_ANSWER => Ok(Answer::TimedOut),
            v if v >= 0 => Ok(Answer::Selected(v as usize)),
            v => Err(format!("invalid answer value {v}")),
        }
    }
}

/// Ordinal classification derived from a percentage score.
/// Variant order is the ordering: Beginner < Intermediate < Advanced < Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Inclusive lower bounds, evaluated highest first.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ProficiencyLevel::Expert
        } else if percentage >= 75.0 {
            ProficiencyLevel::Advanced
        } else if percentage >= 60.0 {
            ProficiencyLevel::Intermediate
        } else {
            ProficiencyLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub area: String,
    pub score: u32,
    pub max_score: u32,
    /// 0.0 to 100.0
    pub percentage: f64,
    pub level: ProficiencyLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_serializes_as_index_or_sentinel() {
        assert_eq!(serde_json::to_string(&Answer::Selected(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Answer::TimedOut).unwrap(), "-1");
    }

    #[test]
    fn test_answer_rejects_other_negative_values() {
        assert!(serde_json::from_str::<Answer>("-2").is_err());
        assert_eq!(serde_json::from_str::<Answer>("-1").unwrap(), Answer::TimedOut);
    }

    #[test]
    fn test_timed_out_is_never_correct() {
        for i in 0..4 {
            assert!(!Answer::TimedOut.is_correct_for(i));
        }
        assert!(Answer::Selected(3).is_correct_for(3));
    }

    #[test]
    fn test_level_thresholds_are_inclusive() {
        assert_eq!(ProficiencyLevel::from_percentage(90.0), ProficiencyLevel::Expert);
        assert_eq!(ProficiencyLevel::from_percentage(89.99), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_percentage(75.0), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_percentage(60.0), ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::from_percentage(59.9), ProficiencyLevel::Beginner);
        assert_eq!(ProficiencyLevel::from_percentage(0.0), ProficiencyLevel::Beginner);
    }

    #[test]
    fn test_level_is_monotonic_in_percentage() {
        let mut previous = ProficiencyLevel::Beginner;
        for tenth in 0..=1000 {
            let level = ProficiencyLevel::from_percentage(tenth as f64 / 10.0);
            assert!(level >= previous, "level dropped at {}", tenth as f64 / 10.0);
            previous = level;
        }
        assert_eq!(previous, ProficiencyLevel::Expert);
    }
}
