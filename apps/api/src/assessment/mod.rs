// Skills assessment: answer capture, the progression state machine, the
// per-question countdown, and scoring.

use thiserror::Error;

pub mod answers;
pub mod engine;
pub mod handlers;
pub mod scoring;
pub mod timer;

/// Rejected assessment actions. None of these change engine state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("No assessment has been started for this session")]
    NotStarted,

    #[error("No question is awaiting an answer")]
    NotPresenting,

    #[error("Select an option before submitting")]
    NoSelection,

    #[error("Option {option} is out of range for a question with {available} options")]
    OptionOutOfRange { option: usize, available: usize },

    #[error("Submit the current question before moving on")]
    NotSubmitted,

    #[error("The assessment is already complete")]
    AlreadyComplete,

    #[error("Question '{0}' has already been answered")]
    AlreadyAnswered(String),
}
