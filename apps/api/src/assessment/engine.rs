//! Assessment Engine: sequential, single-pass traversal of every question.
//!
//! States: Presenting(area, question) → Submitted(area, question) → (advance)
//! → next Presenting | Complete. The countdown only runs while Presenting;
//! reaching zero submits the provisional selection, or the timed-out sentinel.
//!
//! The engine is clock-free: the owner drives it with `tick()` once per
//! time unit (see `assessment::timer`).

use serde::Serialize;

use crate::assessment::answers::AnswerRecord;
use crate::assessment::scoring::score;
use crate::assessment::AssessmentError;
use crate::models::result::{Answer, SkillResult};
use crate::models::skill::{Difficulty, Question, SkillArea};

pub const DEFAULT_QUESTION_TIME_LIMIT_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EngineState {
    Presenting { area: usize, question: usize },
    /// Answer recorded, explanation shown, countdown halted.
    Submitted { area: usize, question: usize },
    Complete,
}

/// What was recorded for a question at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub question_id: String,
    pub answer: Answer,
    pub correct: bool,
    pub timed_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not presenting, or the tick belonged to an earlier question.
    Ignored,
    Counting { time_left: u32 },
    AutoSubmitted(Submission),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progression {
    Next { area: usize, question: usize },
    Complete(Vec<SkillResult>),
}

#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    areas: Vec<SkillArea>,
    state: EngineState,
    selection: Option<usize>,
    time_limit: u32,
    time_left: u32,
    answers: AnswerRecord,
    last_submission: Option<Submission>,
    /// Bumped on every entry into Presenting; ties countdown ticks to one question.
    epoch: u64,
    results: Option<Vec<SkillResult>>,
}

impl AssessmentEngine {
    /// Starts at the first question of the first non-empty area. A catalog
    /// without any questions starts (and is scored) as Complete.
    pub fn new(areas: Vec<SkillArea>, time_limit: u32) -> Self {
        let time_limit = time_limit.max(1);
        let mut engine = Self {
            areas,
            state: EngineState::Complete,
            selection: None,
            time_limit,
            time_left: 0,
            answers: AnswerRecord::default(),
            last_submission: None,
            epoch: 0,
            results: None,
        };
        match engine.first_question_from(0) {
            Some((area, question)) => engine.enter_presenting(area, question),
            None => {
                engine.finish();
            }
        }
        engine
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == EngineState::Complete
    }

    /// The current question's epoch while Presenting, `None` otherwise.
    pub fn presenting_epoch(&self) -> Option<u64> {
        match self.state {
            EngineState::Presenting { .. } => Some(self.epoch),
            _ => None,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn areas(&self) -> &[SkillArea] {
        &self.areas
    }

    /// Final results; present only once Complete.
    pub fn results(&self) -> Option<&[SkillResult]> {
        self.results.as_deref()
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    pub fn total_questions(&self) -> usize {
        self.areas.iter().map(|a| a.questions.len()).sum()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    fn position(&self) -> Option<(usize, usize)> {
        match self.state {
            EngineState::Presenting { area, question } | EngineState::Submitted { area, question } => {
                Some((area, question))
            }
            EngineState::Complete => None,
        }
    }

    pub fn current_area(&self) -> Option<&SkillArea> {
        self.position().map(|(area, _)| &self.areas[area])
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.position()
            .map(|(area, question)| &self.areas[area].questions[question])
    }

    /// Records a provisional selection. Replaceable until submission.
    pub fn select(&mut self, option: usize) -> Result<(), AssessmentError> {
        let question = match self.state {
            EngineState::Presenting { area, question } => &self.areas[area].questions[question],
            EngineState::Submitted { .. } => return Err(AssessmentError::NotPresenting),
            EngineState::Complete => return Err(AssessmentError::AlreadyComplete),
        };
        if option >= question.options.len() {
            return Err(AssessmentError::OptionOutOfRange {
                option,
                available: question.options.len(),
            });
        }
        self.selection = Some(option);
        Ok(())
    }

    /// Explicit submission; requires a selection.
    pub fn submit(&mut self) -> Result<Submission, AssessmentError> {
        match self.state {
            EngineState::Presenting { .. } => {}
            EngineState::Submitted { .. } => return Err(AssessmentError::NotPresenting),
            EngineState::Complete => return Err(AssessmentError::AlreadyComplete),
        }
        let option = self.selection.ok_or(AssessmentError::NoSelection)?;
        self.commit(Answer::Selected(option), false)
    }

    /// Advances the countdown by one unit. At zero, submits the provisional
    /// selection if there is one, else the timed-out sentinel.
    pub fn tick(&mut self) -> TickOutcome {
        if !matches!(self.state, EngineState::Presenting { .. }) {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickOutcome::Counting {
                time_left: self.time_left,
            };
        }
        let answer = self.selection.map(Answer::Selected).unwrap_or(Answer::TimedOut);
        match self.commit(answer, true) {
            Ok(submission) => TickOutcome::AutoSubmitted(submission),
            Err(_) => TickOutcome::Ignored,
        }
    }

    /// Like `tick`, but only for the question that was presenting at `epoch`.
    pub fn tick_for(&mut self, epoch: u64) -> TickOutcome {
        if self.presenting_epoch() != Some(epoch) {
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Moves past a submitted question: next question in the area, else the
    /// first question of the next non-empty area, else Complete (scored once).
    pub fn advance(&mut self) -> Result<Progression, AssessmentError> {
        let (area, question) = match self.state {
            EngineState::Submitted { area, question } => (area, question),
            EngineState::Presenting { .. } => return Err(AssessmentError::NotSubmitted),
            EngineState::Complete => return Err(AssessmentError::AlreadyComplete),
        };
        match self.next_position(area, question) {
            Some((area, question)) => {
                self.enter_presenting(area, question);
                Ok(Progression::Next { area, question })
            }
            None => Ok(Progression::Complete(self.finish())),
        }
    }

    /// Backward navigation is not supported; the state is returned unchanged.
    pub fn previous(&self) -> EngineState {
        self.state
    }

    fn next_position(&self, area: usize, question: usize) -> Option<(usize, usize)> {
        if question + 1 < self.areas[area].questions.len() {
            Some((area, question + 1))
        } else {
            self.first_question_from(area + 1)
        }
    }

    fn first_question_from(&self, start: usize) -> Option<(usize, usize)> {
        self.areas
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, a)| !a.questions.is_empty())
            .map(|(i, _)| (i, 0))
    }

    fn enter_presenting(&mut self, area: usize, question: usize) {
        debug_assert!(!self
            .answers
            .contains(&self.areas[area].questions[question].id));
        self.state = EngineState::Presenting { area, question };
        self.selection = None;
        self.time_left = self.time_limit;
        self.last_submission = None;
        self.epoch += 1;
    }

    fn commit(&mut self, answer: Answer, timed_out: bool) -> Result<Submission, AssessmentError> {
        let (area, question) = match self.state {
            EngineState::Presenting { area, question } => (area, question),
            _ => return Err(AssessmentError::NotPresenting),
        };
        let current = &self.areas[area].questions[question];
        let submission = Submission {
            question_id: current.id.clone(),
            answer,
            correct: answer.is_correct_for(current.correct_option_index),
            timed_out,
        };
        self.answers.record(&submission.question_id, answer)?;
        self.state = EngineState::Submitted { area, question };
        self.last_submission = Some(submission.clone());
        Ok(submission)
    }

    fn finish(&mut self) -> Vec<SkillResult> {
        self.state = EngineState::Complete;
        self.selection = None;
        self.time_left = 0;
        self.results
            .get_or_insert_with(|| score(&self.areas, &self.answers))
            .clone()
    }

    /// Snapshot for presentation. The correct answer and explanation are only
    /// revealed once the current question has been submitted.
    pub fn view(&self) -> AssessmentView {
        let submitted = matches!(self.state, EngineState::Submitted { .. });
        let area = self.position().map(|(area, question)| {
            let current = &self.areas[area];
            AreaProgress {
                name: current.name.clone(),
                description: current.description.clone(),
                icon: current.icon.clone(),
                question_number: question + 1,
                question_count: current.questions.len(),
            }
        });
        let question = self.current_question().map(|q| QuestionView {
            id: q.id.clone(),
            prompt: q.prompt.clone(),
            options: q.options.clone(),
            difficulty: q.difficulty,
            correct_option_index: submitted.then_some(q.correct_option_index),
            explanation: submitted.then(|| q.explanation.clone()),
        });
        let is_last_question = self
            .position()
            .map(|(area, question)| self.next_position(area, question).is_none())
            .unwrap_or(false);

        AssessmentView {
            state: self.state,
            answered: self.answered(),
            total: self.total_questions(),
            time_left: self.time_left,
            time_limit: self.time_limit,
            area,
            question,
            selection: self.selection,
            outcome: self.last_submission.clone(),
            is_last_question,
            results: self.results.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaProgress {
    pub name: String,
    pub description: String,
    pub icon: String,
    /// 1-based position within the area.
    pub question_number: usize,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub state: EngineState,
    pub answered: usize,
    pub total: usize,
    pub time_left: u32,
    pub time_limit: u32,
    pub area: Option<AreaProgress>,
    pub question: Option<QuestionView>,
    pub selection: Option<usize>,
    pub outcome: Option<Submission>,
    pub is_last_question: bool,
    pub results: Option<Vec<SkillResult>>,
}
