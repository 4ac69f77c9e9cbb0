//! Check-in flow engine.
//!
//! A session walks the catalog questions for one time-of-day bucket. The
//! caller drives it with discrete user actions; nothing runs in the
//! background.
//!
//! ## State Transitions
//!
//! ```text
//! start -> [select_option* -> advance]* -> Completed
//!                 |
//!                 +-> follow-up shown -> [select_option* -> advance]
//!
//! close (any time) -> Closed
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = QuestionCatalog::builtin();
//! let mut flow = CheckinFlow::start(&catalog, TimeOfDay::now());
//! while let Some(question) = flow.current_question() {
//!     let value = ask_user(question);
//!     flow.select_option(&value)?;
//!     if let CheckinEvent::Completed { answers, .. } = flow.advance()? {
//!         submit(answers);
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerMap;
use crate::catalog::{OptionValue, Prompt, Question, QuestionCatalog};
use crate::error::FlowError;
use crate::events::CheckinEvent;
use crate::time::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    /// A question is on screen.
    InProgress,
    /// Every question answered; answers were emitted.
    Finished,
    /// No questions for this bucket. Nothing to show.
    Empty,
}

/// Progress information for rendering ("2 OF 4", "50%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowProgress {
    /// 1-based index of the current main question.
    pub current: usize,
    /// Main questions in this session. Follow-ups are not counted.
    pub total: usize,
    pub percent: f64,
    pub answered: usize,
    pub on_follow_up: bool,
    pub is_finished: bool,
}

/// One check-in session.
#[derive(Debug, Clone)]
pub struct CheckinFlow {
    id: String,
    started_at: DateTime<Utc>,
    time_of_day: TimeOfDay,
    subsequence: Vec<Question>,
    position: usize,
    active_follow_up: Option<Prompt>,
    answers: AnswerMap,
    finished: bool,
}

impl CheckinFlow {
    /// Start a session with the catalog questions for `time_of_day`.
    ///
    /// A bucket without questions yields an empty session whose
    /// `current_question()` is `None` from the start.
    pub fn start(catalog: &QuestionCatalog, time_of_day: TimeOfDay) -> Self {
        let subsequence: Vec<Question> = catalog.for_time_of_day(time_of_day).cloned().collect();
        let flow = Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            time_of_day,
            subsequence,
            position: 0,
            active_follow_up: None,
            answers: AnswerMap::new(),
            finished: false,
        };
        tracing::info!(
            session_id = %flow.id,
            time_of_day = %time_of_day,
            questions = flow.subsequence.len(),
            "check-in started"
        );
        flow
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Main questions of this session, in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.subsequence
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn active_follow_up(&self) -> Option<&Prompt> {
        self.active_follow_up.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Value currently selected for a question.
    pub fn selected(&self, question_id: &str) -> Option<&OptionValue> {
        self.answers.get(question_id)
    }

    pub fn status(&self) -> FlowStatus {
        if self.subsequence.is_empty() {
            FlowStatus::Empty
        } else if self.finished {
            FlowStatus::Finished
        } else {
            FlowStatus::InProgress
        }
    }

    /// The question on screen: the active follow-up, else the main question
    /// at the current position. `None` once finished or when empty.
    pub fn current_question(&self) -> Option<&Prompt> {
        if self.finished {
            return None;
        }
        self.active_follow_up
            .as_ref()
            .or_else(|| self.subsequence.get(self.position).map(|q| &q.prompt))
    }

    /// Percentage through the main questions, 0 for an empty session.
    pub fn progress(&self) -> f64 {
        let total = self.subsequence.len();
        if total == 0 {
            return 0.0;
        }
        (self.position + 1) as f64 / total as f64 * 100.0
    }

    pub fn progress_info(&self) -> FlowProgress {
        let total = self.subsequence.len();
        FlowProgress {
            current: if total == 0 { 0 } else { self.position + 1 },
            total,
            percent: self.progress(),
            answered: self.answers.len(),
            on_follow_up: self.active_follow_up.is_some(),
            is_finished: self.finished,
        }
    }

    /// True on the last main question with no follow-up showing; the next
    /// successful `advance` completes the session unless a follow-up fires.
    pub fn is_last_step(&self) -> bool {
        !self.finished
            && self.active_follow_up.is_none()
            && self.position + 1 == self.subsequence.len()
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Record `value` for the question on screen.
    ///
    /// If the question is a main question whose follow-up trigger matches,
    /// the follow-up becomes the question on screen. Position is unchanged.
    pub fn select_option(&mut self, value: &OptionValue) -> Result<CheckinEvent, FlowError> {
        let current = self.current_question().ok_or(FlowError::NoActiveQuestion)?;
        if !current.has_option(value) {
            return Err(FlowError::InvalidOption {
                question_id: current.id.clone(),
                value: value.clone(),
            });
        }
        let question_id = current.id.clone();
        self.answers.insert(question_id.clone(), value.clone());

        let mut follow_up = None;
        if self.active_follow_up.is_none() {
            if let Some(prompt) = self
                .subsequence
                .get(self.position)
                .and_then(|q| q.triggered_follow_up(value))
            {
                follow_up = Some(prompt.id.clone());
                self.active_follow_up = Some(prompt.clone());
            }
        }

        tracing::debug!(
            session_id = %self.id,
            question = %question_id,
            value = %value,
            follow_up = ?follow_up,
            "option selected"
        );

        Ok(CheckinEvent::OptionSelected {
            question_id,
            value: value.clone(),
            follow_up,
            at: Utc::now(),
        })
    }

    /// Continue past the question on screen.
    ///
    /// Fails with `MissingAnswer` (state unchanged) until an option is
    /// selected. After a follow-up, moves to the next main question. On the
    /// last question, completes the session and emits the answers.
    pub fn advance(&mut self) -> Result<CheckinEvent, FlowError> {
        let current = self.current_question().ok_or(FlowError::NoActiveQuestion)?;
        let question_id = current.id.clone();
        let Some(answer) = self.answers.get(&question_id).cloned() else {
            return Err(FlowError::MissingAnswer { question_id });
        };

        if self.active_follow_up.take().is_some() {
            return Ok(self.step_forward());
        }

        let follow_up_due = self
            .subsequence
            .get(self.position)
            .and_then(|q| q.triggered_follow_up(&answer))
            .is_some();
        if follow_up_due {
            // Only reachable if the follow-up was never activated; hold position.
            tracing::debug!(session_id = %self.id, question = %question_id, "follow-up pending");
            return Ok(CheckinEvent::FollowUpPending {
                question_id,
                at: Utc::now(),
            });
        }

        Ok(self.step_forward())
    }

    /// Abandon the session. Answers are dropped with it.
    pub fn close(self) -> CheckinEvent {
        tracing::info!(
            session_id = %self.id,
            position = self.position,
            discarded = self.answers.len(),
            "check-in closed"
        );
        CheckinEvent::Closed {
            session_id: self.id,
            discarded_answers: self.answers.len(),
            at: Utc::now(),
        }
    }

    fn step_forward(&mut self) -> CheckinEvent {
        if self.position + 1 < self.subsequence.len() {
            self.position += 1;
            let question_id = self.subsequence[self.position].id().to_string();
            tracing::debug!(
                session_id = %self.id,
                position = self.position,
                question = %question_id,
                "advanced"
            );
            CheckinEvent::Advanced {
                position: self.position,
                question_id,
                at: Utc::now(),
            }
        } else {
            self.finished = true;
            tracing::info!(
                session_id = %self.id,
                answers = self.answers.len(),
                "check-in completed"
            );
            CheckinEvent::Completed {
                session_id: self.id.clone(),
                answers: self.answers.clone(),
                at: Utc::now(),
            }
        }
    }
}
