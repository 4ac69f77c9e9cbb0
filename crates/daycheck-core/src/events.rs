use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::OptionValue;
use crate::flow::AnswerMap;

/// Every state change of a check-in session produces an Event.
/// The presentation layer renders them; completion and cancellation are
/// how the final answers leave the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckinEvent {
    OptionSelected {
        question_id: String,
        value: OptionValue,
        /// Id of the follow-up this selection activated.
        follow_up: Option<String>,
        at: DateTime<Utc>,
    },
    /// Moved to the next main question (after a follow-up, if one was shown).
    Advanced {
        position: usize,
        question_id: String,
        at: DateTime<Utc>,
    },
    /// Continue on a question whose follow-up is due but not on screen.
    /// Nothing changed.
    FollowUpPending {
        question_id: String,
        at: DateTime<Utc>,
    },
    /// Every question answered.
    Completed {
        session_id: String,
        answers: AnswerMap,
        at: DateTime<Utc>,
    },
    /// Session abandoned. Answers were discarded.
    Closed {
        session_id: String,
        discarded_answers: usize,
        at: DateTime<Utc>,
    },
}

impl CheckinEvent {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            CheckinEvent::OptionSelected { at, .. }
            | CheckinEvent::Advanced { at, .. }
            | CheckinEvent::FollowUpPending { at, .. }
            | CheckinEvent::Completed { at, .. }
            | CheckinEvent::Closed { at, .. } => *at,
        }
    }
}
