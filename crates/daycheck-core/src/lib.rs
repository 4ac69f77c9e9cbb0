//! # daycheck Core Library
//!
//! This library provides the core logic for the daycheck daily check-in:
//! a short, time-of-day dependent sequence of mood and wellbeing questions
//! with single-choice answers and conditional follow-ups. The `daycheck`
//! CLI is a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: Immutable question table, built-in or loaded from TOML
//! - **Time**: Time-of-day buckets and greetings from the local clock
//! - **Flow**: The check-in state machine; emits events as it moves
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`QuestionCatalog`]: The question table a session filters
//! - [`CheckinFlow`]: One check-in session
//! - [`CheckinEvent`]: What each action did, including the final answers
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod flow;
pub mod storage;
pub mod time;

pub use catalog::{
    FollowUp, Icon, OptionValue, Prompt, Question, QuestionCatalog, QuestionKind,
    QuestionOption, Trigger,
};
pub use error::{CatalogError, ConfigError, CoreError, FlowError, ValidationError};
pub use events::CheckinEvent;
pub use flow::{AnswerMap, CheckinFlow, FlowProgress, FlowStatus};
pub use storage::{Config, DisplayConfig};
pub use time::TimeOfDay;
