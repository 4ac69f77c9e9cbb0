//! Question and option definitions.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::time::TimeOfDay;

/// Answer payload carried by an option.
///
/// Scales use numbers, enumerations such as stress level or yes/no use
/// symbols. Serialized untagged: `4`, `"balanced"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Symbol(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Symbol(s) => write!(f, "\"{s}\""),
        }
    }
}

impl OptionValue {
    /// Integers parse as `Number`, anything else is a `Symbol`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => OptionValue::Number(n),
            Err(_) => OptionValue::Symbol(s.to_string()),
        }
    }
}

impl FromStr for OptionValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(i64::from(n))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Symbol(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Symbol(s)
    }
}

/// Glyph shown next to an option, from most drained to most energised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Drained,
    Low,
    Neutral,
    Positive,
    Energised,
}

impl Icon {
    /// Terminal stand-in for the artwork.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Drained => "😫",
            Icon::Low => "🙁",
            Icon::Neutral => "😐",
            Icon::Positive => "🙂",
            Icon::Energised => "😄",
        }
    }
}

/// Rendering hint. Carries no flow logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mood,
    Scale,
    Number,
    YesNo,
}

/// A selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub icon: Icon,
    pub label: String,
    pub value: OptionValue,
}

impl QuestionOption {
    pub fn new(icon: Icon, label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            icon,
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The fields every displayed question has.
///
/// Follow-up questions are bare prompts, so a follow-up cannot nest another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Answer-map key. Unique across the catalog.
    pub id: String,
    pub text: String,
    pub time_of_day: TimeOfDay,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Display order is significant.
    pub options: Vec<QuestionOption>,
}

impl Prompt {
    pub fn option(&self, value: &OptionValue) -> Option<&QuestionOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    pub fn has_option(&self, value: &OptionValue) -> bool {
        self.option(value).is_some()
    }
}

/// Condition under which a follow-up is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Parent question id. When set it must equal the parent's id to fire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    pub value: OptionValue,
}

impl Trigger {
    pub fn matches(&self, question_id: &str, value: &OptionValue) -> bool {
        let id_ok = self
            .question_id
            .as_deref()
            .map_or(true, |id| id == question_id);
        id_ok && &self.value == value
    }
}

/// A conditional extra question shown right after its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub condition: Trigger,
    pub question: Prompt,
}

/// A main catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(flatten)]
    pub prompt: Prompt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<FollowUp>,
}

impl Question {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            follow_up: None,
        }
    }

    pub fn with_follow_up(mut self, condition: Trigger, question: Prompt) -> Self {
        self.follow_up = Some(FollowUp {
            condition,
            question,
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.prompt.id
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.prompt.time_of_day
    }

    /// The follow-up this answer unlocks, if any.
    pub fn triggered_follow_up(&self, value: &OptionValue) -> Option<&Prompt> {
        self.follow_up
            .as_ref()
            .filter(|f| f.condition.matches(&self.prompt.id, value))
            .map(|f| &f.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(id: &str) -> Prompt {
        Prompt {
            id: id.to_string(),
            text: "?".to_string(),
            time_of_day: TimeOfDay::Evening,
            kind: QuestionKind::YesNo,
            options: vec![
                QuestionOption::new(Icon::Energised, "Yes", "yes"),
                QuestionOption::new(Icon::Drained, "No", "no"),
            ],
        }
    }

    #[test]
    fn test_option_value_parse() {
        assert_eq!("3".parse::<OptionValue>().unwrap(), OptionValue::Number(3));
        assert_eq!("-1".parse::<OptionValue>().unwrap(), OptionValue::Number(-1));
        assert_eq!(
            "balanced".parse::<OptionValue>().unwrap(),
            OptionValue::Symbol("balanced".to_string())
        );
    }

    #[test]
    fn test_number_never_equals_symbol() {
        assert_ne!(OptionValue::Number(3), OptionValue::Symbol("3".to_string()));
    }

    #[test]
    fn test_option_value_untagged_json() {
        let values = vec![OptionValue::Number(4), OptionValue::from("yes")];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[4,"yes"]"#);
        let back: Vec<OptionValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_trigger_checks_value_and_named_id() {
        let t = Trigger {
            question_id: Some("breaks_taken".to_string()),
            value: "yes".into(),
        };
        assert!(t.matches("breaks_taken", &"yes".into()));
        assert!(!t.matches("breaks_taken", &"no".into()));
        assert!(!t.matches("leisure_minutes", &"yes".into()));
    }

    #[test]
    fn test_trigger_without_id_checks_value_only() {
        let t = Trigger {
            question_id: None,
            value: 3.into(),
        };
        assert!(t.matches("anything", &OptionValue::Number(3)));
        assert!(!t.matches("anything", &OptionValue::Number(4)));
    }

    #[test]
    fn test_triggered_follow_up() {
        let q = Question::new(yes_no("breaks_taken")).with_follow_up(
            Trigger {
                question_id: Some("breaks_taken".to_string()),
                value: "yes".into(),
            },
            yes_no("break_count"),
        );
        assert_eq!(
            q.triggered_follow_up(&"yes".into()).map(|p| p.id.as_str()),
            Some("break_count")
        );
        assert!(q.triggered_follow_up(&"no".into()).is_none());
        assert!(Question::new(yes_no("x"))
            .triggered_follow_up(&"yes".into())
            .is_none());
    }

    #[test]
    fn test_prompt_option_lookup() {
        let p = yes_no("q");
        assert_eq!(p.option(&"no".into()).map(|o| o.label.as_str()), Some("No"));
        assert!(!p.has_option(&OptionValue::Number(1)));
    }
}
