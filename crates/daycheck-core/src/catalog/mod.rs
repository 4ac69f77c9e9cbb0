//! Question catalog.
//!
//! The catalog is an immutable, ordered table of questions. It is built once
//! (either the shipped set or a TOML file) and handed to each check-in
//! session; sessions only read from it.
//!
//! ## TOML format
//!
//! ```toml
//! [[questions]]
//! id = "breaks_taken"
//! text = "Did you take enough breaks?"
//! time_of_day = "evening"
//! type = "yesno"
//! options = [
//!     { icon = "Energised", label = "Yes", value = "yes" },
//!     { icon = "Drained", label = "No", value = "no" },
//! ]
//!
//! [questions.follow_up.condition]
//! question_id = "breaks_taken"
//! value = "yes"
//!
//! [questions.follow_up.question]
//! id = "break_count"
//! text = "How many breaks did you take?"
//! time_of_day = "evening"
//! type = "number"
//! options = [{ icon = "Neutral", label = "A few", value = 3 }]
//! ```

mod builtin;
mod question;

pub use question::{
    FollowUp, Icon, OptionValue, Prompt, Question, QuestionKind, QuestionOption, Trigger,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;
use crate::time::TimeOfDay;

/// Ordered, validated set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting duplicate ids, empty option lists, and
    /// duplicate option values.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();

        for question in &questions {
            validate_prompt(&question.prompt, &mut ids)?;

            if let Some(follow_up) = &question.follow_up {
                validate_prompt(&follow_up.question, &mut ids)?;

                if let Some(parent) = follow_up.condition.question_id.as_deref() {
                    if parent != question.id() {
                        tracing::warn!(
                            question = question.id(),
                            trigger_question = parent,
                            follow_up = %follow_up.question.id,
                            "follow-up trigger names a different question and will never fire"
                        );
                    }
                }
                if !question.prompt.has_option(&follow_up.condition.value) {
                    tracing::warn!(
                        question = question.id(),
                        value = %follow_up.condition.value,
                        "follow-up trigger value is not one of the question's options"
                    );
                }
            }
        }

        Ok(Self { questions })
    }

    /// The shipped question set.
    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.questions)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), questions = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All questions in catalog order.
    pub fn list(&self) -> &[Question] {
        &self.questions
    }

    /// Questions for one bucket, in catalog order.
    pub fn for_time_of_day(&self, time_of_day: TimeOfDay) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.time_of_day() == time_of_day)
    }

    /// Look up a main or follow-up question by id.
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.questions.iter().find_map(|q| {
            if q.id() == id {
                Some(&q.prompt)
            } else {
                q.follow_up
                    .as_ref()
                    .map(|f| &f.question)
                    .filter(|p| p.id == id)
            }
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_prompt<'a>(prompt: &'a Prompt, ids: &mut HashSet<&'a str>) -> Result<(), CatalogError> {
    if !ids.insert(prompt.id.as_str()) {
        return Err(CatalogError::DuplicateQuestionId(prompt.id.clone()));
    }
    if prompt.options.is_empty() {
        return Err(CatalogError::NoOptions(prompt.id.clone()));
    }
    let mut values = HashSet::new();
    for option in &prompt.options {
        if !values.insert(&option.value) {
            return Err(CatalogError::DuplicateOptionValue {
                question_id: prompt.id.clone(),
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(catalog: &QuestionCatalog, t: TimeOfDay) -> Vec<&str> {
        catalog.for_time_of_day(t).map(|q| q.id()).collect()
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = QuestionCatalog::builtin();
        let rebuilt = QuestionCatalog::new(builtin.list().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(builtin.len(), 11);
    }

    #[test]
    fn test_builtin_buckets() {
        let catalog = QuestionCatalog::builtin();
        assert_eq!(
            ids(&catalog, TimeOfDay::Morning),
            vec!["sleep_quality", "hours_sleep", "morning_energy", "morning_mood"]
        );
        assert_eq!(
            ids(&catalog, TimeOfDay::Afternoon),
            vec!["afternoon_mood", "productivity"]
        );
        assert_eq!(
            ids(&catalog, TimeOfDay::Evening),
            vec![
                "evening_mood",
                "satisfaction",
                "breaks_taken",
                "leisure_minutes",
                "overall_balance"
            ]
        );
        assert!(ids(&catalog, TimeOfDay::Night).is_empty());
    }

    #[test]
    fn test_builtin_follow_ups() {
        let catalog = QuestionCatalog::builtin();
        let with_follow_up: Vec<(&str, &str)> = catalog
            .list()
            .iter()
            .filter_map(|q| q.follow_up.as_ref().map(|f| (q.id(), f.question.id.as_str())))
            .collect();
        assert_eq!(
            with_follow_up,
            vec![
                ("morning_mood", "morning_stress"),
                ("afternoon_mood", "afternoon_stress"),
                ("evening_mood", "evening_stress"),
                ("breaks_taken", "break_count"),
            ]
        );
    }

    #[test]
    fn test_get_finds_follow_ups() {
        let catalog = QuestionCatalog::builtin();
        assert_eq!(catalog.get("hours_sleep").unwrap().options.len(), 5);
        let stress = catalog.get("morning_stress").unwrap();
        assert_eq!(stress.options[2].value, OptionValue::from("balanced"));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut questions = QuestionCatalog::builtin().list().to_vec();
        questions.push(questions[0].clone());
        let err = QuestionCatalog::new(questions).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuestionId(id) if id == "sleep_quality"));
    }

    #[test]
    fn test_rejects_follow_up_id_clash() {
        let mut questions = QuestionCatalog::builtin().list().to_vec();
        let mut clash = questions[0].clone();
        clash.prompt.id = "morning_stress".to_string();
        questions.push(clash);
        assert!(matches!(
            QuestionCatalog::new(questions),
            Err(CatalogError::DuplicateQuestionId(_))
        ));
    }

    #[test]
    fn test_rejects_empty_options() {
        let mut q = QuestionCatalog::builtin().list()[0].clone();
        q.prompt.options.clear();
        assert!(matches!(
            QuestionCatalog::new(vec![q]),
            Err(CatalogError::NoOptions(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_option_values() {
        let mut q = QuestionCatalog::builtin().list()[0].clone();
        let dup = q.prompt.options[0].clone();
        q.prompt.options.push(dup);
        assert!(matches!(
            QuestionCatalog::new(vec![q]),
            Err(CatalogError::DuplicateOptionValue { .. })
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[questions]]
            id = "breaks_taken"
            text = "Did you take enough breaks?"
            time_of_day = "evening"
            type = "yesno"
            options = [
                { icon = "Energised", label = "Yes", value = "yes" },
                { icon = "Drained", label = "No", value = "no" },
            ]

            [questions.follow_up.condition]
            question_id = "breaks_taken"
            value = "yes"

            [questions.follow_up.question]
            id = "break_count"
            text = "How many breaks did you take?"
            time_of_day = "evening"
            type = "number"
            options = [{ icon = "Neutral", label = "A few", value = 3 }]

            [[questions]]
            id = "wake"
            text = "Awake?"
            time_of_day = "morning"
            type = "scale"
            options = [{ icon = "Low", label = "Barely", value = 1 }]
        "#;
        let catalog = QuestionCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        let first = &catalog.list()[0];
        assert_eq!(first.prompt.kind, QuestionKind::YesNo);
        let follow_up = first.follow_up.as_ref().unwrap();
        assert_eq!(follow_up.condition.value, OptionValue::from("yes"));
        assert_eq!(follow_up.question.options[0].value, OptionValue::Number(3));
        assert_eq!(ids(&catalog, TimeOfDay::Morning), vec!["wake"]);
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(matches!(
            QuestionCatalog::from_toml_str("[[questions]]\nid = 5"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_toml_is_empty_catalog() {
        let catalog = QuestionCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
