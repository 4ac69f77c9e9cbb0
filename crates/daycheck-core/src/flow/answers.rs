use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::OptionValue;

/// Selected value per question id for one session.
///
/// Selecting again for the same question replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: BTreeMap<String, OptionValue>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn insert(&mut self, question_id: impl Into<String>, value: OptionValue) -> Option<OptionValue> {
        self.values.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<&OptionValue> {
        self.values.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a AnswerMap {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
