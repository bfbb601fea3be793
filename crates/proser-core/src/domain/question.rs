use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answers keyed by [`Question::key`].
pub type Answers = BTreeMap<String, String>;

/// A single configuration question a project type wants answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: String,
    pub prompt: String,
    pub default: String,
}

impl Question {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            default: default.into(),
        }
    }

    /// Answers obtained by accepting every default.
    pub fn defaults(questions: &[Question]) -> Answers {
        questions
            .iter()
            .map(|q| (q.key.clone(), q.default.clone()))
            .collect()
    }
}
