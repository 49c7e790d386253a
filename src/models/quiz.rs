use serde::{Deserialize, Serialize};

use super::Question;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Total number of correct answers across every question.
    pub fn possible_points(&self) -> usize {
        self.questions.iter().map(|q| q.correct_answers.len()).sum()
    }
}

/// Listing entry derived from a quiz file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
}

impl QuizSummary {
    /// Builds a summary from a file stem, turning hyphens into spaces.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let title = id.replace('-', " ");
        Self { id, title }
    }
}
