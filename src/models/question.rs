use std::collections::BTreeMap;

use serde::Deserialize;

/// A single prompt with its options and answer key.
///
/// Field names follow the camelCase keys of the quiz files. Only `title`,
/// `options` and `correctAnswers` are required; the rest default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    #[serde(default)]
    pub code_block: Vec<String>,
    pub options: Vec<String>,
    /// Code rendering per option, keyed by option index.
    #[serde(default)]
    pub code_block_options: BTreeMap<usize, String>,
    #[serde(default)]
    pub explanation: String,
    pub correct_answers: Vec<usize>,
    #[serde(default)]
    pub is_multiple_choice: bool,
    #[serde(default)]
    pub is_code_block_question: bool,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answers.contains(&option)
    }

    pub fn code_for_option(&self, option: usize) -> Option<&str> {
        self.code_block_options.get(&option).map(String::as_str)
    }
}
