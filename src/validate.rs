//! Content checks for quiz files.
//!
//! Loading only requires the JSON shape; these checks report the answer-key
//! and layout problems that would otherwise only show up mid-quiz.

use std::fmt;

use crate::models::Quiz;

/// A problem found in a quiz definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based question number, `None` for quiz-level problems.
    pub question: Option<usize>,
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question {
            Some(number) => write!(f, "[Q{number}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Validate a quiz against the file stem it was loaded from.
pub fn validate_quiz(quiz: &Quiz, file_id: &str) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut quiz_warning = |message: String| {
        warnings.push(ValidationWarning {
            question: None,
            message,
        })
    };

    if quiz.id != file_id {
        quiz_warning(format!(
            "id {:?} does not match file name {:?}",
            quiz.id, file_id
        ));
    }
    if quiz.questions.is_empty() {
        quiz_warning("quiz has no questions".to_string());
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: Some(index + 1),
                message,
            })
        };
        let count = question.options.len();

        if count == 0 {
            warn("question has no options".to_string());
        }
        if question.correct_answers.is_empty() {
            warn("question has no correct answers".to_string());
        }
        for &answer in &question.correct_answers {
            if answer >= count {
                warn(format!(
                    "correct answer {answer} is out of range ({count} options)"
                ));
            }
        }
        if !question.is_multiple_choice && question.correct_answers.len() > 1 {
            warn(format!(
                "single-select question lists {} correct answers",
                question.correct_answers.len()
            ));
        }
        if question.is_code_block_question {
            for option in (0..count).filter(|i| question.code_for_option(*i).is_none()) {
                warn(format!("option {option} has no code block"));
            }
        }
        for &key in question.code_block_options.keys() {
            if key >= count {
                warn(format!("code block for option {key} has no matching option"));
            }
        }
    }

    warnings
}
