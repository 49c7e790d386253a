//! Quiz session state machine.
//!
//! A session walks a loaded [`Quiz`] one question at a time:
//! options are toggled with [`Session::select_option`], the answer is
//! submitted with [`Session::check_answer`] and recorded with
//! [`Session::advance`]. Once every question is recorded the session is
//! [`Progress::Complete`] and [`Session::compute_score`] becomes available.

mod score;
mod selection;

use thiserror::Error;
use tracing::debug;

use crate::models::{Question, Quiz};

pub use score::Score;
pub use selection::Selection;

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Answering the question at this index.
    InProgress(usize),
    /// Every question has been answered.
    Complete,
}

/// Transitions that are not valid from the current state.
///
/// A rejected transition never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the quiz is already complete")]
    Complete,
    #[error("the answer has already been checked")]
    AlreadyChecked,
    #[error("the answer has not been checked yet")]
    NotChecked,
    #[error("no option is selected")]
    NothingSelected,
    #[error("the quiz is not complete yet")]
    NotComplete,
    #[error("option {option} is out of range for a question with {count} options")]
    OptionOutOfRange { option: usize, count: usize },
}

/// How an option should be shown for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Unselected,
    /// Chosen, answer not checked yet.
    Selected,
    /// Chosen and part of the answer key.
    Correct,
    /// Chosen and not part of the answer key.
    Incorrect,
}

/// Outcome of checking the current answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// At least one selected option is not in the answer key.
    pub wrong: bool,
    /// Each selected option paired with whether it is correct.
    pub options: Vec<(usize, bool)>,
}

#[derive(Debug, Clone)]
pub struct Session {
    quiz: Quiz,
    index: usize,
    live: Vec<bool>,
    committed: Vec<Selection>,
    checked: bool,
    wrong: bool,
}

impl Session {
    pub fn new(quiz: Quiz) -> Self {
        let committed = vec![Selection::new(); quiz.questions.len()];
        let live = quiz
            .questions
            .first()
            .map(|q| vec![false; q.options.len()])
            .unwrap_or_default();

        Self {
            quiz,
            index: 0,
            live,
            committed,
            checked: false,
            wrong: false,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn progress(&self) -> Progress {
        if self.index >= self.question_count() {
            Progress::Complete
        } else {
            Progress::InProgress(self.index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() == Progress::Complete
    }

    /// The question being answered, `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.index)
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_wrong(&self) -> bool {
        self.wrong
    }

    pub fn is_selected(&self, option: usize) -> bool {
        self.live.get(option).copied().unwrap_or(false)
    }

    /// True while unchecked with at least one option chosen.
    pub fn can_check(&self) -> bool {
        !self.checked && self.live.iter().any(|&chosen| chosen)
    }

    /// The selection recorded for a question once it was advanced past.
    pub fn committed(&self, question: usize) -> Option<&Selection> {
        self.committed.get(question)
    }

    /// Sets or clears one option of the current question.
    ///
    /// On a single-select question every other option is cleared first.
    pub fn select_option(&mut self, option: usize, selected: bool) -> Result<Progress, SessionError> {
        let question = self.current_question().ok_or(SessionError::Complete)?;
        if self.checked {
            return Err(SessionError::AlreadyChecked);
        }
        let count = question.options.len();
        if option >= count {
            return Err(SessionError::OptionOutOfRange { option, count });
        }

        if !question.is_multiple_choice {
            self.live.iter_mut().for_each(|slot| *slot = false);
        }
        self.live[option] = selected;

        Ok(self.progress())
    }

    /// Flips one option, honouring single-select semantics.
    pub fn toggle_option(&mut self, option: usize) -> Result<Progress, SessionError> {
        let selected = !self.is_selected(option);
        self.select_option(option, selected)
    }

    /// Grades the live selection against the answer key.
    ///
    /// Only selected options are graded: leaving out a correct option of a
    /// multi-select question does not make the answer wrong.
    pub fn check_answer(&mut self) -> Result<Verdict, SessionError> {
        let question = self.current_question().ok_or(SessionError::Complete)?;
        if self.checked {
            return Err(SessionError::AlreadyChecked);
        }
        if !self.can_check() {
            return Err(SessionError::NothingSelected);
        }

        let options: Vec<(usize, bool)> = Selection::from_flags(&self.live)
            .iter()
            .map(|option| (option, question.is_correct(option)))
            .collect();
        let wrong = options.iter().any(|&(_, correct)| !correct);

        self.checked = true;
        self.wrong = wrong;
        debug!(question = self.index, wrong, "answer checked");

        Ok(Verdict { wrong, options })
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        if !self.is_selected(option) {
            return OptionMark::Unselected;
        }
        if !self.checked {
            return OptionMark::Selected;
        }
        match self.current_question() {
            Some(question) if question.is_correct(option) => OptionMark::Correct,
            _ => OptionMark::Incorrect,
        }
    }

    /// Records the checked selection and moves to the next question.
    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        if !self.checked {
            return Err(SessionError::NotChecked);
        }

        self.committed[self.index] = Selection::from_flags(&self.live);
        self.index += 1;
        self.checked = false;
        self.wrong = false;
        self.live = self
            .current_question()
            .map(|q| vec![false; q.options.len()])
            .unwrap_or_default();

        let progress = self.progress();
        debug!(?progress, "advanced");
        Ok(progress)
    }

    /// Points earned once every question has been recorded.
    pub fn compute_score(&self) -> Result<Score, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }

        let points = self
            .quiz
            .questions
            .iter()
            .zip(&self.committed)
            .map(|(question, answer)| {
                question
                    .correct_answers
                    .iter()
                    .filter(|&&correct| answer.contains(correct))
                    .count()
            })
            .sum();

        Ok(Score {
            points,
            possible: self.quiz.possible_points(),
            questions: self.question_count(),
        })
    }
}
