use tracing::{debug, error, info, warn};

use crate::data::QuizRepository;
use crate::models::QuizSummary;
use crate::session::{Progress, Score, Session};

/// Which view is on screen.
#[derive(Debug)]
pub enum Screen {
    Listing,
    Quiz { session: Session, cursor: usize },
    Final { session: Session, score: Score },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Listing => "listing",
            Screen::Quiz { .. } => "quiz",
            Screen::Final { .. } => "final",
        }
    }
}

pub struct App {
    pub screen: Screen,
    repository: QuizRepository,
    quizzes: Vec<QuizSummary>,
    listing_cursor: usize,
    result_scroll: usize,
    status: Option<String>,
}

impl App {
    pub fn new(repository: QuizRepository) -> Self {
        Self {
            screen: Screen::Listing,
            repository,
            quizzes: Vec::new(),
            listing_cursor: 0,
            result_scroll: 0,
            status: None,
        }
    }

    pub fn repository(&self) -> &QuizRepository {
        &self.repository
    }

    pub fn quizzes(&self) -> &[QuizSummary] {
        &self.quizzes
    }

    pub fn listing_cursor(&self) -> usize {
        self.listing_cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Last load failure, shown under the listing.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-reads the quiz directory. A failure leaves the listing empty.
    pub async fn refresh_listing(&mut self) {
        match self.repository.list_quizzes().await {
            Ok(quizzes) => {
                self.quizzes = quizzes;
                self.status = None;
            }
            Err(err) => {
                error!(error = %err, "failed to list quizzes");
                self.quizzes.clear();
                self.status = Some(err.to_string());
            }
        }
        self.listing_cursor = self
            .listing_cursor
            .min(self.quizzes.len().saturating_sub(1));
    }

    /// Loads a quiz and starts a fresh session for it.
    ///
    /// A failure is logged and keeps the listing on screen.
    pub async fn open_quiz(&mut self, id: &str) {
        match self.repository.load_quiz(id).await {
            Ok(quiz) => {
                info!(quiz = %quiz.id, questions = quiz.questions.len(), "starting quiz");
                self.status = None;
                self.screen = Screen::Quiz {
                    session: Session::new(quiz),
                    cursor: 0,
                };
                if matches!(&self.screen, Screen::Quiz { session, .. } if session.is_complete()) {
                    self.finish();
                }
            }
            Err(err) => {
                error!(quiz = id, error = %err, "failed to load quiz");
                self.status = Some(err.to_string());
                self.screen = Screen::Listing;
            }
        }
    }

    pub async fn open_highlighted(&mut self) {
        if let Some(summary) = self.quizzes.get(self.listing_cursor) {
            let id = summary.id.clone();
            self.open_quiz(&id).await;
        }
    }

    pub fn select_next_quiz(&mut self) {
        if !self.quizzes.is_empty() {
            self.listing_cursor = (self.listing_cursor + 1) % self.quizzes.len();
        }
    }

    pub fn select_previous_quiz(&mut self) {
        if !self.quizzes.is_empty() {
            let len = self.quizzes.len();
            self.listing_cursor = (self.listing_cursor + len - 1) % len;
        }
    }

    pub fn select_next_option(&mut self) {
        if let Screen::Quiz { session, cursor } = &mut self.screen {
            let count = option_count(session);
            if count > 0 {
                *cursor = (*cursor + 1) % count;
            }
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Screen::Quiz { session, cursor } = &mut self.screen {
            let count = option_count(session);
            if count > 0 {
                *cursor = (*cursor + count - 1) % count;
            }
        }
    }

    /// Toggles the option under the cursor.
    pub fn toggle_highlighted(&mut self) {
        if let Screen::Quiz { session, cursor } = &mut self.screen {
            if let Err(err) = session.toggle_option(*cursor) {
                debug!(error = %err, "toggle ignored");
            }
        }
    }

    /// Checks the answer, or moves on once it has been checked.
    pub fn confirm(&mut self) {
        let Screen::Quiz { session, cursor } = &mut self.screen else {
            return;
        };

        if !session.is_checked() {
            if let Err(err) = session.check_answer() {
                debug!(error = %err, "check ignored");
            }
            return;
        }

        match session.advance() {
            Ok(Progress::InProgress(_)) => *cursor = 0,
            Ok(Progress::Complete) => self.finish(),
            Err(err) => debug!(error = %err, "advance ignored"),
        }
    }

    fn finish(&mut self) {
        self.screen = match std::mem::replace(&mut self.screen, Screen::Listing) {
            Screen::Quiz { session, .. } => match session.compute_score() {
                Ok(score) => {
                    info!(
                        quiz = %session.quiz().id,
                        points = score.points,
                        possible = score.possible,
                        percent = score.percent(),
                        "quiz complete"
                    );
                    self.result_scroll = 0;
                    Screen::Final { session, score }
                }
                Err(err) => {
                    warn!(error = %err, "could not score session");
                    Screen::Listing
                }
            },
            other => other,
        };
    }

    /// Starts the finished quiz over with a fresh session.
    pub fn restart(&mut self) {
        if let Screen::Final { session, .. } = &self.screen {
            let quiz = session.quiz().clone();
            info!(quiz = %quiz.id, "restarting quiz");
            self.screen = Screen::Quiz {
                session: Session::new(quiz),
                cursor: 0,
            };
        }
    }

    /// Leaves the current quiz, discarding its session.
    pub fn back_to_listing(&mut self) {
        if !matches!(self.screen, Screen::Listing) {
            debug!(from = self.screen.name(), "back to listing");
            self.screen = Screen::Listing;
        }
    }

    pub fn scroll_results_down(&mut self) {
        if let Screen::Final { session, .. } = &self.screen {
            let max_scroll = session.question_count().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

fn option_count(session: &Session) -> usize {
    session.current_question().map_or(0, |q| q.options.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const QUIZ: &str = r#"{
        "id": "two-step",
        "title": "Two step",
        "questions": [
            {"title": "first", "options": ["a", "b"], "correctAnswers": [0]},
            {"title": "second", "options": ["a", "b", "c"], "correctAnswers": [1, 2], "isMultipleChoice": true}
        ]
    }"#;

    fn fixture() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("two-step.json"), QUIZ).unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        let app = App::new(QuizRepository::new(dir.path()));
        (dir, app)
    }

    #[tokio::test]
    async fn listing_then_full_run() {
        let (_dir, mut app) = fixture();
        app.refresh_listing().await;
        assert_eq!(app.quizzes().len(), 2);

        app.select_next_quiz();
        app.open_highlighted().await;
        assert!(matches!(app.screen, Screen::Quiz { .. }));

        app.toggle_highlighted();
        app.confirm();
        app.confirm();

        app.select_next_option();
        app.toggle_highlighted();
        app.confirm();
        app.confirm();

        let Screen::Final { score, .. } = &app.screen else {
            panic!("expected final screen, got {}", app.screen.name());
        };
        assert_eq!(score.points, 2);
        assert_eq!(score.possible, 3);
        assert_eq!(score.to_string(), "100%");
    }

    #[tokio::test]
    async fn confirm_without_selection_stays_put() {
        let (_dir, mut app) = fixture();
        app.open_quiz("two-step").await;
        app.confirm();

        let Screen::Quiz { session, .. } = &app.screen else {
            panic!("expected quiz screen");
        };
        assert!(!session.is_checked());
        assert_eq!(session.progress(), Progress::InProgress(0));
    }

    #[tokio::test]
    async fn broken_quiz_degrades_to_listing() {
        let (_dir, mut app) = fixture();
        app.open_quiz("broken").await;

        assert!(matches!(app.screen, Screen::Listing));
        assert!(app.status().unwrap().contains("parse"));
    }

    #[tokio::test]
    async fn missing_directory_leaves_empty_listing() {
        let mut app = App::new(QuizRepository::new("/definitely/not/here"));
        app.refresh_listing().await;

        assert!(app.quizzes().is_empty());
        assert!(app.status().is_some());
    }

    #[tokio::test]
    async fn restart_begins_a_fresh_session() {
        let (_dir, mut app) = fixture();
        app.open_quiz("two-step").await;
        for _ in 0..2 {
            app.toggle_highlighted();
            app.confirm();
            app.confirm();
        }
        assert!(matches!(app.screen, Screen::Final { .. }));

        app.restart();
        let Screen::Quiz { session, cursor } = &app.screen else {
            panic!("expected quiz screen");
        };
        assert_eq!(*cursor, 0);
        assert_eq!(session.progress(), Progress::InProgress(0));
        assert!(session.committed(0).unwrap().is_empty());
    }

    #[test]
    fn navigation_without_content_is_ignored() {
        let mut app = App::new(QuizRepository::default());
        app.select_next_option();
        assert!(matches!(app.screen, Screen::Listing));
        app.select_next_quiz();
        assert_eq!(app.listing_cursor(), 0);
    }
}
