//! # skill-quiz
//!
//! Terminal quiz runner for directories of JSON quiz files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use skill_quiz::{QuizError, QuizRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Browse every quiz under ./quizes
//!     skill_quiz::run(QuizRepository::default(), None).await
//! }
//! ```
//!
//! The session state machine can also be driven without a terminal:
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use skill_quiz::{Progress, QuizRepository, Session};
//!
//! let quiz = QuizRepository::default().load_quiz("javascript-basics").await?;
//! let mut session = Session::new(quiz);
//! session.select_option(0, true)?;
//! session.check_answer()?;
//! if session.advance()? == Progress::Complete {
//!     println!("{}", session.compute_score()?);
//! }
//! # Ok(())
//! # }
//! ```

mod app;
mod data;
mod models;
pub mod session;
pub mod terminal;
mod ui;
pub mod validate;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::{App, Screen};
pub use data::{DEFAULT_QUIZ_DIR, QuizRepository, RepositoryError};
pub use models::{Question, Quiz, QuizSummary};
pub use session::{OptionMark, Progress, Score, Selection, Session, SessionError, Verdict};

/// Error type for running the terminal app.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the terminal UI until the user quits.
///
/// Starts on the listing, or directly on `initial_quiz` when given. Load
/// failures are logged and shown on the listing rather than returned.
pub async fn run(repository: QuizRepository, initial_quiz: Option<&str>) -> Result<(), QuizError> {
    let mut app = App::new(repository);
    app.refresh_listing().await;
    if let Some(id) = initial_quiz {
        app.open_quiz(id).await;
    }

    let mut terminal = terminal::TerminalGuard::enter()?;
    info!(dir = %app.repository().dir().display(), "terminal ui started");
    run_event_loop(&mut terminal, &mut app).await
}

async fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code).await {
                break;
            }
        }
    }

    info!("terminal ui closed");
    Ok(())
}

/// Returns true if the app should exit.
async fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Listing => handle_listing_input(app, key).await,
        Screen::Quiz { .. } => handle_quiz_input(app, key),
        Screen::Final { .. } => handle_final_input(app, key).await,
    }
}

async fn handle_listing_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_quiz();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_quiz();
            false
        }
        KeyCode::Enter => {
            app.open_highlighted().await;
            false
        }
        KeyCode::Char('g') => {
            app.refresh_listing().await;
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_highlighted();
            false
        }
        KeyCode::Enter => {
            app.confirm();
            false
        }
        KeyCode::Esc => {
            app.back_to_listing();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

async fn handle_final_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => {
            app.back_to_listing();
            app.refresh_listing().await;
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
