mod loader;

pub use loader::{DEFAULT_QUIZ_DIR, QuizRepository, RepositoryError};
