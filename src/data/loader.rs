use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::models::{Quiz, QuizSummary};

pub const DEFAULT_QUIZ_DIR: &str = "quizes";

const QUIZ_EXTENSION: &str = "json";

/// Errors raised while reading quizzes from disk.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Empty id, id that is not a plain file stem, or no such file.
    #[error("quiz not found: {0:?}")]
    NotFound(String),

    /// The file is not valid JSON or does not have the quiz shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory of `<id>.json` quiz files.
#[derive(Debug, Clone)]
pub struct QuizRepository {
    dir: PathBuf,
}

impl QuizRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `id`.
    pub fn quiz_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{QUIZ_EXTENSION}"))
    }

    /// Lists every `.json` file in the directory, sorted by id.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, RepositoryError> {
        let io_err = |source: io::Error| RepositoryError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.dir).await.map_err(io_err)?;
        let mut quizzes = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            let is_file = match entry.file_type().await {
                Ok(file_type) => file_type.is_file(),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !is_file || path.extension().and_then(|ext| ext.to_str()) != Some(QUIZ_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                quizzes.push(QuizSummary::from_id(stem));
            }
        }

        quizzes.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(dir = %self.dir.display(), count = quizzes.len(), "listed quizzes");
        Ok(quizzes)
    }

    /// Reads and parses `<id>.json`. No content checks beyond the JSON shape.
    pub async fn load_quiz(&self, id: &str) -> Result<Quiz, RepositoryError> {
        if !is_plain_id(id) {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        let path = self.quiz_path(id);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound(id.to_string()));
            }
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };

        let quiz: Quiz = serde_json::from_str(&content)
            .map_err(|source| RepositoryError::Parse { path: path.clone(), source })?;

        debug!(path = %path.display(), questions = quiz.questions.len(), "loaded quiz");
        Ok(quiz)
    }
}

impl Default for QuizRepository {
    fn default() -> Self {
        Self::new(DEFAULT_QUIZ_DIR)
    }
}

fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ids() {
        assert!(is_plain_id("rust-basics"));
        assert!(!is_plain_id(""));
        assert!(!is_plain_id(".."));
        assert!(!is_plain_id("../secrets"));
        assert!(!is_plain_id("nested/quiz"));
    }

    #[test]
    fn quiz_path_appends_extension() {
        let repo = QuizRepository::new("/tmp/q");
        assert_eq!(repo.quiz_path("a-b"), PathBuf::from("/tmp/q/a-b.json"));
    }

    #[tokio::test]
    async fn empty_id_is_not_found() {
        let repo = QuizRepository::default();
        assert!(matches!(
            repo.load_quiz("").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
