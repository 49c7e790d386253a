//! The `skill-quiz validate` command.

use anyhow::{Result, bail};
use skill_quiz::QuizRepository;
use skill_quiz::validate::validate_quiz;
use tracing::error;

pub async fn execute(repository: &QuizRepository, id: Option<&str>) -> Result<()> {
    let ids = match id {
        Some(id) => vec![id.to_string()],
        None => repository
            .list_quizzes()
            .await?
            .into_iter()
            .map(|summary| summary.id)
            .collect(),
    };

    let mut total_warnings = 0;
    let mut failed = 0;

    for id in &ids {
        let quiz = match repository.load_quiz(id).await {
            Ok(quiz) => quiz,
            Err(err) => {
                error!(quiz = %id, error = %err, "failed to load quiz");
                println!("Quiz: {id}\n  ERROR: {err}");
                failed += 1;
                continue;
            }
        };

        println!("Quiz: {} ({} questions)", quiz.title, quiz.questions.len());
        let warnings = validate_quiz(&quiz, id);
        for w in &warnings {
            println!("  WARNING: {w}");
        }
        total_warnings += warnings.len();
    }

    if failed > 0 {
        bail!("{failed} quiz file(s) failed to load");
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
