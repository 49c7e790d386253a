//! The `skill-quiz list` command.

use anyhow::{Context, Result};
use skill_quiz::QuizRepository;

pub async fn execute(repository: &QuizRepository, json: bool) -> Result<()> {
    let quizzes = repository
        .list_quizzes()
        .await
        .context("failed to list quizzes")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quizzes)?);
        return Ok(());
    }

    for quiz in &quizzes {
        println!("{}\t{}", quiz.id, quiz.title);
    }

    Ok(())
}
