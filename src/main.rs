use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skill_quiz::{DEFAULT_QUIZ_DIR, QuizRepository};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(version, about = "Practice quizzes in the terminal", long_about = None)]
struct Args {
    /// Directory holding the <id>.json quiz files
    #[arg(short, long, global = true, default_value = DEFAULT_QUIZ_DIR)]
    dir: PathBuf,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a quiz directly, skipping the listing
    Play {
        /// Quiz id (file name without .json)
        id: String,
    },

    /// Print the available quizzes
    List {
        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Check quiz files for answer-key and layout problems
    Validate {
        /// Only validate this quiz
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let interactive = matches!(args.command, None | Some(Command::Play { .. }));

    if let Err(e) = init_tracing(args.log_file.as_deref(), interactive) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    let repository = QuizRepository::new(args.dir);
    let result: Result<()> = match args.command {
        None => skill_quiz::run(repository, None).await.map_err(Into::into),
        Some(Command::Play { id }) => skill_quiz::run(repository, Some(&id)).await.map_err(Into::into),
        Some(Command::List { json }) => commands::list::execute(&repository, json).await,
        Some(Command::Validate { id }) => commands::validate::execute(&repository, id.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to `log_file` when given; otherwise to stderr, except while the
/// terminal UI owns the screen.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skill_quiz=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => builder.with_writer(io::sink).init(),
        None => builder.with_writer(io::stderr).init(),
    }

    Ok(())
}
