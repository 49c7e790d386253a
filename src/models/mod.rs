mod question;
mod quiz;

pub use question::Question;
pub use quiz::{Quiz, QuizSummary};
