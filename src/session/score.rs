use std::fmt;

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Correct answers present in the committed selections.
    pub points: usize,
    /// Correct answers across the whole quiz.
    pub possible: usize,
    pub questions: usize,
}

impl Score {
    /// Whole-number share of points per question, times 100.
    ///
    /// Integer division truncates, so fewer points than questions reads as 0%.
    pub fn percent(&self) -> usize {
        self.points
            .checked_div(self.questions)
            .map_or(0, |whole| whole * 100)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
