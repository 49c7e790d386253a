mod listing;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Listing => listing::render(frame, area, app),
        Screen::Quiz { session, cursor } => quiz::render(frame, area, session, *cursor),
        Screen::Final { session, score } => {
            result::render(frame, area, session, score, app.result_scroll())
        }
    }
}

/// Drops markdown fence lines so only the code itself is shown.
fn code_lines(code: &str) -> impl Iterator<Item = &str> {
    code.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
}
