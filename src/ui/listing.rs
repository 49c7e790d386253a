use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0]);
    render_quizzes(frame, chunks[1], app);
    render_status(frame, chunks[2], app.status());
    render_controls(frame, chunks[3]);
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        "META SKILL",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_quizzes(frame: &mut Frame, area: Rect, app: &App) {
    if app.quizzes().is_empty() {
        let widget = Paragraph::new(format!(
            "No quizzes found in {}",
            app.repository().dir().display()
        ))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(app.quizzes().len() * 3);
    for (index, quiz) in app.quizzes().iter().enumerate() {
        let is_selected = index == app.listing_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(quiz.title.to_uppercase(), style),
        ]));
        if is_selected {
            lines.push(Line::from(Span::styled(
                "   Practice now",
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if let Some(message) = status {
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter practice  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
