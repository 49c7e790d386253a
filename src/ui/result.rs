use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::Question;
use crate::session::{Score, Selection, Session};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, session: &Session, score: &Score, scroll: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], session, score);
    render_question_breakdown(frame, chunks[2], session, scroll);
    render_controls(frame, chunks[3]);
}

fn grade_color(score: &Score) -> Color {
    if score.percent() >= 100 {
        Color::Green
    } else {
        Color::Red
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, session: &Session, score: &Score) {
    let content = vec![
        Line::from(Span::styled(
            session.quiz().title.to_uppercase(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled("Final", Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            score.to_string(),
            Style::default().fg(grade_color(score)).bold(),
        )),
        Line::from(Span::styled(
            format!("{} of {} correct answers found", score.points, score.possible),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Green))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, session: &Session, scroll: usize) {
    let lines: Vec<Line> = session
        .quiz()
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let empty = Selection::new();
            let answer = session.committed(index).unwrap_or(&empty);
            let (symbol, color) = if is_clean(question, answer) {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };
            let earned = question
                .correct_answers
                .iter()
                .filter(|&&correct| answer.contains(correct))
                .count();

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}/{}  ", earned, question.correct_answers.len()),
                    Style::default().fg(color),
                ),
                Span::styled(truncate_question(&question.title), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

/// Answered, with no option outside the answer key.
fn is_clean(question: &Question, answer: &Selection) -> bool {
    !answer.is_empty() && answer.iter().all(|option| question.is_correct(option))
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  enter back to quizzes  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
