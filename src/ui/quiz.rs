use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Question;
use crate::session::{OptionMark, Progress, Session};

use super::code_lines;

const MAX_CODE_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let Some(question) = session.current_question() else {
        return;
    };
    let show_explanation = session.is_wrong() && !question.explanation.is_empty();

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(3)];
    constraints.extend(question.code_block.iter().map(|code| Constraint::Length(code_height(code))));
    constraints.push(Constraint::Fill(1));
    if show_explanation {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).margin(1).split(area);
    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    render_progress(frame, take(), session);
    render_question_title(frame, take(), &question.title);
    for code in &question.code_block {
        render_code_block(frame, take(), code);
    }
    render_options(frame, take(), session, question, cursor);
    if show_explanation {
        render_explanation(frame, take(), &question.explanation);
    }
    render_controls(frame, take(), session);
}

fn code_height(code: &str) -> u16 {
    let lines = code_lines(code).count() as u16;
    (lines + 2).min(MAX_CODE_HEIGHT)
}

fn render_progress(frame: &mut Frame, area: Rect, session: &Session) {
    let number = match session.progress() {
        Progress::InProgress(index) => index + 1,
        Progress::Complete => session.question_count(),
    };
    let progress = format!(
        "{}  ·  {}/{}",
        session.quiz().title,
        number,
        session.question_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_code_block(frame: &mut Frame, area: Rect, code: &str) {
    let lines: Vec<Line> = code_lines(code)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow))))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, question: &Question, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == cursor && !session.is_checked();
        let mark = session.option_mark(index);
        let (check, color) = match mark {
            OptionMark::Unselected => ("[ ]", Color::Gray),
            OptionMark::Selected => ("[x]", Color::Cyan),
            OptionMark::Correct => ("[x]", Color::Green),
            OptionMark::Incorrect => ("[✗]", Color::Red),
        };
        let mut style = Style::default().fg(color);
        if is_cursor {
            style = style.bold();
        }
        let marker = if is_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", check), style),
            Span::styled(option.as_str(), style),
        ]));

        if question.is_code_block_question {
            if let Some(code) = question.code_for_option(index) {
                lines.extend(code_lines(code).map(|line| {
                    Line::from(Span::styled(
                        format!("       {}", line),
                        Style::default().fg(Color::Yellow),
                    ))
                }));
            }
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, explanation: &str) {
    let widget = Paragraph::new(explanation)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::Red)
                .title(" Explanation "),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let hint = if session.is_checked() {
        "enter next  ·  esc leave  ·  q quit"
    } else if session.can_check() {
        "j/k navigate  ·  space select  ·  enter check  ·  esc leave"
    } else {
        "j/k navigate  ·  space select  ·  esc leave"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
