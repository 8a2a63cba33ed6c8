//! UI rendering for the review screen.

mod status;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{App, Mode};

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Main layout: header, body, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(frame.area());

    draw_header(frame, main_chunks[0], app);

    match app.mode {
        Mode::Review => draw_task(frame, main_chunks[1], app),
        Mode::Done => draw_done(frame, main_chunks[1], app),
    }

    status::draw(frame, main_chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = "dayboard";
    let context = format!("[{}]", app.session.source());

    let padding =
        area.width.saturating_sub(title.len() as u16 + context.len() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {}", title), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(context, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// The single task under review, centered and free of distractions.
fn draw_task(frame: &mut Frame, area: Rect, app: &App) {
    let queue = app.session.queue();
    let id = app.session.current_task_id().unwrap_or_default().to_string();

    let position = format!("task {} of {}", queue.cursor() + 1, queue.len());
    let title = app
        .current_title
        .clone()
        .unwrap_or_else(|| "(title unavailable)".to_string());

    let mut lines = vec![
        Line::raw(""),
        Line::styled(position, Style::default().fg(Color::DarkGray)),
        Line::raw(""),
        Line::styled(title, Style::default().bold()),
        Line::styled(id.clone(), Style::default().fg(Color::DarkGray)),
    ];
    if queue.was_skipped(&id) {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "skipped earlier this session",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Push the text toward the vertical middle of the body.
    let offset = area.height.saturating_sub(lines.len() as u16) / 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(offset), Constraint::Min(1)])
        .split(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(paragraph, chunks[1]);
}

fn draw_done(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.session.stats();

    let lines = vec![
        Line::raw(""),
        Line::styled("Queue clear.", Style::default().fg(Color::Green).bold()),
        Line::raw(""),
        Line::raw(stats.to_string()),
        Line::raw(""),
        Line::styled(
            "press Enter to finish",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let offset = area.height.saturating_sub(lines.len() as u16) / 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(offset), Constraint::Min(1)])
        .split(area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
