// ABOUTME: Full-note detail view
// ABOUTME: Shows title, tag, timestamps, and wrapped content

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(note) = &app.detail else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(note.title.clone(), Style::default().bold())),
        Line::from(Span::styled(
            format!("[{}]", note.tag),
            Style::default().cyan(),
        )),
    ];
    if let Some(created) = note.created_at {
        lines.push(Line::from(Span::styled(
            format!("created {}", created.format("%Y-%m-%d %H:%M")),
            Style::default().dim(),
        )));
    }
    if let Some(updated) = note.updated_at {
        lines.push(Line::from(Span::styled(
            format!("updated {}", updated.format("%Y-%m-%d %H:%M")),
            Style::default().dim(),
        )));
    }
    lines.push(Line::from(""));
    for content_line in note.content.lines() {
        lines.push(Line::from(content_line.to_string()));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Note (Esc to go back, Ctrl+D to delete) "),
    );
    f.render_widget(para, area);
}
