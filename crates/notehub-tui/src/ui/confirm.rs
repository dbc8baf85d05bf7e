// ABOUTME: Delete confirmation overlay
// ABOUTME: Small centered modal naming the note about to be deleted

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let title = app
        .selected_note(now)
        .map(|n| n.title)
        .unwrap_or_else(|| "this note".to_string());

    let lines = vec![
        Line::from(format!("Delete \"{}\"?", title)),
        Line::from(""),
        Line::from(Span::styled(
            "y: delete    n/Esc: cancel",
            Style::default().dim(),
        )),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().red())
            .title(" Confirm delete "),
    );
    f.render_widget(para, area);
}
