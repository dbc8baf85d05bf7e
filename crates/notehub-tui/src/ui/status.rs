// ABOUTME: Bottom status bar rendering
// ABOUTME: Shows API host, token presence, page info, messages, keybinds

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::types::ViewState;

pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let mut spans: Vec<Span> = vec![];

    // Token presence
    let token = if app.has_token { "●" } else { "○" };
    let token_style = if app.has_token {
        Style::default().green()
    } else {
        Style::default().red()
    };
    spans.push(Span::raw(" "));
    spans.push(Span::styled(token, token_style));
    spans.push(Span::raw(" "));

    // Page info
    if let ViewState::Data(page) = app.view_state(now) {
        spans.push(Span::styled(
            format!(
                "│ {} notes, page {}/{} ",
                page.meta.total_items, app.page, page.meta.total_pages
            ),
            Style::default().dim(),
        ));
    }

    // Per-page size
    spans.push(Span::styled(
        format!("│ {}/page ", app.per_page()),
        Style::default().dim(),
    ));

    // Transient message
    if let Some(message) = &app.status_line {
        spans.push(Span::styled(
            format!("│ {} ", message),
            Style::default().yellow(),
        ));
    }

    // Keybinds
    spans.push(Span::styled(
        "│ Ctrl+N: new │ Ctrl+D: delete │ Ctrl+P: page size │ Ctrl+Q: quit ",
        Style::default().dim(),
    ));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().on_dark_gray());
    f.render_widget(para, area);
}
