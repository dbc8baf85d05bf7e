// ABOUTME: Search box and tag filter bar rendering
// ABOUTME: Shows the live search text and highlights the active tag

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::types::TAGS;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    // Search box: live value, with a marker while the debounce is pending
    let search_text = if app.search.live().is_empty() {
        Span::styled("type to search", Style::default().dim())
    } else {
        Span::raw(app.search.live().to_string())
    };
    let title = if app.search.is_pending() {
        " Search… "
    } else {
        " Search "
    };
    let search = Paragraph::new(Line::from(search_text))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(search, chunks[0]);

    // Tag bar: every tag, active one highlighted
    let mut spans: Vec<Span> = vec![];
    for (i, tag) in TAGS.iter().enumerate() {
        let style = if i == app.tag_index {
            Style::default().reversed().bold()
        } else {
            Style::default().dim()
        };
        spans.push(Span::styled(format!(" {} ", tag), style));
    }
    let tags = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tags (Tab) "),
    );
    f.render_widget(tags, chunks[1]);
}
