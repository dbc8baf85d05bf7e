// ABOUTME: Note list rendering with loading, error, and data states
// ABOUTME: Pagination line appears only when there is more than one page

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::types::ViewState;

pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    match app.view_state(now) {
        ViewState::Loading => {
            let para = Paragraph::new("Loading notes...")
                .style(Style::default().dim())
                .block(Block::default().borders(Borders::ALL).title(" Notes "));
            f.render_widget(para, area);
        }
        ViewState::Error(error) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Error loading notes",
                    Style::default().red().bold(),
                )),
                Line::from(error.message.clone()),
            ];
            if error.auth {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Authentication failed: check that NOTEHUB_TOKEN is set in your environment.",
                    Style::default().yellow(),
                )));
            }
            let para = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Notes "));
            f.render_widget(para, area);
        }
        ViewState::Data(page) => {
            let chunks = if page.meta.total_pages > 1 {
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area)
            } else {
                Layout::vertical([Constraint::Min(1)]).split(area)
            };

            let items: Vec<ListItem> = if page.items.is_empty() {
                vec![ListItem::new(" No notes found ").style(Style::default().dim())]
            } else {
                page.items
                    .iter()
                    .enumerate()
                    .map(|(i, note)| {
                        let text = format!(" {}  [{}]", note.title, note.tag);
                        let style = if i == app.selected {
                            Style::default().reversed()
                        } else {
                            Style::default()
                        };
                        ListItem::new(text).style(style)
                    })
                    .collect()
            };

            let title = format!(" Notes ({}) ", page.meta.total_items);
            let list =
                List::new(items).block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(list, chunks[0]);

            if page.meta.total_pages > 1 {
                let text = format!(
                    " ◀ page {}/{} ▶  (←/→)",
                    app.page, page.meta.total_pages
                );
                let para = Paragraph::new(text).style(Style::default().dim());
                f.render_widget(para, chunks[1]);
            }
        }
    }
}
