// ABOUTME: Create-note form overlay
// ABOUTME: Title line, tag selector, and a textarea for content

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, FormFocus};
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().cyan())
        .title(" New note (Tab: next field, Ctrl+S: save, Esc: cancel) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // Tag
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Error line
    ])
    .split(inner);

    let focus_style = Style::default().cyan();
    let blur_style = Style::default().dim();

    let title_block = Block::default().borders(Borders::ALL).title(" Title ").border_style(
        if app.form.focus == FormFocus::Title {
            focus_style
        } else {
            blur_style
        },
    );
    f.render_widget(
        Paragraph::new(app.form.title.clone()).block(title_block),
        chunks[0],
    );

    let tag_block = Block::default().borders(Borders::ALL).title(" Tag (←/→) ").border_style(
        if app.form.focus == FormFocus::Tag {
            focus_style
        } else {
            blur_style
        },
    );
    f.render_widget(
        Paragraph::new(app.form.tag().to_string()).block(tag_block),
        chunks[1],
    );

    let content_block = Block::default().borders(Borders::ALL).title(" Content ").border_style(
        if app.form.focus == FormFocus::Content {
            focus_style
        } else {
            blur_style
        },
    );
    let content_inner = content_block.inner(chunks[2]);
    f.render_widget(content_block, chunks[2]);
    f.render_widget(&app.form.content, content_inner);

    if let Some(error) = &app.form.error {
        f.render_widget(
            Paragraph::new(error.clone()).style(Style::default().red()),
            chunks[3],
        );
    } else if app.busy {
        f.render_widget(
            Paragraph::new("Saving...").style(Style::default().dim()),
            chunks[3],
        );
    }
}
