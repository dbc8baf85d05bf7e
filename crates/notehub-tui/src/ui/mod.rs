// ABOUTME: UI rendering module for the notehub TUI
// ABOUTME: Dispatches rendering to widget modules

mod confirm;
mod create;
mod detail;
mod list;
mod search;
mod status;

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::Frame;

use crate::app::App;
use crate::types::Mode;

/// Create a centered rect using percentages of the parent rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Search + tag bar
        Constraint::Min(1),    // Note list / detail
        Constraint::Length(1), // Status bar
    ])
    .split(f.area());

    search::render(f, chunks[0], app);

    if app.mode == Mode::Detail {
        detail::render(f, chunks[1], app);
    } else {
        list::render(f, chunks[1], app, now);
    }

    status::render(f, chunks[2], app, now);

    // Overlays
    if app.mode == Mode::Create {
        create::render(f, app);
    }
    if app.mode == Mode::ConfirmDelete {
        confirm::render(f, app, now);
    }
}
