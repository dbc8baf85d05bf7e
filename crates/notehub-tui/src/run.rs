// ABOUTME: Terminal setup and the main event loop
// ABOUTME: Multiplexes key events, ticks, and fetch results over channels

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use notehub_client::NotesApi;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::app::{Action, App};
use crate::types::FetchOutcome;
use crate::{fetch, ui};

/// Poll interval for terminal events; doubles as the tick rate that
/// drives debounce settling and staleness checks.
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
enum TuiEvent {
    Key(crossterm::event::KeyEvent),
    Tick,
}

/// Runs the TUI until the user quits.
pub async fn run(api: NotesApi) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = event_loop(&mut terminal, api).await;

    disable_raw_mode().ok();
    io::stdout().execute(LeaveAlternateScreen).ok();

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    api: NotesApi,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FetchOutcome>(32);

    // Event polling task (blocking poll with tick fallback)
    tokio::spawn(async move {
        loop {
            if event::poll(TICK_RATE).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if event_tx.send(TuiEvent::Key(key)).is_err() {
                        break;
                    }
                }
            } else if event_tx.send(TuiEvent::Tick).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(api.config().has_token());

    // Kick off the first page before the first keystroke
    if let Some(Action::Fetch { key, generation }) = app.maybe_fetch(Instant::now()) {
        fetch::spawn_list(api.clone(), key, generation, outcome_tx.clone());
    }

    loop {
        terminal.draw(|f| ui::render(f, &app, Instant::now()))?;

        let action = tokio::select! {
            Some(ev) = event_rx.recv() => {
                let now = Instant::now();
                match ev {
                    TuiEvent::Key(key) => app.handle_key(key, now),
                    TuiEvent::Tick => app.handle_tick(now),
                }
            }
            Some(outcome) = outcome_rx.recv() => app.handle_fetch(outcome, Instant::now()),
            else => break,
        };

        match action {
            Some(Action::Quit) => break,
            Some(Action::Fetch { key, generation }) => {
                fetch::spawn_list(api.clone(), key, generation, outcome_tx.clone());
            }
            Some(Action::Create(draft)) => {
                fetch::spawn_create(api.clone(), draft, outcome_tx.clone());
            }
            Some(Action::Delete(id)) => {
                fetch::spawn_delete(api.clone(), id, outcome_tx.clone());
            }
            None => {}
        }
    }

    Ok(())
}
