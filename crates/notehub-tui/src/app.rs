// ABOUTME: Central application state and event handling
// ABOUTME: Single struct holds all state, mutations happen in handle_* methods

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notehub_client::{Note, NoteDraft, QueryCache, QueryKey};
use tui_textarea::TextArea;

use crate::debounce::DebouncedInput;
use crate::types::{ErrorState, FetchOutcome, Mode, ViewState, PER_PAGE_STEPS, TAGS};

/// Actions that need async handling (returned from handle_key / ticks)
#[derive(Debug)]
pub enum Action {
    Quit,
    /// Issue a list request for `key`; results tagged with `generation`
    Fetch { key: QueryKey, generation: u64 },
    Create(NoteDraft),
    Delete(String),
}

/// Which field of the create form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Tag,
    Content,
}

/// State of the create-note form
pub struct CreateForm {
    pub title: String,
    /// Index into TAGS, never 0 (`all` is not a real tag)
    pub tag_index: usize,
    pub content: TextArea<'static>,
    pub focus: FormFocus,
    pub error: Option<String>,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            tag_index: 1,
            content: TextArea::default(),
            focus: FormFocus::Title,
            error: None,
        }
    }
}

impl CreateForm {
    pub fn tag(&self) -> &str {
        TAGS[self.tag_index]
    }

    fn draft(&self) -> Option<NoteDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NoteDraft {
            title: title.to_string(),
            content: self.content.lines().join("\n").trim().to_string(),
            tag: self.tag().to_string(),
        })
    }
}

/// Central application state
pub struct App {
    pub mode: Mode,

    // Filter state feeding the query key
    pub tag_index: usize,
    pub page: u32,
    pub per_page_index: usize,
    pub search: DebouncedInput,

    // Fetch machinery
    pub cache: QueryCache,
    issued: HashMap<QueryKey, u64>,
    in_flight: HashSet<QueryKey>,
    errors: HashMap<QueryKey, ErrorState>,
    next_generation: u64,

    // List selection / detail
    pub selected: usize,
    pub detail: Option<Note>,

    // Create form
    pub form: CreateForm,

    // Mutation in flight - list input disabled
    pub busy: bool,

    // Transient status-bar message
    pub status_line: Option<String>,

    pub has_token: bool,
}

impl App {
    pub fn new(has_token: bool) -> Self {
        Self {
            mode: Mode::Browse,
            tag_index: 0,
            page: 1,
            per_page_index: 0,
            search: DebouncedInput::new(),
            cache: QueryCache::new(),
            issued: HashMap::new(),
            in_flight: HashSet::new(),
            errors: HashMap::new(),
            next_generation: 0,
            selected: 0,
            detail: None,
            form: CreateForm::default(),
            busy: false,
            status_line: None,
            has_token,
        }
    }

    pub fn current_tag(&self) -> &'static str {
        TAGS[self.tag_index]
    }

    pub fn per_page(&self) -> u32 {
        PER_PAGE_STEPS[self.per_page_index]
    }

    /// The cache key for the current filter state.
    pub fn current_key(&self) -> QueryKey {
        QueryKey::new(
            self.current_tag(),
            self.page,
            self.per_page(),
            self.search.settled(),
        )
    }

    /// What the browse view should render right now.
    pub fn view_state(&self, now: Instant) -> ViewState {
        let key = self.current_key();
        if let Some(page) = self.cache.get(&key, now) {
            return ViewState::Data(page.clone());
        }
        if let Some(error) = self.errors.get(&key) {
            return ViewState::Error(error.clone());
        }
        ViewState::Loading
    }

    /// The note under the cursor, if the current page has data.
    pub fn selected_note(&self, now: Instant) -> Option<Note> {
        match self.view_state(now) {
            ViewState::Data(page) => page.items.get(self.selected).cloned(),
            _ => None,
        }
    }

    /// Advance debounce and kick off a fetch if the current key has no
    /// fresh data. Called from the tick loop.
    pub fn handle_tick(&mut self, now: Instant) -> Option<Action> {
        if self.search.poll(now) {
            // Committed search text changed: back to the first page
            self.page = 1;
            self.selected = 0;
            self.clear_current_error();
        }
        self.maybe_fetch(now)
    }

    /// Issues a fetch for the current key unless cached data is fresh,
    /// a request for this key is already in flight, or the last request
    /// for it failed. Failed keys are never retried by the tick loop;
    /// navigation or an explicit refresh clears the error first.
    pub fn maybe_fetch(&mut self, now: Instant) -> Option<Action> {
        let key = self.current_key();
        if self.cache.get(&key, now).is_some() {
            return None;
        }
        if self.in_flight.contains(&key) {
            return None;
        }
        if self.errors.contains_key(&key) {
            return None;
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.issued.insert(key.clone(), generation);
        self.in_flight.insert(key.clone());
        Some(Action::Fetch { key, generation })
    }

    /// Handle a result from a spawned API task. May return a follow-up
    /// fetch action (after mutations invalidate the cache).
    pub fn handle_fetch(&mut self, outcome: FetchOutcome, now: Instant) -> Option<Action> {
        match outcome {
            FetchOutcome::List {
                key,
                generation,
                result,
            } => {
                if self.issued.get(&key) != Some(&generation) {
                    // A newer request for this key was issued; this
                    // result lost the race.
                    tracing::debug!(?key, generation, "discarding stale fetch result");
                    return None;
                }
                self.in_flight.remove(&key);
                match result {
                    Ok(page) => {
                        self.errors.remove(&key);
                        let total_pages = page.meta.total_pages;
                        let is_current = key == self.current_key();
                        self.cache.insert(key, page, now);
                        if is_current {
                            if self.page > total_pages {
                                // Page ran off the end (e.g. after deletes)
                                self.page = total_pages;
                                self.selected = 0;
                                return self.maybe_fetch(now);
                            }
                            self.clamp_selection(now);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(?key, error = %err, "list fetch failed");
                        self.errors.insert(key, ErrorState::from_api_error(&err));
                    }
                }
                None
            }
            FetchOutcome::Created(result) => {
                self.busy = false;
                match result {
                    Ok(note) => {
                        self.status_line = Some(format!("Created \"{}\"", note.title));
                        self.form = CreateForm::default();
                        self.mode = Mode::Browse;
                        self.cache.clear();
                        self.errors.clear();
                        self.maybe_fetch(now)
                    }
                    Err(err) => {
                        self.form.error = Some(err.to_string());
                        None
                    }
                }
            }
            FetchOutcome::Deleted(result) => {
                self.busy = false;
                match result {
                    Ok(note) => {
                        self.status_line = Some(format!("Deleted \"{}\"", note.title));
                        self.cache.clear();
                        self.errors.clear();
                        self.maybe_fetch(now)
                    }
                    Err(err) => {
                        self.status_line = Some(format!("Delete failed: {err}"));
                        None
                    }
                }
            }
        }
    }

    /// Handle a key event, returning an action if needed
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        // Global quit
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key, now),
            Mode::Detail => self.handle_detail_key(key, now),
            Mode::Create => self.handle_create_key(key),
            Mode::ConfirmDelete => self.handle_confirm_key(key, now),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        self.status_line = None;
        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form = CreateForm::default();
                self.mode = Mode::Create;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.selected_note(now).is_some() && !self.busy {
                    self.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cycle_per_page();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Force refetch of the current key, including after errors
                self.cache.clear();
                self.errors.clear();
            }
            KeyCode::Tab => {
                self.set_tag_index((self.tag_index + 1) % TAGS.len());
            }
            KeyCode::BackTab => {
                self.set_tag_index((self.tag_index + TAGS.len() - 1) % TAGS.len());
            }
            KeyCode::Left => {
                if self.page > 1 {
                    self.page -= 1;
                    self.selected = 0;
                    self.clear_current_error();
                }
            }
            KeyCode::Right => {
                if let ViewState::Data(page) = self.view_state(now) {
                    if self.page < page.meta.total_pages {
                        self.page += 1;
                        self.selected = 0;
                        self.clear_current_error();
                    }
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if let ViewState::Data(page) = self.view_state(now) {
                    let max = page.items.len().saturating_sub(1);
                    self.selected = (self.selected + 1).min(max);
                }
            }
            KeyCode::Enter => {
                if let Some(note) = self.selected_note(now) {
                    self.detail = Some(note);
                    self.mode = Mode::Detail;
                }
            }
            KeyCode::Esc => {
                if self.search.clear() {
                    self.page = 1;
                    self.selected = 0;
                    self.clear_current_error();
                }
            }
            KeyCode::Backspace => {
                self.search.pop_char(now);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.push_char(c, now);
            }
            _ => {}
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.detail = None;
                self.mode = Mode::Browse;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.selected_note(now).is_some() && !self.busy {
                    self.mode = Mode::ConfirmDelete;
                }
            }
            _ => {}
        }
        None
    }

    fn handle_create_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.form = CreateForm::default();
                self.mode = Mode::Browse;
                return None;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.busy {
                    return None;
                }
                match self.form.draft() {
                    Some(draft) => {
                        self.busy = true;
                        self.form.error = None;
                        return Some(Action::Create(draft));
                    }
                    None => {
                        self.form.error = Some("Title must not be empty".to_string());
                        return None;
                    }
                }
            }
            KeyCode::Tab => {
                self.form.focus = match self.form.focus {
                    FormFocus::Title => FormFocus::Tag,
                    FormFocus::Tag => FormFocus::Content,
                    FormFocus::Content => FormFocus::Title,
                };
                return None;
            }
            _ => {}
        }

        match self.form.focus {
            FormFocus::Title => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.title.push(c);
                }
                KeyCode::Backspace => {
                    self.form.title.pop();
                }
                _ => {}
            },
            FormFocus::Tag => match key.code {
                KeyCode::Left | KeyCode::Up => {
                    // Wrap within real tags, skipping `all` at index 0
                    self.form.tag_index = if self.form.tag_index <= 1 {
                        TAGS.len() - 1
                    } else {
                        self.form.tag_index - 1
                    };
                }
                KeyCode::Right | KeyCode::Down => {
                    self.form.tag_index = if self.form.tag_index >= TAGS.len() - 1 {
                        1
                    } else {
                        self.form.tag_index + 1
                    };
                }
                _ => {}
            },
            FormFocus::Content => {
                self.form.content.input(key);
            }
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.mode = Mode::Browse;
                self.detail = None;
                if let Some(note) = self.selected_note(now) {
                    self.busy = true;
                    return Some(Action::Delete(note.id));
                }
                None
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
                None
            }
            _ => None,
        }
    }

    /// Switches the tag filter and resets to the first page.
    pub fn set_tag_index(&mut self, index: usize) {
        if index < TAGS.len() && index != self.tag_index {
            self.tag_index = index;
            self.page = 1;
            self.selected = 0;
            self.clear_current_error();
        }
    }

    /// Cycles through per-page sizes. Resets to the first page, same as
    /// a search or tag change.
    pub fn cycle_per_page(&mut self) {
        self.per_page_index = (self.per_page_index + 1) % PER_PAGE_STEPS.len();
        self.page = 1;
        self.selected = 0;
        self.clear_current_error();
    }

    /// Navigating to a key counts as asking for it again: drop any
    /// recorded failure so the next tick may fetch it once.
    fn clear_current_error(&mut self) {
        let key = self.current_key();
        self.errors.remove(&key);
    }

    fn clamp_selection(&mut self, now: Instant) {
        if let ViewState::Data(page) = self.view_state(now) {
            let max = page.items.len().saturating_sub(1);
            self.selected = self.selected.min(max);
        }
    }
}
