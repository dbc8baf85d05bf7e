// ABOUTME: Debounced text input state
// ABOUTME: Commits the live value after a quiet interval with no keystrokes

use std::time::{Duration, Instant};

/// How long the search box must be quiet before the value commits.
pub const QUIET_INTERVAL: Duration = Duration::from_millis(500);

/// Two-state debouncer: *pending* while a deadline is armed, *settled*
/// once the quiet interval elapses. Each keystroke restarts the deadline;
/// restarting is the only cancellation primitive. Consumers only ever see
/// the settled value.
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    live: String,
    settled: String,
    quiet: Duration,
    deadline: Option<Instant>,
}

impl DebouncedInput {
    pub fn new() -> Self {
        Self::with_quiet(QUIET_INTERVAL)
    }

    pub fn with_quiet(quiet: Duration) -> Self {
        Self {
            live: String::new(),
            settled: String::new(),
            quiet,
            deadline: None,
        }
    }

    /// The value as typed, shown in the search box.
    pub fn live(&self) -> &str {
        &self.live
    }

    /// The committed value, fed into queries.
    pub fn settled(&self) -> &str {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Records a new live value at `now` and (re)arms the deadline.
    pub fn push(&mut self, value: impl Into<String>, now: Instant) {
        self.live = value.into();
        self.deadline = Some(now + self.quiet);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut value = self.live.clone();
        value.push(c);
        self.push(value, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut value = self.live.clone();
        value.pop();
        self.push(value, now);
    }

    /// Clears both the live and settled value immediately. Returns true
    /// if the settled value changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.settled.is_empty();
        self.live.clear();
        self.settled.clear();
        self.deadline = None;
        changed
    }

    /// Commits the live value if the quiet interval has elapsed at `now`.
    /// Returns true if the settled value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.settled != self.live {
                    self.settled = self.live.clone();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Duration {
        Duration::from_millis(500)
    }

    #[test]
    fn test_starts_settled_and_empty() {
        let input = DebouncedInput::new();
        assert_eq!(input.live(), "");
        assert_eq!(input.settled(), "");
        assert!(!input.is_pending());
    }

    #[test]
    fn test_push_does_not_settle_immediately() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push("a", now);
        assert_eq!(input.live(), "a");
        assert_eq!(input.settled(), "");
        assert!(input.is_pending());
        assert!(!input.poll(now));
    }

    #[test]
    fn test_settles_after_quiet_interval() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push("query", now);
        assert!(input.poll(now + quiet()));
        assert_eq!(input.settled(), "query");
        assert!(!input.is_pending());
    }

    #[test]
    fn test_rapid_pushes_settle_once_to_last_value() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push("a", now);
        input.push("ab", now + Duration::from_millis(100));
        input.push("abc", now + Duration::from_millis(200));

        // Still within the restarted interval
        assert!(!input.poll(now + Duration::from_millis(600)));
        assert_eq!(input.settled(), "");

        // One commit, equal to the last input
        assert!(input.poll(now + Duration::from_millis(700)));
        assert_eq!(input.settled(), "abc");

        // No further commits
        assert!(!input.poll(now + Duration::from_millis(1500)));
    }

    #[test]
    fn test_push_char_and_pop_char() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push_char('h', now);
        input.push_char('i', now);
        assert_eq!(input.live(), "hi");
        input.pop_char(now);
        assert_eq!(input.live(), "h");
    }

    #[test]
    fn test_settle_to_same_value_reports_unchanged() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push("x", now);
        assert!(input.poll(now + quiet()));

        // Type and erase back to the settled value
        input.push("xy", now + Duration::from_secs(2));
        input.push("x", now + Duration::from_secs(3));
        assert!(!input.poll(now + Duration::from_secs(4)));
        assert_eq!(input.settled(), "x");
    }

    #[test]
    fn test_clear_resets_both_values() {
        let mut input = DebouncedInput::new();
        let now = Instant::now();
        input.push("query", now);
        input.poll(now + quiet());
        assert!(input.clear());
        assert_eq!(input.live(), "");
        assert_eq!(input.settled(), "");
        assert!(!input.is_pending());
    }

    #[test]
    fn test_clear_when_already_empty_reports_unchanged() {
        let mut input = DebouncedInput::new();
        assert!(!input.clear());
    }
}
