//! Mock host page for testing

use std::cell::RefCell;
use std::rc::Rc;

use campus_nav_core::history::HistoryEntry;
use campus_nav_core::status::StatusUpdate;

use crate::platform::{traits::HostInterface, PlatformError, Result};

#[derive(Debug, Default)]
struct HostState {
    opened: Vec<String>,
    statuses: Vec<StatusUpdate>,
    spoken: Vec<String>,
    notes: Vec<String>,
    history: Vec<HistoryEntry>,
    history_clears: usize,
    block_popups: bool,
}

/// Mock host page
///
/// Records every render call for test verification.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<HostState>>,
}

impl MockHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `open_url()` fail as if a popup blocker intervened
    pub fn block_popups(&self, block: bool) {
        self.state.borrow_mut().block_popups = block;
    }

    /// Links opened so far
    pub fn opened_urls(&self) -> Vec<String> {
        self.state.borrow().opened.clone()
    }

    /// Every status update, in order
    pub fn statuses(&self) -> Vec<StatusUpdate> {
        self.state.borrow().statuses.clone()
    }

    /// Most recent status update
    pub fn last_status(&self) -> Option<StatusUpdate> {
        self.state.borrow().statuses.last().cloned()
    }

    /// Every spoken-text line, in order
    pub fn spoken_lines(&self) -> Vec<String> {
        self.state.borrow().spoken.clone()
    }

    /// Every note, in order
    pub fn notes(&self) -> Vec<String> {
        self.state.borrow().notes.clone()
    }

    /// History entries currently displayed
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.borrow().history.clone()
    }

    /// Number of `clear_history()` calls
    pub fn history_clears(&self) -> usize {
        self.state.borrow().history_clears
    }
}

impl HostInterface for MockHost {
    fn open_url(&self, url: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.block_popups {
            return Err(PlatformError::OpenUrl {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            });
        }
        state.opened.push(url.to_string());
        Ok(())
    }

    fn render_status(&self, status: &StatusUpdate) {
        self.state.borrow_mut().statuses.push(status.clone());
    }

    fn render_spoken(&self, text: &str) {
        self.state.borrow_mut().spoken.push(text.to_string());
    }

    fn render_note(&self, note: &str) {
        self.state.borrow_mut().notes.push(note.to_string());
    }

    fn append_history(&self, entry: &HistoryEntry) {
        self.state.borrow_mut().history.push(entry.clone());
    }

    fn clear_history(&self) {
        let mut state = self.state.borrow_mut();
        state.history.clear();
        state.history_clears += 1;
    }
}
