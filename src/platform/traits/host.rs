//! Host UI capability
//!
//! Output surface of the navigator: opening external links and rendering
//! the status line, the spoken-text line, notes and the history list.

use campus_nav_core::history::HistoryEntry;
use campus_nav_core::status::StatusUpdate;

use crate::platform::Result;

/// Host page
pub trait HostInterface {
    /// Open an external link in a new tab/window
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::OpenUrl` if the host refused (e.g., popup blocked).
    fn open_url(&self, url: &str) -> Result<()>;

    /// Replace the status line
    fn render_status(&self, status: &StatusUpdate);

    /// Show the sentence that was (or would have been) spoken
    fn render_spoken(&self, text: &str);

    /// Show a secondary note (voice or link problems)
    fn render_note(&self, note: &str);

    /// Add an entry to the history display
    fn append_history(&self, entry: &HistoryEntry);

    /// Empty the history display
    fn clear_history(&self);
}
