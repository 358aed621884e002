//! Selection synchronization between search results and the selected set.
//!
//! After a search or filter change that produces a genuinely new visible set,
//! the selection becomes exactly that set. Manual toggles afterwards diverge
//! the selection without disturbing the signature used to detect new result
//! sets, so a toggle can never be mistaken for a new search and trigger a
//! fresh full-select.

use std::collections::BTreeSet;

/// Synchronization state of the selected-paper set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No search has produced results yet.
    Idle,

    /// Selection equals the visible set from the last sync.
    Synced,

    /// The user has toggled individual papers since the last sync.
    Diverged,
}

/// Session-scoped selected-paper set with signature-tracked auto-sync.
#[derive(Debug, Clone, Default)]
pub struct SelectionSync {
    selected: BTreeSet<String>,
    last_signature: Option<String>,
    diverged: bool,
}

impl SelectionSync {
    /// Create an empty, idle selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SyncState {
        if self.last_signature.is_none() {
            SyncState::Idle
        } else if self.diverged {
            SyncState::Diverged
        } else {
            SyncState::Synced
        }
    }

    /// Sync against the currently visible paper IDs.
    ///
    /// If the visible set's signature differs from the last synced one, the
    /// selection is replaced with exactly the visible set and `true` is
    /// returned. Calling again with the same visible set is a no-op, even
    /// after manual toggles.
    pub fn sync(&mut self, visible_ids: &[String]) -> bool {
        let signature = Self::signature(visible_ids);
        if self.last_signature.as_deref() == Some(signature.as_str()) {
            return false;
        }
        self.selected = visible_ids.iter().cloned().collect();
        self.last_signature = Some(signature);
        self.diverged = false;
        tracing::debug!(selected = self.selected.len(), "selection resynced to visible set");
        true
    }

    /// Toggle one paper. Returns whether the paper is selected afterwards.
    ///
    /// Toggling never touches the tracked signature, so the next genuinely
    /// new result set still triggers a full resync.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.diverged = true;
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Whether a paper is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The selected IDs, in sorted order.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Number of selected papers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear everything, returning to the idle state (new session).
    pub fn reset(&mut self) {
        self.selected.clear();
        self.last_signature = None;
        self.diverged = false;
    }

    // Order-independent signature of a visible set.
    fn signature(ids: &[String]) -> String {
        let mut sorted: Vec<&str> = ids.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join("|")
    }
}
