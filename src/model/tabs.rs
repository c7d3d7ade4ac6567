//! Tab registry - one independent expression editor per tab
//!
//! Each tab owns its buffer history and cursor. The registry allocates
//! monotonically increasing ids, tracks the active tab, and never lets the tab
//! count reach zero.

use std::collections::BTreeMap;
use std::fmt;

use crate::editable::{Buffer, Edit, EditHistory, Position, DEFAULT_MAX_DEPTH};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Why a tab could not be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabError {
    /// The tab is the only one left
    LastTab,
    NotFound(TabId),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::LastTab => write!(f, "cannot delete last tab"),
            TabError::NotFound(id) => write!(f, "no such tab: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// ============================================================================
// Tab entry
// ============================================================================

/// One tab's document: display name, buffer history and cursor
#[derive(Debug, Clone)]
pub struct TabEntry {
    pub id: TabId,
    name: String,
    history: EditHistory,
    cursor: Position,
}

impl TabEntry {
    pub fn new(id: TabId, name: impl Into<String>, history_limit: usize) -> Self {
        Self::with_buffer(id, name, Buffer::new(), history_limit)
    }

    /// A tab seeded with existing content and a fresh history
    pub fn with_buffer(
        id: TabId,
        name: impl Into<String>,
        buffer: Buffer,
        history_limit: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            history: EditHistory::with_max_depth(buffer, history_limit),
            cursor: Position::zero(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current buffer (the history's present state)
    pub fn buffer(&self) -> &Buffer {
        self.history.present()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Move the cursor, clamped into the current buffer
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos.clamp(self.history.present());
    }

    /// Record an edit as the new present state and move the cursor
    pub fn commit(&mut self, edit: Edit) {
        self.history.record_change(edit.buffer);
        self.cursor = edit.cursor.clamp(self.history.present());
    }

    /// Restore the previous snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.cursor = self.cursor.clamp(self.history.present());
        true
    }

    /// Re-apply the next snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.cursor = self.cursor.clamp(self.history.present());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Assert the cursor addresses a valid slot (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        assert!(
            self.cursor.is_valid_in(self.buffer()),
            "[{}] {} cursor {:?} out of range ({} lines, line len {})",
            context,
            self.id,
            self.cursor,
            self.buffer().line_count(),
            self.buffer().line_len(self.cursor.line)
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

// ============================================================================
// Registry
// ============================================================================

/// All open tabs, keyed by id. Iteration order is id order.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: BTreeMap<TabId, TabEntry>,
    active: TabId,
    /// Last allocated id number
    tab_count: u64,
    history_limit: usize,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl TabRegistry {
    /// A registry holding a single blank tab named "Tab 1"
    pub fn new(history_limit: usize) -> Self {
        let mut registry = Self {
            tabs: BTreeMap::new(),
            active: TabId(1),
            tab_count: 0,
            history_limit,
        };
        registry.add_tab();
        registry
    }

    /// Rebuild a registry from saved entries.
    ///
    /// `tab_count` is raised to at least the largest id so new ids stay unique.
    /// An empty entry list yields a single blank tab; an unknown active id falls
    /// back to the first tab.
    pub fn restore(
        entries: Vec<(TabId, String, Buffer)>,
        active: TabId,
        tab_count: u64,
        history_limit: usize,
    ) -> Self {
        if entries.is_empty() {
            return Self::new(history_limit);
        }

        let mut tabs = BTreeMap::new();
        for (id, name, buffer) in entries {
            let name = if name.trim().is_empty() {
                default_tab_name(id)
            } else {
                name.trim().to_string()
            };
            tabs.insert(id, TabEntry::with_buffer(id, name, buffer, history_limit));
        }

        let max_id = tabs.keys().map(|id| id.0).max().unwrap_or(0);
        let active = if tabs.contains_key(&active) {
            active
        } else {
            *tabs.keys().next().unwrap_or(&TabId(1))
        };

        Self {
            tabs,
            active,
            tab_count: tab_count.max(max_id),
            history_limit,
        }
    }

    /// Create a blank tab named "Tab N" and make it active
    pub fn add_tab(&mut self) -> TabId {
        let id = self.next_id();
        self.tabs.insert(
            id,
            TabEntry::new(id, default_tab_name(id), self.history_limit),
        );
        self.active = id;
        tracing::debug!(%id, count = self.tabs.len(), "tab added");
        id
    }

    /// Allocate the id for a new tab.
    ///
    /// Ids count up from `tab_count`. Once the counter is exhausted (only
    /// reachable through a hand-edited session) the lowest free id is reused.
    fn next_id(&mut self) -> TabId {
        if let Some(next) = self.tab_count.checked_add(1) {
            self.tab_count = next;
            return TabId(next);
        }

        let free = (1..=u64::MAX)
            .map(TabId)
            .find(|id| !self.tabs.contains_key(id))
            .unwrap_or(TabId(0));
        tracing::warn!(%free, tab_count = self.tab_count, "tab id counter exhausted");
        free
    }

    /// Remove a tab. The last remaining tab cannot be removed.
    ///
    /// When the active tab is removed, the first remaining tab becomes active.
    pub fn remove_tab(&mut self, id: TabId) -> Result<TabEntry, TabError> {
        if !self.tabs.contains_key(&id) {
            return Err(TabError::NotFound(id));
        }
        if self.tabs.len() == 1 {
            return Err(TabError::LastTab);
        }

        let removed = self.tabs.remove(&id).ok_or(TabError::NotFound(id))?;
        if self.active == id {
            if let Some(first) = self.tabs.keys().next() {
                self.active = *first;
            }
        }
        tracing::debug!(%id, active = %self.active, "tab removed");
        Ok(removed)
    }

    /// Rename a tab. Blank names keep the previous name.
    ///
    /// Returns true when the name changed.
    pub fn rename_tab(&mut self, id: TabId, name: &str) -> bool {
        let trimmed = name.trim();
        match self.tabs.get_mut(&id) {
            Some(tab) if !trimmed.is_empty() && tab.name != trimmed => {
                tab.name = trimmed.to_string();
                true
            }
            _ => false,
        }
    }

    /// Make a tab active. Returns false for unknown ids.
    pub fn activate(&mut self, id: TabId) -> bool {
        if self.tabs.contains_key(&id) {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Activate the next tab in id order, wrapping around
    pub fn next_tab(&mut self) {
        let next = self
            .tabs
            .range((std::ops::Bound::Excluded(self.active), std::ops::Bound::Unbounded))
            .next()
            .or_else(|| self.tabs.iter().next())
            .map(|(id, _)| *id);
        if let Some(id) = next {
            self.active = id;
        }
    }

    /// Activate the previous tab in id order, wrapping around
    pub fn prev_tab(&mut self) {
        let prev = self
            .tabs
            .range(..self.active)
            .next_back()
            .or_else(|| self.tabs.iter().next_back())
            .map(|(id, _)| *id);
        if let Some(id) = prev {
            self.active = id;
        }
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn active(&self) -> &TabEntry {
        self.tabs
            .get(&self.active)
            .expect("TabRegistry must have an active tab")
    }

    pub fn active_mut(&mut self) -> &mut TabEntry {
        self.tabs
            .get_mut(&self.active)
            .expect("TabRegistry must have an active tab")
    }

    pub fn get(&self, id: TabId) -> Option<&TabEntry> {
        self.tabs.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabEntry> + '_ {
        self.tabs.values()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: a registry holds at least one tab
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Highest id number allocated so far
    pub fn tab_count(&self) -> u64 {
        self.tab_count
    }

    /// Verify the registry's structural invariants
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert!(!self.tabs.is_empty(), "registry has no tabs");
        assert!(
            self.tabs.contains_key(&self.active),
            "active tab {} does not exist",
            self.active
        );
        for (id, tab) in &self.tabs {
            assert_eq!(*id, tab.id, "tab keyed under wrong id");
            assert!(
                id.0 <= self.tab_count,
                "{} exceeds allocated count {}",
                id,
                self.tab_count
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

fn default_tab_name(id: TabId) -> String {
    format!("Tab {}", id.0)
}
