//! Snapshot-based undo/redo history.
//!
//! Each committed edit stores the complete previous buffer. Buffers are
//! persistent vectors, so a snapshot costs a pointer copy and undo is a plain
//! state swap rather than a replay of inverse operations.

use std::collections::VecDeque;

use super::buffer::Buffer;

/// Default cap on the number of undo snapshots
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Linear undo/redo history over whole-buffer snapshots.
///
/// Invariants:
/// - `present` always reflects the last committed or restored state.
/// - `record_change` clears `future`.
/// - `past.len() <= max_depth`.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Oldest snapshot at the front
    past: VecDeque<Buffer>,
    present: Buffer,
    /// Nearest redo at the back
    future: Vec<Buffer>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(Buffer::new())
    }
}

impl EditHistory {
    pub fn new(initial: Buffer) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(initial: Buffer, max_depth: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn present(&self) -> &Buffer {
        &self.present
    }

    /// Commit a new present state. Discards any redo branch.
    pub fn record_change(&mut self, new_present: Buffer) {
        let previous = std::mem::replace(&mut self.present, new_present);
        self.past.push_back(previous);
        self.future.clear();

        while self.past.len() > self.max_depth {
            self.past.pop_front();
        }
    }

    /// Step back one snapshot. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Buffer> {
        let previous = self.past.pop_back()?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        Some(&self.present)
    }

    /// Step forward one snapshot. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Buffer> {
        let next = self.future.pop()?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        Some(&self.present)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(tokens: &[&str]) -> Buffer {
        Buffer::from_rows(vec![tokens.to_vec()])
    }

    #[test]
    fn test_history_undo_redo() {
        let mut history = EditHistory::new(Buffer::new());
        history.record_change(rows(&["a"]));
        history.record_change(rows(&["a", "b"]));

        assert_eq!(history.undo_count(), 2);
        assert!(!history.can_redo());

        assert_eq!(history.undo().cloned(), Some(rows(&["a"])));
        assert!(history.can_redo());

        assert_eq!(history.redo().cloned(), Some(rows(&["a", "b"])));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_past_is_none() {
        let mut history = EditHistory::default();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.present().is_blank());
    }

    #[test]
    fn test_record_change_clears_future() {
        let mut history = EditHistory::default();
        history.record_change(rows(&["a"]));
        history.undo();
        assert!(history.can_redo());

        history.record_change(rows(&["b"]));
        assert!(!history.can_redo());
        assert_eq!(history.present(), &rows(&["b"]));
    }

    #[test]
    fn test_redo_order_is_nearest_first() {
        let mut history = EditHistory::default();
        history.record_change(rows(&["1"]));
        history.record_change(rows(&["2"]));
        history.record_change(rows(&["3"]));

        history.undo();
        history.undo();
        history.undo();
        assert!(history.present().is_blank());

        assert_eq!(history.redo().cloned(), Some(rows(&["1"])));
        assert_eq!(history.redo().cloned(), Some(rows(&["2"])));
        assert_eq!(history.redo().cloned(), Some(rows(&["3"])));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_history_max_depth() {
        let mut history = EditHistory::with_max_depth(Buffer::new(), 3);

        for i in 0..5 {
            history.record_change(rows(&[i.to_string().as_str()]));
        }

        assert_eq!(history.undo_count(), 3);
        history.undo();
        history.undo();
        history.undo();
        assert_eq!(history.present(), &rows(&["1"]));
        assert!(!history.can_undo());
    }
}
