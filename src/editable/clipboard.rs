//! Whole-line clipboard.
//!
//! There is no range-selection model: copy and cut always take the entire
//! line under the cursor, and paste splices the stored run at the cursor.

use super::buffer::{Buffer, Line};
use super::cursor::{self, Position};
use super::edit::Edit;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: Line,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &Line {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Store the current line. Returns false (store untouched) on an empty line.
    pub fn copy(&mut self, buffer: &Buffer, pos: Position) -> bool {
        let pos = pos.clamp(buffer);
        match buffer.line(pos.line) {
            Some(line) if !line.is_empty() => {
                self.content = line.clone();
                true
            }
            _ => false,
        }
    }

    /// Store the current line and remove it from the buffer.
    ///
    /// The only line of a buffer is emptied instead of removed.
    pub fn cut(&mut self, buffer: &Buffer, pos: Position) -> Option<Edit> {
        let pos = pos.clamp(buffer);
        if !self.copy(buffer, pos) {
            return None;
        }

        if buffer.line_count() > 1 {
            let mut next = buffer.clone();
            next.remove_line(pos.line);
            let line = pos.line.min(next.last_line_index());
            Some(Edit::new(next, Position::new(line, 0)))
        } else {
            Some(Edit::new(Buffer::new(), Position::zero()))
        }
    }

    /// Splice the stored run at the cursor. `None` when there is nothing to paste.
    pub fn paste(&self, buffer: &Buffer, pos: Position) -> Option<Edit> {
        if self.content.is_empty() {
            return None;
        }
        let pos = pos.clamp(buffer);
        let mut next = buffer.clone();
        next.line_mut(pos.line).splice(pos.column, &self.content);
        Some(Edit::new(
            next,
            Position::new(pos.line, pos.column + self.content.len()),
        ))
    }
}

/// "Select all": relocate the cursor to the end of the buffer.
///
/// No highlighted range is created.
pub fn select_all(buffer: &Buffer) -> Position {
    cursor::document_end(buffer, Position::zero())
}
