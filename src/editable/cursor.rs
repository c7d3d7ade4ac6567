//! Cursor position and directional movement over a token buffer.
//!
//! All movement functions are pure: they take the buffer and a position and
//! return the new position. Movement at a buffer boundary returns the input
//! unchanged.

use serde::{Deserialize, Serialize};

use super::buffer::Buffer;

/// A position in the buffer (line index and token index, both 0-indexed).
///
/// `column` may equal the line length, meaning "after the last token".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// True when the position addresses an existing line and slot
    pub fn is_valid_in(&self, buffer: &Buffer) -> bool {
        self.line < buffer.line_count() && self.column <= buffer.line_len(self.line)
    }

    /// Bring the position into the buffer's valid range
    pub fn clamp(self, buffer: &Buffer) -> Self {
        let line = self.line.min(buffer.last_line_index());
        let column = self.column.min(buffer.line_len(line));
        Self { line, column }
    }
}

pub fn move_left(buffer: &Buffer, pos: Position) -> Position {
    if pos.column > 0 {
        Position::new(pos.line, pos.column - 1)
    } else if pos.line > 0 {
        Position::new(pos.line - 1, buffer.line_len(pos.line - 1))
    } else {
        pos
    }
}

pub fn move_right(buffer: &Buffer, pos: Position) -> Position {
    if pos.column < buffer.line_len(pos.line) {
        Position::new(pos.line, pos.column + 1)
    } else if pos.line < buffer.last_line_index() {
        Position::new(pos.line + 1, 0)
    } else {
        pos
    }
}

/// Move to the previous line, clamping the column to its length
pub fn move_up(buffer: &Buffer, pos: Position) -> Position {
    if pos.line == 0 {
        return pos;
    }
    let target = pos.line - 1;
    Position::new(target, pos.column.min(buffer.line_len(target)))
}

/// Move to the next line, clamping the column to its length
pub fn move_down(buffer: &Buffer, pos: Position) -> Position {
    if pos.line >= buffer.last_line_index() {
        return pos;
    }
    let target = pos.line + 1;
    Position::new(target, pos.column.min(buffer.line_len(target)))
}

pub fn line_start(_buffer: &Buffer, pos: Position) -> Position {
    Position::new(pos.line, 0)
}

pub fn line_end(buffer: &Buffer, pos: Position) -> Position {
    Position::new(pos.line, buffer.line_len(pos.line))
}

pub fn document_start(_buffer: &Buffer, _pos: Position) -> Position {
    Position::zero()
}

pub fn document_end(buffer: &Buffer, _pos: Position) -> Position {
    let last = buffer.last_line_index();
    Position::new(last, buffer.line_len(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Buffer {
        Buffer::from_rows(vec![vec!["a", "b", "c"], vec!["d"], vec![]])
    }

    #[test]
    fn test_position_ordering() {
        let a = Position::new(0, 5);
        let b = Position::new(1, 0);
        let c = Position::new(1, 3);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let buffer = sample();
        assert_eq!(move_left(&buffer, Position::new(1, 0)), Position::new(0, 3));
        assert_eq!(move_left(&buffer, Position::new(0, 2)), Position::new(0, 1));
        assert_eq!(move_left(&buffer, Position::zero()), Position::zero());
    }

    #[test]
    fn test_move_right_wraps_to_next_line_start() {
        let buffer = sample();
        assert_eq!(move_right(&buffer, Position::new(0, 3)), Position::new(1, 0));
        assert_eq!(move_right(&buffer, Position::new(2, 0)), Position::new(2, 0));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let buffer = sample();
        assert_eq!(move_down(&buffer, Position::new(0, 3)), Position::new(1, 1));
        assert_eq!(move_down(&buffer, Position::new(1, 1)), Position::new(2, 0));
        assert_eq!(move_up(&buffer, Position::new(1, 1)), Position::new(0, 1));
        assert_eq!(move_up(&buffer, Position::new(0, 2)), Position::new(0, 2));
        assert_eq!(move_down(&buffer, Position::new(2, 0)), Position::new(2, 0));
    }

    #[test]
    fn test_clamp_stale_position() {
        let buffer = sample();
        assert_eq!(Position::new(9, 9).clamp(&buffer), Position::new(2, 0));
        assert_eq!(Position::new(0, 9).clamp(&buffer), Position::new(0, 3));
        assert!(Position::new(0, 3).is_valid_in(&buffer));
        assert!(!Position::new(1, 2).is_valid_in(&buffer));
    }

    #[test]
    fn test_document_edges() {
        let buffer = sample();
        assert_eq!(document_end(&buffer, Position::zero()), Position::new(2, 0));
        assert_eq!(line_end(&buffer, Position::new(0, 0)), Position::new(0, 3));
        assert_eq!(document_start(&buffer, Position::new(2, 0)), Position::zero());
    }
}
