//! Structural edit operations on a token buffer.
//!
//! Every operation is copy-on-write: it reads the input buffer, builds a new
//! one, and returns it together with the resulting cursor. `None` means the
//! operation was a no-op at a buffer boundary and nothing should be recorded.

use super::buffer::{Buffer, Line, Token};
use super::cursor::Position;

/// Result of a successful edit: the new buffer and where the cursor lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub buffer: Buffer,
    pub cursor: Position,
}

impl Edit {
    pub fn new(buffer: Buffer, cursor: Position) -> Self {
        Self { buffer, cursor }
    }
}

/// Insert `token` before the token at `pos`.
///
/// Empty tokens are not stored, so inserting one is a no-op.
pub fn insert_token(buffer: &Buffer, pos: Position, token: Token) -> Option<Edit> {
    if token.is_empty() {
        return None;
    }
    let pos = pos.clamp(buffer);
    let mut next = buffer.clone();
    next.line_mut(pos.line).insert(pos.column, token);
    Some(Edit::new(next, Position::new(pos.line, pos.column + 1)))
}

/// Append an empty line at the end of the buffer
pub fn add_line(buffer: &Buffer) -> Edit {
    let mut next = buffer.clone();
    next.push_line(Line::new());
    let last = next.last_line_index();
    Edit::new(next, Position::new(last, 0))
}

/// Break the current line at the cursor, moving the suffix to a new line
pub fn split_line_at_cursor(buffer: &Buffer, pos: Position) -> Edit {
    let pos = pos.clamp(buffer);
    let mut next = buffer.clone();
    let suffix = next.line_mut(pos.line).split_off(pos.column);
    next.insert_line(pos.line + 1, suffix);
    Edit::new(next, Position::new(pos.line + 1, 0))
}

/// Delete the token before the cursor, or join with the previous line
pub fn backspace(buffer: &Buffer, pos: Position) -> Option<Edit> {
    let pos = pos.clamp(buffer);

    if pos.column > 0 {
        let mut next = buffer.clone();
        next.line_mut(pos.line).remove(pos.column - 1);
        return Some(Edit::new(next, Position::new(pos.line, pos.column - 1)));
    }

    if pos.line > 0 {
        let mut next = buffer.clone();
        let joined_at = next.line_len(pos.line - 1);
        let current = next.remove_line(pos.line);
        next.line_mut(pos.line - 1).append(current);
        return Some(Edit::new(next, Position::new(pos.line - 1, joined_at)));
    }

    None
}

/// Delete the token at the cursor, or pull the next line up
pub fn forward_delete(buffer: &Buffer, pos: Position) -> Option<Edit> {
    let pos = pos.clamp(buffer);

    if pos.column < buffer.line_len(pos.line) {
        let mut next = buffer.clone();
        next.line_mut(pos.line).remove(pos.column);
        return Some(Edit::new(next, pos));
    }

    if pos.line < buffer.last_line_index() {
        let mut next = buffer.clone();
        let following = next.remove_line(pos.line + 1);
        next.line_mut(pos.line).append(following);
        return Some(Edit::new(next, pos));
    }

    None
}
