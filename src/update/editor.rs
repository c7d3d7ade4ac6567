//! Editor update functions for cursor movement

use crate::commands::Cmd;
use crate::editable::{cursor, select_all, Position};
use crate::messages::{Direction, EditorMsg};
use crate::model::{AppModel, Notice};

use super::notify;

/// Handle editor messages (cursor movement)
///
/// Navigation never touches the buffer or its history.
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let tab = model.tabs.active();
    let buffer = tab.buffer();
    let current = tab.cursor();

    let next = match msg {
        EditorMsg::MoveCursor(Direction::Left) => cursor::move_left(buffer, current),
        EditorMsg::MoveCursor(Direction::Right) => cursor::move_right(buffer, current),
        EditorMsg::MoveCursor(Direction::Up) => cursor::move_up(buffer, current),
        EditorMsg::MoveCursor(Direction::Down) => cursor::move_down(buffer, current),
        EditorMsg::MoveCursorLineStart => cursor::line_start(buffer, current),
        EditorMsg::MoveCursorLineEnd => cursor::line_end(buffer, current),
        EditorMsg::MoveCursorDocumentStart => cursor::document_start(buffer, current),
        EditorMsg::MoveCursorDocumentEnd => cursor::document_end(buffer, current),
        EditorMsg::SetCursorPosition { line, column } => {
            Position::new(line, column).clamp(buffer)
        }
        EditorMsg::SelectAll => {
            let end = select_all(buffer);
            model.tabs.active_mut().set_cursor(end);
            let notice = notify(model, Notice::SelectedAll);
            return Some(Cmd::batch([Cmd::Redraw, notice]));
        }
    };

    if next == current {
        return None;
    }

    model.tabs.active_mut().set_cursor(next);
    Some(Cmd::Redraw)
}
