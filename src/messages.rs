//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::TabId;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement only, never recorded in history)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveCursorDocumentEnd,
    /// Set cursor to a specific position (from a click), clamped
    SetCursorPosition { line: usize, column: usize },
    /// Select all (Ctrl+A) - moves the cursor to the end of the buffer
    SelectAll,
}

/// Document-specific messages (token editing, clipboard, undo/redo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a symbol token at the cursor (palette click or typed character)
    InsertToken(String),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Append an empty line at the end of the buffer
    AddLine,
    /// Delete token before cursor (Backspace)
    DeleteBackward,
    /// Delete token at cursor (Delete)
    DeleteForward,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
    /// Copy the current line (Ctrl+C)
    Copy,
    /// Cut the current line (Ctrl+X)
    Cut,
    /// Paste at the cursor (Ctrl+V)
    Paste,
}

/// Tab messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutMsg {
    /// Create a new blank tab and activate it
    NewTab,
    /// Close a specific tab (refused for the last tab)
    CloseTab(TabId),
    /// Close the active tab
    CloseActiveTab,
    /// Rename a tab; blank names are ignored
    RenameTab { tab_id: TabId, name: String },
    /// Activate a specific tab
    SwitchToTab(TabId),
    /// Switch to next tab
    NextTab,
    /// Switch to previous tab
    PrevTab,
}

/// Accessibility settings messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMsg {
    SetTextToSpeech(bool),
    /// Clamped to the supported range
    SetSymbolSize(u32),
    SetHighContrast(bool),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editor messages (cursor)
    Editor(EditorMsg),
    /// Document messages (editing)
    Document(DocumentMsg),
    /// Layout messages (tabs)
    Layout(LayoutMsg),
    /// Settings messages (accessibility)
    Settings(SettingsMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert token message
    pub fn insert(token: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertToken(token.into()))
    }
}
