//! Input translation: key events and palette clicks to messages
//!
//! A [`KeyEvent`] has a compact textual form so scripted sessions can be
//! written as plain strings:
//!
//! - `"x"`, `"7"`, `"plus"`, `"minus"`: a printable character
//! - `"enter"`, `"backspace"`, `"left"`, `"ctrl+home"`: named keys with modifiers
//! - `"ctrl+z"`, `"ctrl+shift+z"`: shortcuts
//! - `"sym:sin"`: a palette symbol, inserted as a single token

use std::fmt;
use std::str::FromStr;

use crate::commands::Cmd;
use crate::messages::{Direction, DocumentMsg, EditorMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// A logical key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character
    Char(char),
    /// A multi-character palette symbol such as `sin` or `√`
    Symbol(String),
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Escape,
    Tab,
}

/// A key press with its modifier state
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Errors that can occur when parsing a key string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
    UnknownKey(String),
    MultipleKeys(String),
    MissingKey(String),
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "Empty key string"),
            KeyParseError::UnknownKey(k) => write!(f, "Unknown key: {}", k),
            KeyParseError::MultipleKeys(k) => write!(f, "Multiple keys in: {}", k),
            KeyParseError::MissingKey(k) => write!(f, "No key found in: {}", k),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for KeyEvent {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        if let Some(symbol) = s.strip_prefix("sym:") {
            if symbol.is_empty() {
                return Err(KeyParseError::MissingKey(s.to_string()));
            }
            return Ok(KeyEvent::new(Key::Symbol(symbol.to_string())));
        }

        // A lone character, including '+' itself
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyEvent::new(Key::Char(c)));
        }

        let mut event = KeyEvent::new(Key::Escape);
        let mut key_part = None;

        for part in s.split('+') {
            let part_lower = part.to_lowercase();
            match part_lower.as_str() {
                "ctrl" | "control" | "cmd" => event.ctrl = true,
                "shift" => event.shift = true,
                _ => {
                    if key_part.is_some() {
                        return Err(KeyParseError::MultipleKeys(s.to_string()));
                    }
                    key_part = Some(parse_key(part, &part_lower)?);
                }
            }
        }

        event.key = key_part.ok_or_else(|| KeyParseError::MissingKey(s.to_string()))?;
        Ok(event)
    }
}

fn parse_key(raw: &str, lower: &str) -> Result<Key, KeyParseError> {
    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }

    match lower {
        "enter" | "return" => Ok(Key::Enter),
        "backspace" | "back" => Ok(Key::Backspace),
        "delete" | "del" => Ok(Key::Delete),
        "up" | "arrowup" => Ok(Key::Up),
        "down" | "arrowdown" => Ok(Key::Down),
        "left" | "arrowleft" => Ok(Key::Left),
        "right" | "arrowright" => Ok(Key::Right),
        "home" => Ok(Key::Home),
        "end" => Ok(Key::End),
        "escape" | "esc" => Ok(Key::Escape),
        "tab" => Ok(Key::Tab),
        "space" => Ok(Key::Char(' ')),
        "plus" => Ok(Key::Char('+')),
        "minus" => Ok(Key::Char('-')),
        _ => Err(KeyParseError::UnknownKey(raw.to_string())),
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Key::Symbol(symbol) = &self.key {
            return write!(f, "sym:{}", symbol);
        }
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        match &self.key {
            Key::Char('+') => write!(f, "plus"),
            Key::Char('-') => write!(f, "minus"),
            Key::Char(' ') => write!(f, "space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Symbol(_) => Ok(()),
            Key::Enter => write!(f, "enter"),
            Key::Backspace => write!(f, "backspace"),
            Key::Delete => write!(f, "delete"),
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Home => write!(f, "home"),
            Key::End => write!(f, "end"),
            Key::Escape => write!(f, "escape"),
            Key::Tab => write!(f, "tab"),
        }
    }
}

/// Map a key event to the message it triggers, if any
pub fn key_to_msg(event: &KeyEvent) -> Option<Msg> {
    let KeyEvent { key, ctrl, shift } = event;

    let msg = match key {
        // Shortcuts
        Key::Char(c) if *ctrl => match c.to_ascii_lowercase() {
            'z' if *shift => Msg::Document(DocumentMsg::Redo),
            'z' => Msg::Document(DocumentMsg::Undo),
            'y' => Msg::Document(DocumentMsg::Redo),
            'x' => Msg::Document(DocumentMsg::Cut),
            'c' => Msg::Document(DocumentMsg::Copy),
            'v' => Msg::Document(DocumentMsg::Paste),
            'a' => Msg::Editor(EditorMsg::SelectAll),
            _ => return None,
        },

        Key::Char(c) if c.is_control() => return None,
        Key::Char(c) => Msg::insert(c.to_string()),
        Key::Symbol(symbol) => Msg::insert(symbol.clone()),

        // Editing
        Key::Enter => Msg::Document(DocumentMsg::InsertNewline),
        Key::Backspace => Msg::Document(DocumentMsg::DeleteBackward),
        Key::Delete => Msg::Document(DocumentMsg::DeleteForward),

        // Navigation
        Key::Up => Msg::move_cursor(Direction::Up),
        Key::Down => Msg::move_cursor(Direction::Down),
        Key::Left => Msg::move_cursor(Direction::Left),
        Key::Right => Msg::move_cursor(Direction::Right),
        Key::Home if *ctrl => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
        Key::Home => Msg::Editor(EditorMsg::MoveCursorLineStart),
        Key::End if *ctrl => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),
        Key::End => Msg::Editor(EditorMsg::MoveCursorLineEnd),

        Key::Escape | Key::Tab => return None,
    };

    Some(msg)
}

/// Handle a keyboard event from the presentation layer
pub fn on_key_event(model: &mut AppModel, event: &KeyEvent) -> Option<Cmd> {
    let Some(msg) = key_to_msg(event) else {
        tracing::trace!(key = %event, "unmapped key");
        return None;
    };
    update(model, msg)
}

/// Handle a symbol-palette click: insert the symbol as one token
///
/// When text-to-speech is enabled the returned command includes a
/// [`Cmd::Speak`] for the inserted symbol.
pub fn on_symbol_insert(model: &mut AppModel, token: &str) -> Option<Cmd> {
    update(model, Msg::insert(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_characters() {
        assert_eq!("x".parse::<KeyEvent>(), Ok(KeyEvent::new(Key::Char('x'))));
        assert_eq!("+".parse::<KeyEvent>(), Ok(KeyEvent::new(Key::Char('+'))));
        assert_eq!("²".parse::<KeyEvent>(), Ok(KeyEvent::new(Key::Char('²'))));
        assert_eq!(
            "plus".parse::<KeyEvent>(),
            Ok(KeyEvent::new(Key::Char('+')))
        );
    }

    #[test]
    fn test_parse_modifiers_and_named_keys() {
        assert_eq!(
            "ctrl+shift+z".parse::<KeyEvent>(),
            Ok(KeyEvent::ctrl(Key::Char('z')).with_shift())
        );
        assert_eq!(
            "Ctrl+Home".parse::<KeyEvent>(),
            Ok(KeyEvent::ctrl(Key::Home))
        );
        assert_eq!("enter".parse::<KeyEvent>(), Ok(KeyEvent::new(Key::Enter)));
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(
            "sym:sin".parse::<KeyEvent>(),
            Ok(KeyEvent::new(Key::Symbol("sin".into())))
        );
        assert_eq!(
            "sym:a+b".parse::<KeyEvent>(),
            Ok(KeyEvent::new(Key::Symbol("a+b".into())))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyEvent>(), Err(KeyParseError::Empty));
        assert!(matches!(
            "hyper".parse::<KeyEvent>(),
            Err(KeyParseError::UnknownKey(_))
        ));
        assert!(matches!(
            "ctrl+a+b".parse::<KeyEvent>(),
            Err(KeyParseError::MultipleKeys(_))
        ));
        assert!(matches!(
            "ctrl+shift".parse::<KeyEvent>(),
            Err(KeyParseError::MissingKey(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for text in ["ctrl+shift+z", "enter", "x", "plus", "sym:sin", "ctrl+end"] {
            let event: KeyEvent = text.parse().unwrap();
            assert_eq!(event.to_string(), text);
        }
    }

    #[test]
    fn test_key_to_msg_shortcuts() {
        let msg = |s: &str| key_to_msg(&s.parse().unwrap());

        assert_eq!(msg("ctrl+z"), Some(Msg::Document(DocumentMsg::Undo)));
        assert_eq!(msg("ctrl+y"), Some(Msg::Document(DocumentMsg::Redo)));
        assert_eq!(msg("ctrl+shift+z"), Some(Msg::Document(DocumentMsg::Redo)));
        assert_eq!(msg("ctrl+a"), Some(Msg::Editor(EditorMsg::SelectAll)));
        assert_eq!(msg("ctrl+q"), None);
        assert_eq!(msg("escape"), None);
        assert_eq!(msg("7"), Some(Msg::insert("7")));
    }
}
