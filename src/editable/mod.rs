//! Token-based expression editing.
//!
//! This module holds the editing core shared by every tab:
//!
//! - [`Buffer`] / [`Line`] / [`Token`]: the 2D token grid
//! - [`Position`] and the movement functions in [`cursor`]
//! - [`edit`]: copy-on-write structural operations returning an [`Edit`]
//! - [`Clipboard`]: whole-line cut/copy/paste
//! - [`EditHistory`]: linear undo/redo over buffer snapshots
//!
//! # Example
//!
//! ```
//! use mathscribe::editable::{edit, Buffer, EditHistory, Position};
//!
//! let mut history = EditHistory::new(Buffer::new());
//! let step = edit::insert_token(history.present(), Position::zero(), "π".into()).unwrap();
//! history.record_change(step.buffer);
//!
//! assert_eq!(history.present().to_string(), "π");
//! assert!(history.undo().is_some());
//! assert!(history.present().is_blank());
//! ```

mod buffer;
mod clipboard;
pub mod cursor;
pub mod edit;
mod history;

// Re-export main types
pub use buffer::{Buffer, Line, Token};
pub use clipboard::{select_all, Clipboard};
pub use cursor::Position;
pub use edit::Edit;
pub use history::{EditHistory, DEFAULT_MAX_DEPTH};
