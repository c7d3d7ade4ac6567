//! UI state - user-facing notices surfaced by the editing core

use std::fmt;

// ============================================================================
// Notices
// ============================================================================

/// A non-fatal, user-facing notification.
///
/// Refusals (`CannotUndo`, `CannotRedo`, `NothingToPaste`, `LastTab`) leave
/// the model unchanged; the rest confirm that an action happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    CannotUndo,
    CannotRedo,
    NothingToPaste,
    LastTab,
    Undone,
    Redone,
    Cut,
    Copied,
    Pasted,
    SelectedAll,
}

impl Notice {
    /// Short heading for a toast or status line
    pub fn title(&self) -> &'static str {
        match self {
            Notice::CannotUndo => "Cannot undo",
            Notice::CannotRedo => "Cannot redo",
            Notice::NothingToPaste => "Nothing to paste",
            Notice::LastTab => "Cannot delete tab",
            Notice::Undone => "Undone",
            Notice::Redone => "Redone",
            Notice::Cut => "Cut",
            Notice::Copied => "Copied",
            Notice::Pasted => "Pasted",
            Notice::SelectedAll => "Select All",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::CannotUndo => "There is nothing to undo",
            Notice::CannotRedo => "There is nothing to redo",
            Notice::NothingToPaste => "Clipboard is empty",
            Notice::LastTab => "The last tab cannot be deleted",
            Notice::Undone => "Previous state restored",
            Notice::Redone => "Action restored",
            Notice::Cut => "Content cut to clipboard",
            Notice::Copied => "Content copied to clipboard",
            Notice::Pasted => "Content pasted from clipboard",
            Notice::SelectedAll => "All content selected",
        }
    }

    /// True for notices reporting a refused operation
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Notice::CannotUndo | Notice::CannotRedo | Notice::NothingToPaste | Notice::LastTab
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// UI state exposed to the presentation layer
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Most recent notice, replaced by the next one
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
