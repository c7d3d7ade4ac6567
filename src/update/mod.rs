//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod editor;
mod layout;
mod settings;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{AppModel, Notice};

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use editor::update_editor;
pub use layout::update_layout;
pub use settings::update_settings;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // A notice only describes the message that produced it
    model.ui.clear_notice();

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Settings(m) => settings::update_settings(model, m),
    }
}

/// Bump the model revision and ask the runtime for a debounced session save
pub(crate) fn schedule_save(model: &mut AppModel) -> Cmd {
    let revision = model.bump_revision();
    Cmd::SaveSession {
        revision,
        delay_ms: model.config.save_debounce_ms,
    }
}

/// Record a notice on the model and return the command that surfaces it
pub(crate) fn notify(model: &mut AppModel, notice: Notice) -> Cmd {
    if notice.is_refusal() {
        tracing::debug!(%notice, "operation refused");
    }
    model.ui.set_notice(notice);
    Cmd::Notify(notice)
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = CursorSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = CursorSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }

    model.tabs.assert_invariants();
    model
        .active_tab()
        .assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertToken("sin")`
/// - `Layout::NewTab`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Settings(m) => format!("Settings::{:?}", m),
    }
}
