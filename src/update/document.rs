//! Document update functions for token editing, clipboard and undo/redo

use crate::commands::Cmd;
use crate::editable::{edit, Edit, Token};
use crate::messages::DocumentMsg;
use crate::model::{AppModel, Notice};

use super::{notify, schedule_save};

/// Handle document messages (token editing, clipboard, undo/redo)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertToken(text) => {
            let tab = model.tabs.active();
            let edit = edit::insert_token(tab.buffer(), tab.cursor(), Token::from(text.as_str()))?;
            let cmd = commit(model, edit);

            if model.settings.text_to_speech {
                Some(Cmd::batch([cmd, Cmd::Speak(text)]))
            } else {
                Some(cmd)
            }
        }

        DocumentMsg::InsertNewline => {
            let tab = model.tabs.active();
            let edit = edit::split_line_at_cursor(tab.buffer(), tab.cursor());
            Some(commit(model, edit))
        }

        DocumentMsg::AddLine => {
            let edit = edit::add_line(model.tabs.active().buffer());
            Some(commit(model, edit))
        }

        DocumentMsg::DeleteBackward => {
            let tab = model.tabs.active();
            let edit = edit::backspace(tab.buffer(), tab.cursor())?;
            Some(commit(model, edit))
        }

        DocumentMsg::DeleteForward => {
            let tab = model.tabs.active();
            let edit = edit::forward_delete(tab.buffer(), tab.cursor())?;
            Some(commit(model, edit))
        }

        DocumentMsg::Undo => {
            if !model.tabs.active_mut().undo() {
                return Some(notify(model, Notice::CannotUndo));
            }
            let save = schedule_save(model);
            let notice = notify(model, Notice::Undone);
            Some(Cmd::batch([Cmd::Redraw, save, notice]))
        }

        DocumentMsg::Redo => {
            if !model.tabs.active_mut().redo() {
                return Some(notify(model, Notice::CannotRedo));
            }
            let save = schedule_save(model);
            let notice = notify(model, Notice::Redone);
            Some(Cmd::batch([Cmd::Redraw, save, notice]))
        }

        DocumentMsg::Copy => {
            let tab = model.tabs.active();
            if !model.clipboard.copy(tab.buffer(), tab.cursor()) {
                return None;
            }
            Some(notify(model, Notice::Copied))
        }

        DocumentMsg::Cut => {
            let tab = model.tabs.active();
            let edit = model.clipboard.cut(tab.buffer(), tab.cursor())?;
            let cmd = commit(model, edit);
            let notice = notify(model, Notice::Cut);
            Some(Cmd::batch([cmd, notice]))
        }

        DocumentMsg::Paste => {
            let tab = model.tabs.active();
            let Some(edit) = model.clipboard.paste(tab.buffer(), tab.cursor()) else {
                return Some(notify(model, Notice::NothingToPaste));
            };
            let cmd = commit(model, edit);
            let notice = notify(model, Notice::Pasted);
            Some(Cmd::batch([cmd, notice]))
        }
    }
}

/// Record an edit in the active tab's history and schedule a save
fn commit(model: &mut AppModel, edit: Edit) -> Cmd {
    model.tabs.active_mut().commit(edit);
    let save = schedule_save(model);
    Cmd::batch([Cmd::Redraw, save])
}
