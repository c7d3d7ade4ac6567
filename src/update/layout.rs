//! Layout update functions for the tab registry

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, Notice, TabError, TabId};

use super::{notify, schedule_save};

/// Handle layout messages (tab management)
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::NewTab => {
            model.tabs.add_tab();
            Some(changed(model))
        }

        LayoutMsg::CloseTab(tab_id) => close_tab(model, tab_id),

        LayoutMsg::CloseActiveTab => {
            let tab_id = model.tabs.active_id();
            close_tab(model, tab_id)
        }

        LayoutMsg::RenameTab { tab_id, name } => {
            if !model.tabs.rename_tab(tab_id, &name) {
                return None;
            }
            Some(changed(model))
        }

        LayoutMsg::SwitchToTab(tab_id) => {
            if tab_id == model.tabs.active_id() || !model.tabs.activate(tab_id) {
                return None;
            }
            Some(changed(model))
        }

        LayoutMsg::NextTab => {
            let before = model.tabs.active_id();
            model.tabs.next_tab();
            (model.tabs.active_id() != before).then(|| changed(model))
        }

        LayoutMsg::PrevTab => {
            let before = model.tabs.active_id();
            model.tabs.prev_tab();
            (model.tabs.active_id() != before).then(|| changed(model))
        }
    }
}

fn close_tab(model: &mut AppModel, tab_id: TabId) -> Option<Cmd> {
    match model.tabs.remove_tab(tab_id) {
        Ok(_) => Some(changed(model)),
        Err(TabError::LastTab) => Some(notify(model, Notice::LastTab)),
        Err(err @ TabError::NotFound(_)) => {
            tracing::warn!("close tab ignored: {}", err);
            None
        }
    }
}

/// The registry changed shape or focus: redraw and persist
fn changed(model: &mut AppModel) -> Cmd {
    let save = schedule_save(model);
    Cmd::batch([Cmd::Redraw, save])
}
