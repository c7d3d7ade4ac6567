//! Settings update functions

use crate::commands::Cmd;
use crate::messages::SettingsMsg;
use crate::model::AppModel;

use super::schedule_save;

/// Handle accessibility settings messages
pub fn update_settings(model: &mut AppModel, msg: SettingsMsg) -> Option<Cmd> {
    let before = model.settings;

    match msg {
        SettingsMsg::SetTextToSpeech(enabled) => model.settings.text_to_speech = enabled,
        SettingsMsg::SetSymbolSize(size) => model.settings.set_symbol_size(size),
        SettingsMsg::SetHighContrast(enabled) => model.settings.high_contrast = enabled,
    }

    if model.settings == before {
        return None;
    }

    tracing::debug!(settings = ?model.settings, "accessibility settings changed");
    let save = schedule_save(model);
    Some(Cmd::batch([Cmd::Redraw, save]))
}
