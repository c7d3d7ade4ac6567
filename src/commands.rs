//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::Notice;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the active tab
    Redraw,
    /// Speak text through the speech sink (fire-and-forget)
    Speak(String),
    /// Show a notice to the user
    Notify(Notice),
    /// Save the session once no newer revision arrives within `delay_ms`
    SaveSession { revision: u64, delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, flattening `None` and single-element batches
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::Speak(_) | Cmd::SaveSession { .. } => false,
            Cmd::Redraw | Cmd::Notify(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Iterate over this command and everything nested in batches
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.flatten()).collect(),
            other => vec![other],
        }
    }

    /// The notice carried by this command or its batch, if any
    pub fn notice(&self) -> Option<Notice> {
        self.flatten().into_iter().find_map(|c| match c {
            Cmd::Notify(notice) => Some(*notice),
            _ => None,
        })
    }
}
