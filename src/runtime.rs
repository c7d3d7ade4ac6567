//! Runtime - executes the commands returned by `update`
//!
//! The runtime owns the model, a [`SessionStore`] and a [`SpeechSink`]. Saves
//! are debounced: each `SaveSession` command moves a single pending deadline,
//! and the host loop calls [`Runtime::flush_due`] to save once it has passed.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::input::{on_key_event, KeyEvent};
use crate::messages::Msg;
use crate::model::AppModel;
use crate::session::SessionStore;
use crate::update::update;

/// Text-to-speech output (fire-and-forget)
pub trait SpeechSink {
    fn speak(&mut self, text: &str);
}

/// Logs each utterance at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSpeech;

impl SpeechSink for TracingSpeech {
    fn speak(&mut self, text: &str) {
        tracing::info!(target: "speech", "{}", text);
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechSink for NullSpeech {
    fn speak(&mut self, _text: &str) {}
}

/// A save that has been requested but not yet written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSave {
    pub revision: u64,
    pub deadline: Instant,
}

pub struct Runtime<S: SessionStore, P: SpeechSink> {
    pub model: AppModel,
    store: S,
    speech: P,
    pending_save: Option<PendingSave>,
    saved_revision: u64,
}

impl<S: SessionStore, P: SpeechSink> Runtime<S, P> {
    pub fn new(model: AppModel, store: S, speech: P) -> Self {
        let saved_revision = model.revision;
        Self {
            model,
            store,
            speech,
            pending_save: None,
            saved_revision,
        }
    }

    /// Restore the saved session from the store, or start fresh.
    ///
    /// A store that fails to load is logged and treated as empty.
    pub fn restore(mut store: S, speech: P, config: EditorConfig) -> Self {
        let model = match store.load() {
            Ok(Some(bundle)) => AppModel::from_session(bundle, config),
            Ok(None) => AppModel::new(config),
            Err(err) => {
                tracing::warn!("Failed to load session, starting fresh: {:#}", err);
                AppModel::new(config)
            }
        };
        Self::new(model, store, speech)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn speech(&self) -> &P {
        &self.speech
    }

    pub fn pending_save(&self) -> Option<PendingSave> {
        self.pending_save
    }

    /// Run a message through `update` and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        self.dispatch_at(msg, Instant::now())
    }

    /// Like [`Runtime::dispatch`] with an explicit clock
    pub fn dispatch_at(&mut self, msg: Msg, now: Instant) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg);
        if let Some(cmd) = &cmd {
            self.execute(cmd, now);
        }
        cmd
    }

    /// Translate a key event and execute the resulting command
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Cmd> {
        self.handle_key_at(event, Instant::now())
    }

    /// Like [`Runtime::handle_key`] with an explicit clock
    pub fn handle_key_at(&mut self, event: &KeyEvent, now: Instant) -> Option<Cmd> {
        let cmd = on_key_event(&mut self.model, event);
        if let Some(cmd) = &cmd {
            self.execute(cmd, now);
        }
        cmd
    }

    /// Execute a command returned by `update` outside of `dispatch`
    pub fn execute(&mut self, cmd: &Cmd, now: Instant) {
        match cmd {
            Cmd::None | Cmd::Redraw | Cmd::Notify(_) => {}
            Cmd::Speak(text) => self.speech.speak(text),
            Cmd::SaveSession { revision, delay_ms } => {
                self.pending_save = Some(PendingSave {
                    revision: *revision,
                    deadline: now + Duration::from_millis(*delay_ms),
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd, now);
                }
            }
        }
    }

    /// Save if the pending deadline has passed. Returns true when a save ran.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        match self.pending_save {
            Some(pending) if pending.deadline <= now => self.flush(),
            _ => false,
        }
    }

    /// Save immediately if anything is pending. Returns true when a save ran.
    ///
    /// A failed save is logged and stays pending for the next flush.
    pub fn flush(&mut self) -> bool {
        let Some(pending) = self.pending_save else {
            return false;
        };

        match self.save_now() {
            Ok(()) => {
                self.pending_save = None;
                self.saved_revision = pending.revision.max(self.model.revision);
                true
            }
            Err(err) => {
                tracing::warn!("Failed to save session: {:#}", err);
                false
            }
        }
    }

    /// Whether the model has changes the store has not seen
    pub fn is_dirty(&self) -> bool {
        self.model.revision != self.saved_revision
    }

    fn save_now(&mut self) -> Result<()> {
        let bundle = self.model.session_bundle();
        self.store.save(&bundle)
    }
}
