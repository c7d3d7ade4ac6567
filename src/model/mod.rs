//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod tabs;
pub mod ui;

pub use tabs::{TabEntry, TabError, TabId, TabRegistry};
pub use ui::{Notice, UiState};

use crate::config::EditorConfig;
use crate::editable::{Buffer, Clipboard, Position};
use crate::session::{SessionBundle, TabsBundle, TabRecord};
use crate::settings::AccessibilitySettings;

/// Read-only snapshot of one tab for drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub tab_id: TabId,
    pub display_name: String,
    pub buffer: Buffer,
    pub cursor: Position,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open tabs, one expression editor each
    pub tabs: TabRegistry,
    /// Shared by all tabs
    pub clipboard: Clipboard,
    /// Notices for the presentation layer
    pub ui: UiState,
    /// Accessibility settings for this session
    pub settings: AccessibilitySettings,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Bumped on every change that should reach the session store
    pub revision: u64,
}

impl AppModel {
    /// Create a fresh model with a single blank tab
    pub fn new(config: EditorConfig) -> Self {
        Self {
            tabs: TabRegistry::new(config.history_limit),
            clipboard: Clipboard::new(),
            ui: UiState::new(),
            settings: config.accessibility,
            config,
            revision: 0,
        }
    }

    /// Restore a model from a saved session. Histories start empty.
    pub fn from_session(bundle: SessionBundle, config: EditorConfig) -> Self {
        let TabsBundle {
            entries,
            active_tab,
            tab_count,
        } = bundle.tabs;

        let entries = entries
            .into_iter()
            .map(|record| (TabId(record.id), record.name, record.lines))
            .collect();
        let tabs = TabRegistry::restore(
            entries,
            TabId(active_tab),
            tab_count,
            config.history_limit,
        );

        tracing::info!(
            tabs = tabs.len(),
            active = %tabs.active_id(),
            "restored session"
        );

        Self {
            tabs,
            clipboard: Clipboard::new(),
            ui: UiState::new(),
            settings: bundle.settings.normalized(),
            config,
            revision: 0,
        }
    }

    /// Plain-data snapshot of every tab plus settings for the session store
    pub fn session_bundle(&self) -> SessionBundle {
        SessionBundle {
            tabs: TabsBundle {
                entries: self
                    .tabs
                    .iter()
                    .map(|tab| TabRecord {
                        id: tab.id.0,
                        name: tab.name().to_string(),
                        lines: tab.buffer().clone(),
                    })
                    .collect(),
                active_tab: self.tabs.active_id().0,
                tab_count: self.tabs.tab_count(),
            },
            settings: self.settings,
        }
    }

    /// Snapshot of a tab for drawing, `None` for unknown ids
    pub fn render_state(&self, tab_id: TabId) -> Option<RenderState> {
        self.tabs.get(tab_id).map(|tab| RenderState {
            tab_id,
            display_name: tab.name().to_string(),
            buffer: tab.buffer().clone(),
            cursor: tab.cursor(),
            can_undo: tab.can_undo(),
            can_redo: tab.can_redo(),
        })
    }

    // =========================================================================
    // Accessors for the active tab
    // =========================================================================

    #[inline]
    pub fn active_tab(&self) -> &TabEntry {
        self.tabs.active()
    }

    #[inline]
    pub fn active_tab_mut(&mut self) -> &mut TabEntry {
        self.tabs.active_mut()
    }

    #[inline]
    pub fn buffer(&self) -> &Buffer {
        self.tabs.active().buffer()
    }

    #[inline]
    pub fn cursor(&self) -> Position {
        self.tabs.active().cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.tabs.active().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.tabs.active().can_redo()
    }

    /// Record that persisted state changed, returning the new revision
    pub fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
