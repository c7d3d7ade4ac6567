//! Session bundle and the persistence seam
//!
//! The editor hands a [`SessionBundle`] (every tab's lines and name, the
//! active tab, and the accessibility settings) to a [`SessionStore`]. Where
//! the bundle ends up is the store's business; [`JsonFileStore`] keeps it in
//! a local JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::Buffer;
use crate::settings::AccessibilitySettings;

/// One saved tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: u64,
    pub name: String,
    /// Rows of token strings
    pub lines: Buffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsBundle {
    pub entries: Vec<TabRecord>,
    pub active_tab: u64,
    /// Highest tab id ever allocated
    pub tab_count: u64,
}

/// Everything the persistence layer stores for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBundle {
    pub tabs: TabsBundle,
    #[serde(default)]
    pub settings: AccessibilitySettings,
}

/// Persistence service for session bundles
pub trait SessionStore {
    /// Load the saved bundle, `None` when nothing has been saved yet
    fn load(&mut self) -> Result<Option<SessionBundle>>;

    fn save(&mut self, bundle: &SessionBundle) -> Result<()>;
}

// =============================================================================
// JSON file store
// =============================================================================

/// Stores the bundle as pretty-printed JSON at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/mathscribe/session.json`
    pub fn default_location() -> Option<Self> {
        crate::config_paths::session_file().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<SessionBundle>> {
        if !self.path.exists() {
            tracing::debug!("No session at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session {}", self.path.display()))?;
        let bundle = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session {}", self.path.display()))?;

        tracing::info!("Loaded session from {}", self.path.display());
        Ok(Some(bundle))
    }

    fn save(&mut self, bundle: &SessionBundle) -> Result<()> {
        crate::config_paths::ensure_parent_dir(&self.path)?;

        let content =
            serde_json::to_string_pretty(bundle).context("Failed to serialize session")?;

        // Sibling temp file, then rename over the target
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)
            .with_context(|| format!("Failed to write session {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace session {}", self.path.display()))?;

        tracing::info!("Saved session to {}", self.path.display());
        Ok(())
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Keeps the last saved bundle in memory and counts saves
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub bundle: Option<SessionBundle>,
    pub saves: usize,
}

impl SessionStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SessionBundle>> {
        Ok(self.bundle.clone())
    }

    fn save(&mut self, bundle: &SessionBundle) -> Result<()> {
        self.bundle = Some(bundle.clone());
        self.saves += 1;
        Ok(())
    }
}
