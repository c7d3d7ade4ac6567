//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/mathscribe/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_MAX_DEPTH;
use crate::settings::AccessibilitySettings;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum undo snapshots kept per tab
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Delay between the last edit and the session save
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,

    /// Accessibility defaults for sessions that have none saved
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

fn default_history_limit() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_save_debounce_ms() -> u64 {
    1000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            save_debounce_ms: default_save_debounce_ms(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        crate::config_paths::ensure_parent_dir(path)?;

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.history_limit = self.history_limit.max(1);
        self.accessibility = self.accessibility.normalized();
        self
    }
}
