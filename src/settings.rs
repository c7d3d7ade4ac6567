//! Accessibility settings carried with a session
//!
//! These travel inside the session bundle next to the tab contents, and the
//! config file provides the defaults for fresh sessions.

use serde::{Deserialize, Serialize};

/// Smallest symbol size the palette renders, in pixels
pub const MIN_SYMBOL_SIZE: u32 = 12;
/// Largest symbol size the palette renders, in pixels
pub const MAX_SYMBOL_SIZE: u32 = 32;
pub const DEFAULT_SYMBOL_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Speak each inserted symbol
    #[serde(default)]
    pub text_to_speech: bool,
    #[serde(default = "default_symbol_size")]
    pub symbol_size: u32,
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_symbol_size() -> u32 {
    DEFAULT_SYMBOL_SIZE
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            text_to_speech: false,
            symbol_size: DEFAULT_SYMBOL_SIZE,
            high_contrast: false,
        }
    }
}

impl AccessibilitySettings {
    /// Set the symbol size, clamped to the supported range
    pub fn set_symbol_size(&mut self, size: u32) {
        self.symbol_size = size.clamp(MIN_SYMBOL_SIZE, MAX_SYMBOL_SIZE);
    }

    /// Copy with out-of-range values pulled back into range
    pub fn normalized(mut self) -> Self {
        self.set_symbol_size(self.symbol_size);
        self
    }
}
