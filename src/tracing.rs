//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor, history, and tab state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=mathscribe::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/mathscribe/logs/mathscribe.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::Position;
use crate::model::{AppModel, TabId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/mathscribe/logs/mathscribe.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "mathscribe.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the active tab's editing state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub tab: TabId,
    pub cursor: Position,
    pub line_count: usize,
    pub undo_count: usize,
    pub redo_count: usize,
}

impl CursorSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let tab = model.active_tab();
        Self {
            tab: tab.id,
            cursor: tab.cursor(),
            line_count: tab.buffer().line_count(),
            undo_count: tab.history().undo_count(),
            redo_count: tab.history().redo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        if self.tab != other.tab {
            return Some(format!("active tab: {} → {}", self.tab, other.tab));
        }

        let mut changes = Vec::new();
        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.cursor.line, self.cursor.column, other.cursor.line, other.cursor.column
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines: {} → {}", self.line_count, other.line_count));
        }
        if self.undo_count != other.undo_count || self.redo_count != other.redo_count {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_count, self.redo_count, other.undo_count, other.redo_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Msg;
    use crate::update::update;

    #[test]
    fn test_diff_reports_cursor_and_history() {
        let mut model = AppModel::default();
        let before = CursorSnapshot::from_model(&model);
        update(&mut model, Msg::insert("x"));
        let after = CursorSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor: (0,0) → (0,1)"));
        assert!(diff.contains("history: 0/0 → 1/0"));
        assert_eq!(after.diff(&after), None);
    }
}
