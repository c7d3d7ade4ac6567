//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mathscribe::config::EditorConfig;
use mathscribe::editable::{Buffer, Position};
use mathscribe::model::{AppModel, TabId, TabRegistry};

/// Build a buffer from rows of token strings
pub fn buffer(rows: &[&[&str]]) -> Buffer {
    Buffer::from_rows(rows.iter().map(|row| row.iter().copied()))
}

/// Create a test model whose single tab holds `rows`, with the cursor at (line, column)
pub fn test_model(rows: &[&[&str]], line: usize, column: usize) -> AppModel {
    let config = EditorConfig::default();
    let tabs = TabRegistry::restore(
        vec![(TabId(1), "Tab 1".to_string(), buffer(rows))],
        TabId(1),
        1,
        config.history_limit,
    );

    let mut model = AppModel {
        tabs,
        ..AppModel::new(config)
    };
    model
        .tabs
        .active_mut()
        .set_cursor(Position::new(line, column));
    model
}

/// Active tab contents as plain rows
pub fn rows(model: &AppModel) -> Vec<Vec<String>> {
    model.buffer().to_rows()
}

/// Expected rows in the same shape as [`rows`]
pub fn expected(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|t| t.to_string()).collect())
        .collect()
}

/// Active cursor as (line, column)
pub fn cursor(model: &AppModel) -> (usize, usize) {
    let pos = model.cursor();
    (pos.line, pos.column)
}
