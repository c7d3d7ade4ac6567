//! MathScribe - Elm-style token editor for math expressions
//!
//! This crate provides the core types and logic for a tabbed expression
//! editor whose documents are lines of symbol tokens, implementing the Elm
//! Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
