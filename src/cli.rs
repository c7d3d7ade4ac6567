//! Command-line argument parsing for the editor driver
//!
//! Supports:
//! - Choosing the session file
//! - Starting without the saved session
//! - Scripted key events
//! - Printing the active tab

use clap::Parser;
use std::path::PathBuf;

use crate::input::KeyEvent;

/// A token-based math expression editor
#[derive(Parser, Debug)]
#[command(
    name = "mathscribe",
    version,
    about = "A token-based math expression editor"
)]
pub struct CliArgs {
    /// Session file to restore from and save to
    #[arg(long, value_name = "PATH")]
    pub session: Option<PathBuf>,

    /// Start with a blank tab (ignore session restore)
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Key events to apply in order, e.g. `x plus 2 enter ctrl+z sym:sin`
    #[arg(short = 'k', long, value_name = "KEY", num_args = 1..)]
    pub keys: Vec<KeyEvent>,

    /// Print the active tab as text when done
    #[arg(short = 'p', long)]
    pub print: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Explicit session file, `None` for the default location
    pub session_path: Option<PathBuf>,
    /// Restore the saved session before applying keys
    pub restore: bool,
    pub keys: Vec<KeyEvent>,
    pub print: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        StartupConfig {
            session_path: self.session,
            restore: !self.new,
            keys: self.keys,
            print: self.print,
        }
    }
}
