use anyhow::{Context, Result};
use clap::Parser;

use mathscribe::cli::CliArgs;
use mathscribe::config::EditorConfig;
use mathscribe::model::AppModel;
use mathscribe::runtime::{Runtime, TracingSpeech};
use mathscribe::session::JsonFileStore;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    mathscribe::tracing::init();

    let startup = args.into_config();
    let config = EditorConfig::load();

    let store = match startup.session_path {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default_location().context("No config directory available")?,
    };
    tracing::info!("Using session file {}", store.path().display());

    let mut runtime = if startup.restore {
        Runtime::restore(store, TracingSpeech, config)
    } else {
        Runtime::new(AppModel::new(config), store, TracingSpeech)
    };

    for key in &startup.keys {
        let Some(cmd) = runtime.handle_key(key) else {
            continue;
        };
        if let Some(notice) = cmd.notice().filter(|n| n.is_refusal()) {
            eprintln!("{}: {}", notice.title(), notice.description());
        }
    }

    if runtime.is_dirty() && !runtime.flush() {
        eprintln!("Warning: session was not saved");
    }

    if startup.print {
        let tab = runtime.model.active_tab();
        println!("# {}", tab.name());
        println!("{}", tab.buffer());
    }

    Ok(())
}
