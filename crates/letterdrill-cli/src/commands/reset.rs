//! The `letterdrill reset` command.

use std::path::PathBuf;

use anyhow::Result;

use letterdrill_core::config::load_config_from;
use letterdrill_core::settings::{clear_settings, FileStore};

pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let app = load_config_from(config.as_deref())?;
    let mut store = FileStore::new(&app.settings_path);
    clear_settings(&mut store);
    println!("Settings cleared ({})", store.path().display());
    Ok(())
}
