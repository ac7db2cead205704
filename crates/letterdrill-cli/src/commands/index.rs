//! The `letterdrill index` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use letterdrill_core::alphabet::index_table;
use letterdrill_core::config::load_config_from;

pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let app = load_config_from(config.as_deref())?;
    println!("{}", render(app.show_phonetic));
    Ok(())
}

fn render(show_phonetic: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec!["Letter", "Number"];
    if show_phonetic {
        header.push("Phonetic");
    }
    table.set_header(header);

    for entry in index_table() {
        let mut row = vec![Cell::new(entry.letter), Cell::new(entry.index)];
        if show_phonetic {
            row.push(Cell::new(entry.phonetic));
        }
        table.add_row(row);
    }
    table
}
