//! The `letterdrill review` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use letterdrill_core::report::SessionReport;

pub fn execute(report: PathBuf, format: String) -> Result<()> {
    let report = SessionReport::load_json(&report)?;

    match format.as_str() {
        "text" => {
            println!(
                "Session {} ({})",
                report.id,
                report.created_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!(
                "Range: {}-{}",
                report.configuration.range_start, report.configuration.range_end
            );
            super::play::write_summary(&report.result, &mut io::stdout().lock())?;
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" | "md" => {
            print!("{}", report.to_markdown());
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json or markdown)"),
    }

    Ok(())
}
