//! The `letterdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("letterdrill.toml").exists() {
        println!("letterdrill.toml already exists, skipping.");
    } else {
        std::fs::write("letterdrill.toml", SAMPLE_CONFIG)?;
        println!("Created letterdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit letterdrill.toml to taste");
    println!("  2. Run: letterdrill index");
    println!("  3. Run: letterdrill play --mode mix --start A --end M");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# letterdrill configuration

# Where the last-used drill settings are remembered.
# settings_path = "~/.config/letterdrill/settings.json"

# Print NATO phonetic words next to letters.
show_phonetic = true

# Show the correct answer after a wrong submission.
reveal_answers = true

# Archive a JSON report of every session here.
# report_dir = "reports"
"#;
