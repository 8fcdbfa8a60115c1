//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "methodmatch.toml";

const DEFAULT_CONFIG: &str = r#"# methodmatch configuration

[settings]
# Presets, catalog entry names or codes to enable (default: ["recommended"])
presets = ["recommended"]

# Exit with status 1 when a finding at or above this severity is reported
fail-on = "error"

# Custom matchers. Tables sharing an `id` form one group.
# Each table needs a type criterion, a name criterion and a parameter criterion.

[[matcher]]
id = "no-system-exit"
types = ["java.lang.System"]
names = ["exit"]
parameters = [["int"]]
message = "Do not call System.exit"
severity = "warning"

# [[matcher]]
# id = "no-collection-clear"
# subtypes = ["java.util.Collection"]
# names = ["clear"]
# any-parameters = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to add matchers");
    println!("  2. Run: methodmatch check <snapshot.toml>");

    Ok(())
}
