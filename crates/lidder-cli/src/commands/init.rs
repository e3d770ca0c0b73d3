//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_TOML: &str = r#"# lidder configuration
#
# Files whose path matches an `include` regex are scanned, unless the path
# also matches an `exclude` regex. Each rule's `pattern` may only occur in
# the files listed under `expected`.

include = ['\.go$']
exclude = ['^vendor/', '_test\.go$']

[[rules]]
pattern = 'panic\('
expected = []

# [[rules]]
# pattern = 'TODO'
# expected = ["legacy/old.go"]
"#;

const DEFAULT_YAML: &str = r#"# lidder configuration
#
# Files whose path matches an `include` regex are scanned, unless the path
# also matches an `exclude` regex. Each rule's `pattern` may only occur in
# the files listed under `expected`.

include:
  - '\.go$'
exclude:
  - '^vendor/'
  - '_test\.go$'
rules:
  - pattern: 'panic\('
    expected: []
#  - pattern: 'TODO'
#    expected:
#      - legacy/old.go
"#;

/// Runs the init command.
pub fn run(dir: &Path, force: bool, yaml: bool) -> Result<()> {
    let (name, content) = if yaml {
        ("lidder.yaml", DEFAULT_YAML)
    } else {
        ("lidder.toml", DEFAULT_TOML)
    };
    let config_path = dir.join(name);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, content)?;

    println!("Created {name}");
    println!("\nNext steps:");
    println!("  1. Edit {name} to list your lidded patterns");
    println!("  2. Run: lidder check");

    Ok(())
}
