//! List rules command implementation.

use anyhow::Result;
use lidder_core::Definitions;

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
///
/// Patterns are compiled first so a broken configuration is reported here
/// rather than at check time.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let definitions = Definitions::from_config(&config)?;

    if definitions.rules().is_empty() {
        println!("No rules configured.");
        return Ok(());
    }

    println!("Configured rules:\n");
    for rule in definitions.rules() {
        println!("{}", rule.source());
        if rule.expected().is_empty() {
            println!("  (not expected anywhere)");
        }
        for path in rule.expected() {
            println!("   - {path}");
        }
    }

    println!("\nInclude: {}", join(&config.include));
    println!("Exclude: {}", join(&config.exclude));

    Ok(())
}

fn join(patterns: &[String]) -> String {
    if patterns.is_empty() {
        "(none)".to_string()
    } else {
        patterns.join(", ")
    }
}
