//! Output formatting for check results.

use anyhow::Result;
use lidder_core::{LidReport, ReportMode};
use std::io::Write;

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(report: &LidReport, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => report.format_text(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Compact => format_compact(report),
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// One line per mismatch: `<path>: <kind> '<pattern>'`.
fn format_compact(report: &LidReport) -> String {
    let mut lines = Vec::new();
    for rule in report.failing() {
        for path in &rule.extra {
            lines.push(format!("{path}: unexpected '{}'", rule.pattern));
        }
        for path in &rule.missing {
            let kind = match report.mode {
                ReportMode::Tree => "missing exception",
                ReportMode::SingleFile => "expected but not found",
            };
            lines.push(format!("{path}: {kind} '{}'", rule.pattern));
        }
    }
    lines.into_iter().map(|l| l + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lidder_core::RuleReport;

    fn report() -> LidReport {
        LidReport {
            mode: ReportMode::Tree,
            rules: vec![
                RuleReport {
                    pattern: "TODO".into(),
                    extra: ["new.go".to_string()].into(),
                    missing: ["legacy.go".to_string()].into(),
                },
                RuleReport {
                    pattern: "unsafe".into(),
                    extra: Default::default(),
                    missing: Default::default(),
                },
            ],
            files_checked: 2,
        }
    }

    #[test]
    fn compact_lists_each_mismatch() {
        assert_eq!(
            format_compact(&report()),
            "new.go: unexpected 'TODO'\nlegacy.go: missing exception 'TODO'\n"
        );
    }

    #[test]
    fn compact_is_empty_when_passing() {
        let mut r = report();
        r.rules.remove(0);
        assert_eq!(format_compact(&r), "");
    }

    #[test]
    fn json_round_trips_report() {
        let json = serde_json::to_string_pretty(&report()).unwrap();
        let parsed: LidReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report());
        assert!(json.contains("\"mode\": \"tree\""));
    }
}
