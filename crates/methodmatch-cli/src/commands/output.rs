//! Shared output formatting for match reports.

use anyhow::Result;
use methodmatch_core::{MatchReport, Severity};

use crate::OutputFormat;

/// Print a match report in the specified format.
pub fn print(report: &MatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &MatchReport) {
    let (errors, warnings, _) = report.count_by_severity();

    for finding in &report.findings {
        let severity_indicator = match finding.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!("{}", finding.format_with(severity_indicator));
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{}{}\x1b[0m", summary_color, report.summary());
}

fn print_json(report: &MatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &MatchReport) {
    for finding in &report.findings {
        println!("{finding}");
    }
}
