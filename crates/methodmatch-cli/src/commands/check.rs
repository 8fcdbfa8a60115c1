//! Check command implementation.

use anyhow::{Context, Result};
use methodmatch_core::model::{MatchMode, Snapshot};
use methodmatch_core::Config;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Presets used when neither the command line nor the config names any.
const DEFAULT_PRESETS: &[&str] = &["recommended"];

/// Options for a single check run.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated preset selection from `--presets`.
    pub presets: Option<String>,
    /// Match declaring symbols instead of call-site trees.
    pub symbols: bool,
}

/// Runs the check command.
pub fn run(snapshot_path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let selection = preset_selection(options.presets.as_deref(), &config);
    let mut groups = methodmatch_presets::resolve(&selection).context("Failed to build presets")?;
    groups.extend(config.matchers().iter().cloned());

    let snapshot = Snapshot::from_file(snapshot_path)
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path.display()))?;

    let mode = if options.symbols {
        MatchMode::Symbol
    } else {
        MatchMode::Tree
    };

    tracing::info!(
        "Checking {} sites in {:?} with {} matcher group(s)",
        snapshot.site_count(),
        snapshot_path,
        groups.len()
    );

    let report = snapshot.report(snapshot_path, &groups, mode);

    super::output::print(&report, options.format)?;

    if report.has_findings_at(config.fail_on()) {
        std::process::exit(1);
    }

    Ok(())
}

/// Picks the preset names: `--presets` first, then `[settings] presets`,
/// then the default.
fn preset_selection(flag: Option<&str>, config: &Config) -> Vec<String> {
    if let Some(flag) = flag {
        return flag
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(presets) = &config.settings.presets {
        return presets.clone();
    }
    DEFAULT_PRESETS.iter().map(|s| (*s).to_string()).collect()
}
