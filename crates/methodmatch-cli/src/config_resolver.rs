//! Configuration file resolution with global fallback.
//!
//! Snapshots usually live below the project root (e.g. `build/snapshots/`),
//! so the project lookup walks up from the snapshot's directory:
//!
//! 1. `--config` flag (explicit path)
//! 2. `methodmatch.toml` or `.methodmatch.toml` in the snapshot directory
//!    or the nearest ancestor holding one
//! 3. `~/.methodmatch/config.toml` (global fallback)
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found next to the snapshot or in one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.methodmatch/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order within each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["methodmatch.toml", ".methodmatch.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path, starting at `start_dir`.
#[must_use]
pub fn resolve(start_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(start_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    start_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(start_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Nearest project config from `start_dir` upwards.
fn find_project_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory path.
///
/// Resolution: `$METHODMATCH_CONFIG_DIR` > `~/.methodmatch/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("METHODMATCH_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".methodmatch"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("methodmatch.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn config_next_to_snapshot() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".methodmatch.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".methodmatch.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_in_same_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("methodmatch.toml"), "").unwrap();
        fs::write(tmp.path().join(".methodmatch.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("methodmatch.toml"))
        );
    }

    #[test]
    fn walks_up_to_nearest_ancestor() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("build").join("snapshots");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("methodmatch.toml"), "").unwrap();
        fs::write(tmp.path().join("build").join(".methodmatch.toml"), "").unwrap();

        let result = resolve_inner(&nested, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("build").join(".methodmatch.toml"))
        );
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("methodmatch.toml")).unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert!(!matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
        assert!(result.is_global());
    }

    #[test]
    fn global_skipped_when_project_config_exists() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("methodmatch.toml"), "").unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
        assert!(!result.is_global());
    }

    #[test]
    fn empty_global_dir_returns_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
