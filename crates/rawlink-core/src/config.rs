use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Interactive shell settings (`[shell]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Keep previously entered lines for recall with the arrow keys.
    #[serde(default = "default_history")]
    pub history: bool,
    /// Number of lines kept in the in-memory history.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_history() -> bool {
    true
}

fn default_max_history() -> usize {
    100
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: default_history(),
            max_history: default_max_history(),
        }
    }
}

/// Global configuration loaded from `~/.config/rawlink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawlinkConfig {
    #[serde(default)]
    pub shell: ShellConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rawlink")
        .context("locating XDG config directory for rawlink")?;
    let path = xdg_dirs
        .place_config_file("config.toml")
        .context("creating rawlink config directory")?;
    Ok(path)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RawlinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit location.
pub fn load_or_init_at(path: &Path) -> Result<RawlinkConfig> {
    if !path.exists() {
        let default_cfg = RawlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Default-location config that never fails: any problem locating, creating
/// or parsing the file is logged and the built-in defaults are used.
pub fn load_or_default() -> RawlinkConfig {
    match config_path() {
        Ok(path) => load_or_default_at(&path),
        Err(err) => fallback(err),
    }
}

/// Same as [`load_or_default`] for an explicit location.
pub fn load_or_default_at(path: &Path) -> RawlinkConfig {
    load_or_init_at(path).unwrap_or_else(fallback)
}

fn fallback(err: anyhow::Error) -> RawlinkConfig {
    tracing::warn!("using default config: {:#}", err);
    RawlinkConfig::default()
}

/// Load configuration from an existing file. Missing or malformed files are errors.
pub fn load_from(path: &Path) -> Result<RawlinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: RawlinkConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RawlinkConfig::default();
        assert!(cfg.shell.history);
        assert_eq!(cfg.shell.max_history, 100);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RawlinkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RawlinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [shell]
            history = false
            max_history = 10
        "#;
        let cfg: RawlinkConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.shell.history);
        assert_eq!(cfg.shell.max_history, 10);
    }

    #[test]
    fn config_toml_partial_and_empty() {
        let cfg: RawlinkConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, RawlinkConfig::default());

        let cfg: RawlinkConfig = toml::from_str("[shell]\nmax_history = 5\n").unwrap();
        assert!(cfg.shell.history);
        assert_eq!(cfg.shell.max_history, 5);
    }

    #[test]
    fn config_toml_rejects_unknown_keys() {
        assert!(toml::from_str::<RawlinkConfig>("[shell]\nhistroy = true\n").is_err());
        assert!(toml::from_str::<RawlinkConfig>("prompt = \"> \"\n").is_err());
    }

    #[test]
    fn load_or_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, RawlinkConfig::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_or_init_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[shell]\nhistory = false\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert!(!cfg.shell.history);
    }

    #[test]
    fn load_or_default_survives_unusable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("rawlink").join("config.toml");

        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("creating config directory"));
        assert_eq!(load_or_default_at(&path), RawlinkConfig::default());
    }

    #[test]
    fn load_or_default_survives_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[shell]\nhistory = \"sometimes\"\n").unwrap();
        assert_eq!(load_or_default_at(&path), RawlinkConfig::default());
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("reading config"));
    }
}
