use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::locale::Language;

const CONFIG_DIR_NAME: &str = ".hourmark";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "hourmark.log";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Option<Language>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Loads `~/.hourmark/config.toml`, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let dir = default_dir()?;
        Self::load_from(&dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Explicit choice wins, then the config file, then the `locale_tag`
    /// (usually `$LANG`), then English.
    pub fn resolve_language(&self, explicit: Option<Language>, locale_tag: Option<&str>) -> Language {
        explicit
            .or(self.language)
            .or_else(|| locale_tag.map(Language::from_locale_tag))
            .unwrap_or_default()
    }

    pub fn resolve_log_file(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(default_dir()?.join(LOG_FILE_NAME)),
        }
    }
}

fn default_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(CONFIG_DIR_NAME))
}

/// The system locale tag from the usual environment variables.
pub fn system_locale_tag() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_language_and_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "language = \"sv\"\nlog_file = \"/tmp/hm.log\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, Some(Language::Swedish));
        assert_eq!(config.resolve_log_file().unwrap(), PathBuf::from("/tmp/hm.log"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "language = \"klingon\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, "colour = true\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_language_order() {
        let config = Config { language: Some(Language::Swedish), log_file: None };
        assert_eq!(config.resolve_language(Some(Language::English), Some("sv_SE")), Language::English);
        assert_eq!(config.resolve_language(None, Some("en_US")), Language::Swedish);

        let empty = Config::default();
        assert_eq!(empty.resolve_language(None, Some("sv_SE.UTF-8")), Language::Swedish);
        assert_eq!(empty.resolve_language(None, None), Language::English);
    }
}
