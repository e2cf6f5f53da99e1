// Application settings, loaded from <data_dir>/config.json with every key optional
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::theme::ThemePalette;
use crate::error::{EngineError, EngineResult};
use crate::validation::Language;

/// Overrides the data directory (installed builds point it at the user's profile).
pub const DATA_DIR_ENV: &str = "CONTROLE_NOTAS_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub language: Language,
    pub currency_symbol: bool,
    pub theme: String,
    pub mode: String,
    // Custom theme colours layered over the mode's base palette
    pub colors: BTreeMap<String, String>,
    #[serde(skip)]
    pub data_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            language: Language::PtBr,
            currency_symbol: true,
            theme: "darkly".to_string(),
            mode: "dark".to_string(),
            colors: BTreeMap::new(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl AppSettings {
    pub fn data_dir_from_env() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn load() -> EngineResult<Self> {
        Self::load_from_dir(&Self::data_dir_from_env())
    }

    /// A missing file yields the defaults; a malformed one is a configuration error.
    pub fn load_from_dir(dir: &Path) -> EngineResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut settings = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str::<AppSettings>(&raw)
                .map_err(|e| EngineError::ConfigError(format!("{}: {}", path.display(), e)))?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            AppSettings::default()
        };
        settings.data_dir = dir.to_path_buf();
        Ok(settings)
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_mode(&self.mode).with_overrides(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = AppSettings::load_from_dir(dir.path()).unwrap();
        assert_eq!(settings.language, Language::PtBr);
        assert!(settings.currency_symbol);
        assert_eq!(settings.mode, "dark");
        assert_eq!(settings.data_dir, dir.path());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r##"{"language": "en", "mode": "light", "window_size": [1200, 800], "colors": {"danger": "#aa0000"}}"##,
        )
        .unwrap();

        let settings = AppSettings::load_from_dir(dir.path()).unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.mode, "light");
        assert_eq!(settings.theme, "darkly");
        assert!(settings.currency_symbol);
        assert_eq!(settings.palette().color("danger"), "#aa0000");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let err = AppSettings::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }
}
