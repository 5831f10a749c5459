use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::clock::ClockZone;
use crate::error::{FolioError, Result};
use crate::locale::Locale;
use crate::motion::{parse_flag, REDUCED_MOTION_ENV};

pub const LOCALE_ENV: &str = "FOLIO_LOCALE";
pub const TIMEZONE_ENV: &str = "FOLIO_TZ";

/// User settings for the `folio` binary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub locale: Locale,
    /// IANA zone for the header clock; local time when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Initial reduced-motion value; the environment wins when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    /// Portfolio TOML replacing the bundled content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl FolioConfig {
    /// Get config file path: ~/.folio/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio/config.toml")
    }

    /// Load from `path` (or the default location), then apply environment
    /// overrides. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);
        let mut config = Self::read(&path)?;
        config.apply_overrides(|key| env::var(key).ok());
        config.timezone()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&raw)
            .map_err(|e| FolioError::toml(path.display().to_string(), e))?;

        // Relative content paths resolve against the config file's directory
        if let (Some(content), Some(dir)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Overlay `FOLIO_LOCALE`, `FOLIO_TZ` and `FOLIO_REDUCED_MOTION`.
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(LOCALE_ENV) {
            match raw.parse::<Locale>() {
                Ok(locale) => self.locale = locale,
                Err(err) => warn!(%err, "ignoring {LOCALE_ENV}"),
            }
        }
        if let Some(raw) = lookup(TIMEZONE_ENV) {
            if !raw.trim().is_empty() {
                self.timezone = Some(raw.trim().to_string());
            }
        }
        if let Some(raw) = lookup(REDUCED_MOTION_ENV) {
            match parse_flag(&raw) {
                Some(flag) => self.reduced_motion = Some(flag),
                None => warn!(value = %raw, "ignoring {REDUCED_MOTION_ENV}"),
            }
        }
    }

    pub fn timezone(&self) -> Result<ClockZone> {
        ClockZone::from_option(self.timezone.as_deref())
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FolioConfig::read(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.timezone().unwrap(), ClockZone::Local);
    }

    #[test]
    fn test_reads_keys_and_resolves_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "locale = \"tr\"\n\
             timezone = \"Europe/Istanbul\"\n\
             reduced_motion = true\n\
             content = \"me.toml\"\n",
        )
        .unwrap();

        let config = FolioConfig::read(&path).unwrap();
        assert_eq!(config.locale, Locale::Tr);
        assert!(config.reduced_motion());
        assert_eq!(config.content, Some(dir.path().join("me.toml")));
        assert!(matches!(config.timezone().unwrap(), ClockZone::Named(_)));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = [").unwrap();
        assert!(matches!(
            FolioConfig::read(&path).unwrap_err(),
            FolioError::Toml { .. }
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (LOCALE_ENV, "tr_TR.UTF-8"),
            (TIMEZONE_ENV, "UTC"),
            (REDUCED_MOTION_ENV, "1"),
        ]
        .into_iter()
        .collect();

        let mut config = FolioConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.locale, Locale::Tr);
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert!(config.reduced_motion());
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = FolioConfig {
            locale: Locale::Tr,
            reduced_motion: Some(true),
            ..FolioConfig::default()
        };
        config.apply_overrides(|k| match k {
            LOCALE_ENV => Some("klingon".into()),
            REDUCED_MOTION_ENV => Some("sometimes".into()),
            _ => None,
        });
        assert_eq!(config.locale, Locale::Tr);
        assert!(config.reduced_motion());
    }
}
