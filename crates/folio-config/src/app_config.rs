//! Application configuration
//!
//! Configuration loaded from `.folio.toml` or `~/.config/folio/config.toml`.

use anyhow::{Context, Result};
use folio_theme::{Mode, PaletteOverrides, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Viewport width (in columns) below which cards use the compact layout
pub const DEFAULT_COMPACT_BREAKPOINT: u16 = 72;

const DEFAULT_PORTFOLIO_FILE: &str = "portfolio.json";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Portfolio content file (JSON)
    #[serde(default = "default_portfolio_path")]
    pub portfolio_path: PathBuf,

    /// Viewport width below which cards stack status and date under the repo
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u16,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Theme section of the config file
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset name; falls back to the portfolio's own `theme` field
    pub name: Option<String>,
    pub mode: Mode,
    /// Individual palette entries, e.g. `primary = "#8B5CF6"`
    pub colors: PaletteOverrides,
}

fn default_portfolio_path() -> PathBuf {
    PathBuf::from(DEFAULT_PORTFOLIO_FILE)
}

fn default_compact_breakpoint() -> u16 {
    DEFAULT_COMPACT_BREAKPOINT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            portfolio_path: default_portfolio_path(),
            compact_breakpoint: default_compact_breakpoint(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::from_file_content(&path, &content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {:#}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse app config")
    }

    /// Read and parse a config file, resolving paths against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_file_content(path, &content)
    }

    fn from_file_content(path: &Path, content: &str) -> Result<Self> {
        Ok(Self::from_toml_str(content)?.relative_to(path))
    }

    /// Resolve a relative portfolio path against the directory of the config file
    fn relative_to(mut self, config_path: &Path) -> Self {
        if self.portfolio_path.is_relative() {
            if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
                self.portfolio_path = dir.join(&self.portfolio_path);
            }
        }
        self
    }

    /// Build the theme, using `fallback_name` when no preset is configured
    pub fn theme(&self, fallback_name: &str) -> Theme {
        let name = self.theme.name.as_deref().unwrap_or(fallback_name);
        Theme::from_name(name, self.theme.mode, self.theme.colors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::Preset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.portfolio_path, PathBuf::from("portfolio.json"));
        assert_eq!(config.compact_breakpoint, DEFAULT_COMPACT_BREAKPOINT);
        assert_eq!(config.theme.mode, Mode::Dark);
        assert!(config.theme.colors.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r##"
            portfolio_path = "/srv/me.json"
            compact_breakpoint = 90

            [theme]
            name = "ocean"
            mode = "light"

            [theme.colors]
            primary = "#0EA5E9"
        "##;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.portfolio_path, PathBuf::from("/srv/me.json"));
        assert_eq!(config.compact_breakpoint, 90);
        assert_eq!(config.theme.name.as_deref(), Some("ocean"));
        assert_eq!(config.theme.mode, Mode::Light);
        assert_eq!(config.theme.colors.primary.as_deref(), Some("#0EA5E9"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [theme]
            mode = "light"
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.theme.mode, Mode::Light);
        // Other fields should use defaults
        assert_eq!(config.portfolio_path, PathBuf::from("portfolio.json"));
        assert_eq!(config.compact_breakpoint, DEFAULT_COMPACT_BREAKPOINT);
        assert_eq!(config.theme.name, None);
    }

    #[test]
    fn test_invalid_mode_is_an_error() {
        let toml = r#"
            [theme]
            mode = "sepia"
        "#;
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_relative_portfolio_path() {
        let config = AppConfig::default().relative_to(Path::new("/etc/folio/config.toml"));
        assert_eq!(
            config.portfolio_path,
            PathBuf::from("/etc/folio/portfolio.json")
        );

        let local = AppConfig::default().relative_to(Path::new(".folio.toml"));
        assert_eq!(local.portfolio_path, PathBuf::from("portfolio.json"));
    }

    #[test]
    fn test_from_file_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::config_file::LOCAL_CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
                portfolio_path = "content/me.json"
                compact_breakpoint = 64
            "#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.portfolio_path, dir.path().join("content/me.json"));
        assert_eq!(config.compact_breakpoint, 64);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::from_file(dir.path().join("missing.toml")).is_err());

        let path = dir.path().join(crate::config_file::LOCAL_CONFIG_FILE);
        std::fs::write(&path, "compact_breakpoint = \"wide\"").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse app config"));
    }

    #[test]
    fn test_theme_prefers_configured_name() {
        let mut config = AppConfig::default();
        assert_eq!(config.theme("emerald").preset(), Preset::Emerald);

        config.theme.name = Some("rose".to_string());
        assert_eq!(config.theme("emerald").preset(), Preset::Rose);
    }
}
