//! Command line arguments
//!
//! Values given on the command line override the config file.

use clap::Parser;
use folio_config::AppConfig;
use folio_theme::Mode;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio's open source contributions in the terminal")]
pub struct Cli {
    /// Config file to use instead of the usual lookup
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio content file (JSON)
    #[arg(long, value_name = "PATH")]
    pub portfolio: Option<PathBuf>,

    /// Light or dark appearance
    #[arg(long, value_name = "light|dark")]
    pub mode: Option<Mode>,

    /// Theme preset: violet, ocean, emerald or rose
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

impl Cli {
    /// Layer the command line on top of the loaded configuration
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = self.portfolio {
            config.portfolio_path = path;
        }
        if let Some(mode) = self.mode {
            config.theme.mode = mode;
        }
        if let Some(name) = self.theme {
            config.theme.name = Some(name);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "--config",
            "site.toml",
            "--portfolio",
            "me.json",
            "--mode",
            "light",
            "--theme",
            "ocean",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert_eq!(cli.portfolio, Some(PathBuf::from("me.json")));
        assert_eq!(cli.mode, Some(Mode::Light));
        assert_eq!(cli.theme.as_deref(), Some("ocean"));
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(Cli::try_parse_from(["folio", "--mode", "sepia"]).is_err());
    }

    #[test]
    fn test_apply_overrides_only_given_values() {
        let config = AppConfig {
            compact_breakpoint: 90,
            ..Default::default()
        };
        let cli = Cli {
            mode: Some(Mode::Light),
            ..Default::default()
        };
        let config = cli.apply(config);
        assert_eq!(config.theme.mode, Mode::Light);
        assert_eq!(config.compact_breakpoint, 90);
        assert_eq!(config.portfolio_path, PathBuf::from("portfolio.json"));
        assert_eq!(config.theme.name, None);
    }
}
