use std::path::{Path, PathBuf};

use crate::paths;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".folio.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.folio.toml` in the current working directory
/// 2. `config.toml` in the app config directory
///
/// Returns the file content and where it came from, None if neither exists.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates = [
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        paths::app_config_path().ok(),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|path| read_config(&path).map(|content| (path, content)))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
