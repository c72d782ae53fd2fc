use std::path::PathBuf;

/// Errors raised while loading portfolio content
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read portfolio file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse portfolio content")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}
