//! Surface errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("line height must be greater than zero")]
    ZeroLineHeight,

    #[error("soft wrap column must be greater than zero")]
    ZeroWrapColumn,

    #[error("invalid surface config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
