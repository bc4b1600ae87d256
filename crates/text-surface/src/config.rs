//! Surface configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::geometry::DEFAULT_LINE_HEIGHT;

/// Surface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Line height in pixels
    pub line_height: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
    /// Soft wrap mode
    pub soft_wrap: SoftWrap,
}

impl SurfaceConfig {
    /// Load from TOML string
    pub fn from_toml(text: &str) -> Result<Self, SurfaceError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SurfaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Reject geometry that would make line arithmetic divide by zero
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.line_height == 0 {
            return Err(SurfaceError::ZeroLineHeight);
        }
        self.soft_wrap.validate()
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            viewport_height: 600,
            soft_wrap: SoftWrap::Off,
        }
    }
}

/// Soft wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoftWrap {
    /// Every logical line is a single visual line
    #[default]
    Off,
    /// Break lines after this many characters
    Column(u32),
}

impl SoftWrap {
    pub fn validate(&self) -> Result<(), SurfaceError> {
        match self {
            Self::Column(0) => Err(SurfaceError::ZeroWrapColumn),
            _ => Ok(()),
        }
    }
}
