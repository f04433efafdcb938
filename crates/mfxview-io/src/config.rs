//! Viewer configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file is a
//! valid configuration.
//!
//! ```toml
//! log_level = "debug"
//! max_rows = 20
//! pretty_json = true
//!
//! [box]
//! width = 2.0
//! height = 1.0
//! depth = 1.0
//! ```

use std::path::Path;

use mfxview_types::{MfxError, MfxResult};
use serde::{Deserialize, Serialize};

/// Settings for the command-line viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Maximum rows printed per table.
    pub max_rows: usize,

    /// Indent JSON output.
    pub pretty_json: bool,

    /// Box generator dimensions.
    #[serde(rename = "box")]
    pub box_params: BoxParams,
}

/// Dimensions of the generated box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_rows: 32,
            pretty_json: false,
            box_params: BoxParams::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> MfxResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| MfxError::InvalidConfig(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> MfxResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> MfxResult<String> {
        toml::to_string(self).map_err(|e| MfxError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> MfxResult<()> {
        if self.max_rows == 0 {
            return Err(MfxError::InvalidConfig("max_rows must be >= 1".into()));
        }
        if self.log_level.trim().is_empty() {
            return Err(MfxError::InvalidConfig("log_level must not be empty".into()));
        }
        let b = &self.box_params;
        for (name, value) in [("width", b.width), ("height", b.height), ("depth", b.depth)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MfxError::InvalidConfig(format!(
                    "box {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
