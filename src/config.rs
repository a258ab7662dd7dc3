//! Calculator configuration
//!
//! Settings come from an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) gives the standard 1024-slot stack with an
//! eight-slot view and trigonometry in degrees.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "RPN_CONFIG";

/// Default stack capacity
pub const DEFAULT_STACK_CAPACITY: usize = 1024;

/// Largest accepted stack capacity
pub const MAX_STACK_CAPACITY: usize = 1 << 20;

/// Default number of slots shown by the `s` command
pub const DEFAULT_VIEW_SIZE: usize = 8;

/// Largest accepted view size
pub const MAX_VIEW_SIZE: usize = 1 << 16;

/// Unit used to interpret arguments of `sin`, `cos` and `tan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Arguments are degrees and are converted before the call
    #[default]
    Degrees,
    /// Arguments are passed to the trigonometric function unchanged
    Radians,
}

impl AngleUnit {
    /// Convert an angle in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * std::f64::consts::PI / 180.0,
            AngleUnit::Radians => angle,
        }
    }

    /// Lowercase unit name
    pub fn name(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }
}

/// Configuration for a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of values on the stack (default: 1024)
    pub stack_capacity: usize,
    /// Number of slots rendered by the stack view (default: 8)
    pub view_size: usize,
    /// Angle unit for trigonometric functions (default: degrees)
    pub angle_unit: AngleUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            view_size: DEFAULT_VIEW_SIZE,
            angle_unit: AngleUnit::Degrees,
        }
    }
}

impl Config {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the file named by `RPN_CONFIG`, or the defaults when it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => {
                tracing::debug!(path = ?path, "loading configuration");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_STACK_CAPACITY).contains(&self.stack_capacity) {
            return Err(Error::InvalidConfig(format!(
                "stack_capacity must be between 1 and {}, got {}",
                MAX_STACK_CAPACITY, self.stack_capacity
            )));
        }
        if !(1..=MAX_VIEW_SIZE).contains(&self.view_size) {
            return Err(Error::InvalidConfig(format!(
                "view_size must be between 1 and {}, got {}",
                MAX_VIEW_SIZE, self.view_size
            )));
        }
        Ok(())
    }
}
