use crate::error::{HighlightsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of years before the reference year that are still retained.
pub const DEFAULT_WINDOW_YEARS: u32 = 8;

const MAX_WINDOW_YEARS: u32 = 200;

/// Configuration for digest parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// How many years before the reference year are kept (inclusive)
    pub window_years: u32,

    /// Also drop entries dated after the reference year.
    /// Off by default: only the lower bound of the window is enforced.
    pub enforce_upper_bound: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            window_years: DEFAULT_WINDOW_YEARS,
            enforce_upper_bound: false,
        }
    }
}

impl DigestConfig {
    /// Create config that keeps only the retention window, future years included
    pub fn with_window(window_years: u32) -> Self {
        Self {
            window_years,
            ..Default::default()
        }
    }

    /// Create config that rejects entries dated after the reference year
    pub fn bounded() -> Self {
        Self {
            enforce_upper_bound: true,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_years > MAX_WINDOW_YEARS {
            return Err(HighlightsError::invalid_config(format!(
                "window_years ({}) cannot exceed {MAX_WINDOW_YEARS}",
                self.window_years
            )));
        }
        Ok(())
    }

    /// Earliest year kept for the given reference year
    #[must_use]
    pub fn minimum_year(&self, reference_year: i32) -> i32 {
        // validate() caps window_years well inside i32
        reference_year.saturating_sub(self.window_years as i32)
    }
}
