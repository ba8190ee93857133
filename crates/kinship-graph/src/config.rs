//! Configuration for engine defaults and diagnostics

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on house-parent traversal
pub const DEFAULT_MAX_HOUSE_DEPTH: usize = 64;

/// Configuration for the graph engine
///
/// Controls the default cadet inclusion of house views and what the
/// diagnostics pass reports. None of these settings change the results of the
/// core graph operations when their inputs are passed explicitly.
///
/// # Examples
///
/// ```
/// use kinship_graph::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(!config.include_cadets);
/// assert_eq!(config.max_house_depth, 64);
///
/// let config = EngineConfig::strict();
/// assert!(config.report_unparseable_birth_years);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Include direct cadet houses in house views by default
    /// Default: false
    #[serde(default)]
    pub include_cadets: bool,

    /// Maximum number of parent hops followed along the house-parent relation
    /// Default: 64
    #[serde(default = "default_max_house_depth")]
    pub max_house_depth: usize,

    /// Report people with more than one recorded spouse
    /// Default: true
    #[serde(default = "default_true")]
    pub report_multiple_spouses: bool,

    /// Report birth tokens that are not numeric years
    /// Default: false ("unknown" is common and expected)
    #[serde(default)]
    pub report_unparseable_birth_years: bool,
}

fn default_max_house_depth() -> usize {
    DEFAULT_MAX_HOUSE_DEPTH
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_cadets: false,
            max_house_depth: DEFAULT_MAX_HOUSE_DEPTH,
            report_multiple_spouses: true,
            report_unparseable_birth_years: false,
        }
    }
}

impl EngineConfig {
    /// Strict configuration (every diagnostic enabled)
    pub fn strict() -> Self {
        Self {
            include_cadets: false,
            max_house_depth: DEFAULT_MAX_HOUSE_DEPTH,
            report_multiple_spouses: true,
            report_unparseable_birth_years: true,
        }
    }

    /// Permissive configuration (only structural problems reported)
    pub fn permissive() -> Self {
        Self {
            include_cadets: true,
            max_house_depth: DEFAULT_MAX_HOUSE_DEPTH,
            report_multiple_spouses: false,
            report_unparseable_birth_years: false,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_house_depth == 0 {
            return Err(EngineError::Config(
                "max_house_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
