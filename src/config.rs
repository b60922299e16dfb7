//! Resolver configuration.
//!
//! # Usage
//!
//! ```rust
//! use browserprint::{ResolverConfig, ToleranceMode};
//!
//! // Exact ranges only, fixed extension order.
//! let config = ResolverConfig::default()
//!     .with_tolerance_mode(ToleranceMode::Strict)
//!     .with_randomize_extensions(false);
//!
//! // Or from JSON; missing fields keep their defaults.
//! let config = ResolverConfig::from_json(r#"{"tolerance_override": 3}"#).unwrap();
//! assert_eq!(config.tolerance_override, Some(3));
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::identity::ToleranceMode;

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mode used by entry points that do not take one.
    ///
    /// Default: `Reasonable`
    pub tolerance_mode: ToleranceMode,

    /// Replaces every browser's own tolerance when set.
    ///
    /// Default: None (Chrome/Firefox 10, Safari 1)
    pub tolerance_override: Option<u32>,

    /// Randomize extension order in profiles built by the resolver.
    ///
    /// Default: true
    pub randomize_extensions: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tolerance_mode: ToleranceMode::Reasonable,
            tolerance_override: None,
            randomize_extensions: true,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact matches only, canonical extension order.
    pub fn strict() -> Self {
        Self {
            tolerance_mode: ToleranceMode::Strict,
            tolerance_override: None,
            randomize_extensions: false,
        }
    }

    /// Parse from JSON.
    ///
    /// A bad `tolerance_mode` string is reported as
    /// [`Error::InvalidToleranceMode`](crate::Error::InvalidToleranceMode); other
    /// problems as [`Error::Config`](crate::Error::Config).
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(mode) = value.get("tolerance_mode").and_then(|m| m.as_str()) {
            mode.parse::<ToleranceMode>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_tolerance_mode(mut self, mode: ToleranceMode) -> Self {
        self.tolerance_mode = mode;
        self
    }

    pub fn with_tolerance_override(mut self, tolerance: u32) -> Self {
        self.tolerance_override = Some(tolerance);
        self
    }

    pub fn with_randomize_extensions(mut self, enabled: bool) -> Self {
        self.randomize_extensions = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.tolerance_mode, ToleranceMode::Reasonable);
        assert_eq!(config.tolerance_override, None);
        assert!(config.randomize_extensions);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ResolverConfig::from_json(r#"{"tolerance_mode": "strict"}"#).unwrap();
        assert_eq!(config.tolerance_mode, ToleranceMode::Strict);
        assert!(config.randomize_extensions);
    }

    #[test]
    fn test_from_json_bad_mode() {
        let err = ResolverConfig::from_json(r#"{"tolerance_mode": "fuzzy"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidToleranceMode(ref m) if m == "fuzzy"));
    }

    #[test]
    fn test_from_json_mode_any_case() {
        let config = ResolverConfig::from_json(r#"{"tolerance_mode": "Strict"}"#).unwrap();
        assert_eq!(config.tolerance_mode, ToleranceMode::Strict);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ResolverConfig::from_json(r#"{"tolerance_override": "three"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(matches!(
            ResolverConfig::from_json(r#"{"tolerance_mode": 1}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = ResolverConfig::new()
            .with_tolerance_override(2)
            .with_randomize_extensions(false);
        assert_eq!(config.tolerance_override, Some(2));
        assert!(!config.randomize_extensions);
        assert_eq!(ResolverConfig::strict().tolerance_mode, ToleranceMode::Strict);
    }
}
