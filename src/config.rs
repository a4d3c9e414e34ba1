//! Configuration for layout geometry and pipeline limits
//!
//! Every struct deserializes with `#[serde(default)]`, so a JSON file only
//! needs the fields it wants to change:
//!
//! ```
//! use logic_sim::Options;
//!
//! let options = Options::from_json_str(r#"{ "layout": { "h_spacing": 100 } }"#).unwrap();
//! assert_eq!(options.layout.h_spacing, 100.0);
//! assert_eq!(options.layout.v_spacing, 60.0);
//! assert_eq!(options.limits.max_variables, 4);
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Geometry constants used by the layout engine
///
/// All lengths are in diagram units (SVG user units for a typical renderer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left/top offset of the diagram and padding added to the bounds
    ///
    /// **Default:** `50`
    pub margin: f64,

    /// Horizontal space added per gate level; gates sit half of it to the
    /// right of their rightmost input
    ///
    /// **Default:** `150`
    pub h_spacing: f64,

    /// Vertical band reserved for each input, i.e. the distance between
    /// sibling inputs
    ///
    /// **Default:** `60`
    pub v_spacing: f64,

    /// **Default:** `60`
    pub input_width: f64,
    /// **Default:** `30`
    pub input_height: f64,

    /// Width of a two-input gate up to its output port
    ///
    /// **Default:** `80`
    pub gate_width: f64,

    /// Width of a NOT gate up to its output port (triangle plus bubble)
    ///
    /// **Default:** `70`
    pub not_gate_width: f64,

    /// Minimum height of any gate subtree
    ///
    /// **Default:** `60`
    pub gate_height: f64,

    /// Length of the stub wire left of a gate's input ports
    ///
    /// **Default:** `20`
    pub port_lead: f64,

    /// Vertical offset above which a wire gets two bend points
    ///
    /// **Default:** `20`
    pub bend_threshold: f64,

    /// Gap between the root's output port and the output node
    ///
    /// **Default:** `30`
    pub output_gap: f64,
    /// **Default:** `60`
    pub output_width: f64,
    /// **Default:** `30`
    pub output_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            margin: 50.0,
            h_spacing: 150.0,
            v_spacing: 60.0,
            input_width: 60.0,
            input_height: 30.0,
            gate_width: 80.0,
            not_gate_width: 70.0,
            gate_height: 60.0,
            port_lead: 20.0,
            bend_threshold: 20.0,
            output_gap: 30.0,
            output_width: 60.0,
            output_height: 30.0,
        }
    }
}

/// Range of variable counts the pipeline accepts
///
/// The core functions have no upper bound; [`Circuit::compile_with`]
/// enforces these on behalf of its caller.
///
/// [`Circuit::compile_with`]: crate::Circuit::compile_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// **Default:** `1`
    pub min_variables: usize,
    /// **Default:** `4`
    pub max_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_variables: 1,
            max_variables: 4,
        }
    }
}

impl Limits {
    /// No practical upper bound
    pub fn unbounded() -> Self {
        Limits {
            min_variables: 0,
            max_variables: usize::MAX,
        }
    }

    pub fn allows(&self, count: usize) -> bool {
        (self.min_variables..=self.max_variables).contains(&count)
    }
}

/// Everything [`Circuit::compile_with`](crate::Circuit::compile_with) can be tuned with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub layout: LayoutConfig,
    pub limits: Limits,
}

/// Errors loading an [`Options`] file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid limits: min_variables {min} is greater than max_variables {max}")]
    InvalidLimits { min: usize, max: usize },
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl Options {
    /// Parse options from a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: Options = serde_json::from_str(json)?;
        options.check()?;
        Ok(options)
    }

    /// Read options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loading options from {}", path.display());
        Self::from_json_str(&json)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.limits.min_variables > self.limits.max_variables {
            return Err(ConfigError::InvalidLimits {
                min: self.limits.min_variables,
                max: self.limits.max_variables,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(Options::from_json_str("{}").unwrap(), Options::default());
    }

    #[test]
    fn test_partial_limits() {
        let options = Options::from_json_str(r#"{ "limits": { "max_variables": 6 } }"#).unwrap();
        assert_eq!(options.limits.min_variables, 1);
        assert_eq!(options.limits.max_variables, 6);
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let err = Options::from_json_str(r#"{ "limits": { "min_variables": 5, "max_variables": 2 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimits { min: 5, max: 2 }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Options::from_json_str("{ layout: }"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_limits_allows() {
        let limits = Limits::default();
        assert!(!limits.allows(0));
        assert!(limits.allows(1));
        assert!(limits.allows(4));
        assert!(!limits.allows(5));
        assert!(Limits::unbounded().allows(40));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Options::from_file("/nonexistent/logic-sim.json").unwrap_err();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_io_error_names_the_path_once() {
        let path = "/nonexistent/logic-sim.json";
        let message = Options::from_file(path).unwrap_err().to_string();
        assert_eq!(message.matches(path).count(), 1, "{}", message);
        assert!(message.starts_with("failed to read config file"));
    }
}
