//! Configuration for the Hirst-St-Onge lexical-chain path search.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Default base score `C`.
pub const DEFAULT_BASE_SCORE: f64 = 8.0;

/// Default direction-change penalty `k`.
pub const DEFAULT_CHANGE_PENALTY: f64 = 1.0;

/// Default maximum path length in edges.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// Scoring and search bounds for the constrained path search.
///
/// A completed path of `length` edges with `changes` direction reversals
/// scores `c - length - k * changes`. The best score over all simple paths
/// of at most `max_length` edges is reported, floored at 0.
///
/// # Serde
///
/// Field names follow the published measure: `C`, `k`, `maxLength`. Missing
/// fields take their defaults.
///
/// ```
/// use semsim_graph::config::HirstStOngeConfig;
///
/// let config: HirstStOngeConfig = serde_json::from_str(r#"{ "C": 10, "maxLength": 3 }"#).unwrap();
/// assert_eq!(config.c, 10.0);
/// assert_eq!(config.k, 1.0);
/// assert_eq!(config.max_length, 3);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HirstStOngeConfig {
    /// Base score constant. Default: 8
    #[serde(rename = "C")]
    pub c: f64,

    /// Weight of each direction change. Default: 1
    pub k: f64,

    /// Maximum number of edges in a candidate path. Default: 5
    ///
    /// This is the only bound on search cost, which grows exponentially
    /// with it on dense graphs.
    #[serde(rename = "maxLength")]
    pub max_length: usize,
}

impl Default for HirstStOngeConfig {
    fn default() -> Self {
        Self {
            c: DEFAULT_BASE_SCORE,
            k: DEFAULT_CHANGE_PENALTY,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl HirstStOngeConfig {
    /// Builder: set base score `C`.
    #[must_use]
    pub fn base_score(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Builder: set direction-change penalty `k`.
    #[must_use]
    pub fn change_penalty(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Builder: set maximum path length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Score of a completed path.
    ///
    /// Not floored; callers compare raw scores and floor the final maximum.
    #[inline]
    pub fn path_score(&self, length: usize, changes: usize) -> f64 {
        self.c - length as f64 - self.k * changes as f64
    }

    /// Validate configuration parameters.
    ///
    /// # Validation Rules
    /// - `c` must be finite and >= 0 (the floored score must stay within `[0, c]`)
    /// - `k` must be finite and >= 0 (a negative penalty would let scores exceed `c`)
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` naming the first invalid field.
    ///
    /// # Example
    /// ```
    /// use semsim_graph::config::HirstStOngeConfig;
    ///
    /// assert!(HirstStOngeConfig::default().validate().is_ok());
    /// assert!(HirstStOngeConfig::default().change_penalty(-1.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.c.is_finite() {
            return Err(GraphError::InvalidConfig(format!(
                "C must be finite (got {})",
                self.c
            )));
        }

        if self.c < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "C must be >= 0 (got {})",
                self.c
            )));
        }

        if !self.k.is_finite() {
            return Err(GraphError::InvalidConfig(format!(
                "k must be finite (got {})",
                self.k
            )));
        }

        if self.k < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "k must be >= 0 (got {})",
                self.k
            )));
        }

        Ok(())
    }
}
