//! Options recognised by every measure.

use serde::{Deserialize, Serialize};

use semsim_graph::{GraphResult, HirstStOngeConfig, PredicateFilter};

/// Options shared by all measures.
///
/// Each measure reads only the fields it needs: `predicates` everywhere,
/// `max_depth` for Resnik and Leacock-Chodorow, and the Hirst-St-Onge
/// constants for the lexical-chain measure.
///
/// # Serde
///
/// camelCase, with the Hirst-St-Onge fields flattened into the same object:
///
/// ```
/// use semsim_measures::MeasureOptions;
///
/// let options = MeasureOptions::from_json_str(
///     r#"{ "predicates": "is-a", "maxDepth": 3, "C": 10, "maxLength": 4 }"#,
/// ).unwrap();
///
/// assert!(options.predicates.allows("is-a"));
/// assert_eq!(options.max_depth, Some(3));
/// assert_eq!(options.hirst_st_onge.c, 10.0);
/// assert_eq!(options.hirst_st_onge.k, 1.0);
/// assert_eq!(options.hirst_st_onge.max_length, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasureOptions {
    /// Edge labels to follow. Default: all labels.
    pub predicates: PredicateFilter,

    /// Taxonomy depth `D`. Resnik and Leacock-Chodorow score 0 without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    /// Hirst-St-Onge constants (`C`, `k`, `maxLength`).
    #[serde(flatten)]
    pub hirst_st_onge: HirstStOngeConfig,
}

impl MeasureOptions {
    /// Builder: restrict traversal to these edge labels.
    #[must_use]
    pub fn predicates(mut self, predicates: impl Into<PredicateFilter>) -> Self {
        self.predicates = predicates.into();
        self
    }

    /// Builder: set taxonomy depth `D`.
    #[must_use]
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Builder: set Hirst-St-Onge constants.
    #[must_use]
    pub fn hirst_st_onge(mut self, config: HirstStOngeConfig) -> Self {
        self.hirst_st_onge = config;
        self
    }

    /// Validate option values.
    ///
    /// # Errors
    ///
    /// `GraphError::InvalidConfig` from the Hirst-St-Onge constants.
    pub fn validate(&self) -> GraphResult<()> {
        self.hirst_st_onge.validate()
    }

    /// Parse options from JSON and validate them.
    ///
    /// # Errors
    ///
    /// `GraphError::Deserialization` on malformed JSON, otherwise as
    /// [`MeasureOptions::validate`].
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let options: MeasureOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
