//! Measure registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use semsim_graph::{GraphError, GraphStore};

use crate::measures;
use crate::options::MeasureOptions;

/// Function pointer shape shared by every measure.
pub type MeasureFn<G> = fn(&G, &str, &str, &MeasureOptions) -> f64;

/// The available similarity measures.
///
/// Names follow the camelCase identifiers used in option files and on the
/// wire (`"shortestPath"`, `"wuPalmer"`, ...).
///
/// ```
/// use semsim_measures::{Measure, MeasureOptions};
/// use semsim_graph::Taxonomy;
///
/// let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
///     { "source": "dog", "target": "mammal" },
///     { "source": "cat", "target": "mammal" }
/// ] }"#).unwrap();
///
/// let measure: Measure = "radaSimilarity".parse().unwrap();
/// let score = measure.evaluate(&taxonomy, "dog", "cat", &MeasureOptions::default());
/// assert!((score - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    /// Rada distance (edge count).
    ShortestPath,
    /// `1 / (1 + distance)`.
    RadaSimilarity,
    /// `2 * D - distance`.
    ResnikEdge,
    /// Wu-Palmer over common ancestors.
    WuPalmer,
    /// Leacock-Chodorow `ln(2D) - ln(N)`.
    LeacockChodorow,
    /// Hirst-St-Onge lexical chains.
    HirstStOnge,
}

impl Measure {
    /// Every measure, in registry order.
    pub const ALL: [Measure; 6] = [
        Measure::ShortestPath,
        Measure::RadaSimilarity,
        Measure::ResnikEdge,
        Measure::WuPalmer,
        Measure::LeacockChodorow,
        Measure::HirstStOnge,
    ];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShortestPath => "shortestPath",
            Self::RadaSimilarity => "radaSimilarity",
            Self::ResnikEdge => "resnikEdge",
            Self::WuPalmer => "wuPalmer",
            Self::LeacockChodorow => "leacockChodorow",
            Self::HirstStOnge => "hirstStOnge",
        }
    }

    /// Whether the measure is a distance (lower is closer) rather than a
    /// similarity.
    pub fn is_distance(self) -> bool {
        matches!(self, Self::ShortestPath)
    }

    /// The measure as a plain function pointer.
    pub fn function<G: GraphStore + ?Sized>(self) -> MeasureFn<G> {
        match self {
            Self::ShortestPath => measures::shortest_path::<G>,
            Self::RadaSimilarity => measures::rada_similarity::<G>,
            Self::ResnikEdge => measures::resnik_edge::<G>,
            Self::WuPalmer => measures::wu_palmer::<G>,
            Self::LeacockChodorow => measures::leacock_chodorow::<G>,
            Self::HirstStOnge => measures::hirst_st_onge::<G>,
        }
    }

    /// Score `concept1` against `concept2`.
    pub fn evaluate<G: GraphStore + ?Sized>(
        self,
        graph: &G,
        concept1: &str,
        concept2: &str,
        options: &MeasureOptions,
    ) -> f64 {
        match self {
            Self::ShortestPath => measures::shortest_path(graph, concept1, concept2, options),
            Self::RadaSimilarity => measures::rada_similarity(graph, concept1, concept2, options),
            Self::ResnikEdge => measures::resnik_edge(graph, concept1, concept2, options),
            Self::WuPalmer => measures::wu_palmer(graph, concept1, concept2, options),
            Self::LeacockChodorow => measures::leacock_chodorow(graph, concept1, concept2, options),
            Self::HirstStOnge => measures::hirst_st_onge(graph, concept1, concept2, options),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Measure {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                GraphError::InvalidInput(format!(
                    "unknown measure '{}' (expected one of: {})",
                    s,
                    Measure::ALL.map(Measure::name).join(", ")
                ))
            })
    }
}
