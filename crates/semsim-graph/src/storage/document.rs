//! JSON document form of a taxonomy.
//!
//! ```json
//! {
//!   "nodes": ["animal", "mammal", "dog"],
//!   "edges": [
//!     { "source": "mammal", "target": "animal", "predicate": "is-a" },
//!     { "source": "dog", "target": "mammal" }
//!   ]
//! }
//! ```
//!
//! `nodes` may be omitted or partial: every edge endpoint is added
//! implicitly. A missing `predicate` defaults to [`DEFAULT_PREDICATE`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

use super::Taxonomy;

/// Label used for edges whose document record has no predicate.
pub const DEFAULT_PREDICATE: &str = "is-a";

fn default_predicate() -> String {
    DEFAULT_PREDICATE.to_string()
}

/// One edge in a taxonomy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// The more specific concept.
    pub source: String,
    /// The more general concept.
    pub target: String,
    /// Edge label.
    #[serde(default = "default_predicate")]
    pub predicate: String,
}

impl EdgeRecord {
    /// Create an edge record.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            predicate: predicate.into(),
        }
    }
}

/// Serializable node/edge listing used to build a [`Taxonomy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDocument {
    /// Nodes, including isolated ones.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Taxonomy {
    /// Build a taxonomy from a document.
    ///
    /// Listed nodes are added first in document order, then edge endpoints,
    /// then edges. Node order therefore follows the document.
    ///
    /// # Errors
    ///
    /// `GraphError::InvalidInput` if any node id (listed or edge endpoint)
    /// is empty.
    pub fn from_document(doc: TaxonomyDocument) -> GraphResult<Self> {
        let mut taxonomy = Taxonomy::with_capacity(doc.nodes.len());

        for node in doc.nodes {
            if node.is_empty() {
                return Err(GraphError::InvalidInput(
                    "taxonomy document lists an empty node id".to_string(),
                ));
            }
            taxonomy.add_node(node);
        }

        for (i, edge) in doc.edges.iter().enumerate() {
            if edge.source.is_empty() || edge.target.is_empty() {
                return Err(GraphError::InvalidInput(format!(
                    "edge #{} has an empty endpoint (source={:?}, target={:?})",
                    i, edge.source, edge.target
                )));
            }
            taxonomy.add_node(edge.source.as_str());
            taxonomy.add_node(edge.target.as_str());
            taxonomy.add_edge(&edge.source, &edge.target, &edge.predicate)?;
        }

        log::debug!(
            "taxonomy built: {} nodes, {} edges",
            taxonomy.node_count(),
            taxonomy.edge_count()
        );
        Ok(taxonomy)
    }

    /// Parse a JSON document and build the taxonomy.
    ///
    /// # Errors
    ///
    /// `GraphError::Deserialization` on malformed JSON, plus the errors of
    /// [`Taxonomy::from_document`].
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let doc: TaxonomyDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Read a JSON document from `reader` and build the taxonomy.
    ///
    /// # Errors
    ///
    /// Same as [`Taxonomy::from_json_str`]; read failures surface as
    /// `GraphError::Io`.
    pub fn from_reader<R: Read>(reader: R) -> GraphResult<Self> {
        let doc: TaxonomyDocument = serde_json::from_reader(reader)?;
        Self::from_document(doc)
    }

    /// Load a taxonomy from a JSON file.
    ///
    /// # Errors
    ///
    /// `GraphError::Io` if the file cannot be opened or read, otherwise as
    /// [`Taxonomy::from_reader`].
    pub fn load_json_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("loading taxonomy from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Document form of this taxonomy, nodes and edges in insertion order.
    #[must_use]
    pub fn to_document(&self) -> TaxonomyDocument {
        TaxonomyDocument {
            nodes: self.nodes().map(str::to_string).collect(),
            edges: self
                .edges()
                .map(|(source, target, predicate)| EdgeRecord::new(source, target, predicate))
                .collect(),
        }
    }

    /// Serialize this taxonomy as a JSON document.
    ///
    /// # Errors
    ///
    /// `GraphError::Serialization` if serde_json fails.
    pub fn to_json_string(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| GraphError::Serialization(e.to_string()))
    }
}
