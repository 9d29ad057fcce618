//! Predicate filter for edge-label restricted traversal.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Allow-list of edge labels.
///
/// `All` lets every edge through. `Only` admits an edge iff its label is in
/// the set; an empty `Only` set admits nothing.
///
/// The filter is a plain value passed by reference into each traversal, so
/// two calls with equal filters over the same graph see exactly the same
/// edges.
///
/// # Serde
///
/// Deserializes from `null`, a single string, or a list of strings:
///
/// ```
/// use semsim_graph::PredicateFilter;
///
/// let single: PredicateFilter = serde_json::from_str(r#""is-a""#).unwrap();
/// let list: PredicateFilter = serde_json::from_str(r#"["is-a", "part-of"]"#).unwrap();
/// let none: PredicateFilter = serde_json::from_str("null").unwrap();
///
/// assert!(single.allows("is-a"));
/// assert!(list.allows("part-of"));
/// assert!(none.allows("anything"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PredicateFilter {
    /// No restriction.
    #[default]
    All,
    /// Only edges carrying one of these labels.
    Only(BTreeSet<String>),
}

impl PredicateFilter {
    /// Filter that admits every edge.
    #[must_use]
    pub fn all() -> Self {
        Self::All
    }

    /// Filter that admits only the given labels.
    #[must_use]
    pub fn only<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(labels.into_iter().map(Into::into).collect())
    }

    /// Whether an edge with this label passes the filter.
    #[inline]
    pub fn allows(&self, predicate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(labels) => labels.contains(predicate),
        }
    }

    /// Whether this filter admits every edge.
    #[inline]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for PredicateFilter {
    fn from(label: &str) -> Self {
        Self::only([label])
    }
}

impl From<String> for PredicateFilter {
    fn from(label: String) -> Self {
        Self::only([label])
    }
}

impl From<Vec<String>> for PredicateFilter {
    fn from(labels: Vec<String>) -> Self {
        Self::only(labels)
    }
}

impl From<&[&str]> for PredicateFilter {
    fn from(labels: &[&str]) -> Self {
        Self::only(labels.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PredicateFilter {
    fn from(labels: [&str; N]) -> Self {
        Self::only(labels)
    }
}

impl<T: Into<PredicateFilter>> From<Option<T>> for PredicateFilter {
    fn from(labels: Option<T>) -> Self {
        labels.map_or(Self::All, Into::into)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPredicates {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for PredicateFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawPredicates>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::All,
            Some(RawPredicates::One(label)) => Self::only([label]),
            Some(RawPredicates::Many(labels)) => Self::only(labels),
        })
    }
}

impl Serialize for PredicateFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_none(),
            Self::Only(labels) => serializer.collect_seq(labels),
        }
    }
}
