//! Configuration types for taxonomy traversal.
//!
//! This module provides configuration structures for:
//! - Hirst-St-Onge constrained path search (HirstStOngeConfig)
//!
//! Edge filtering is not configuration: a [`PredicateFilter`](crate::storage::PredicateFilter)
//! is passed explicitly into every traversal call.

mod hirst_st_onge;

pub use self::hirst_st_onge::HirstStOngeConfig;

#[cfg(test)]
mod tests;
