//! Path-based similarity measures.
//!
//! Every measure has the shape
//! `fn(graph, concept1, concept2, &MeasureOptions) -> f64` and returns 0
//! when a concept is absent or no qualifying path exists. None of them fail.
//!
//! - [`path`]: shortest path length, Rada similarity, Resnik edge counting
//! - [`ancestry`]: Wu-Palmer and Leacock-Chodorow over common ancestors
//! - [`chain`]: Hirst-St-Onge lexical-chain score

pub mod ancestry;
pub mod chain;
pub mod path;


pub use ancestry::{leacock_chodorow, wu_palmer};
pub use chain::hirst_st_onge;
pub use path::{rada_similarity, resnik_edge, shortest_path};
