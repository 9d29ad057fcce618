//! Common-ancestor discovery.
//!
//! This module provides functions for finding the ancestors shared by two
//! nodes in an is-a hierarchy.
//!
//! # Algorithm
//!
//! 1. Collect the full forward closure of `a` (the node itself included)
//! 2. BFS the forward closure of `b`
//! 3. Report every node of the second BFS that is in the first closure,
//!    in the order it is dequeued
//!
//! No least-depth pruning is applied: every common ancestor is a candidate
//! and callers pick the best-scoring one.

mod ancestors;


pub use ancestors::{ancestor_closure, lowest_common_ancestors};
