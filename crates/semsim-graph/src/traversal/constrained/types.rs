//! Constrained search types.

use std::fmt;

/// Direction of a traversed edge relative to its stored orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Followed an outgoing edge (child -> parent).
    Up,
    /// Followed an incoming edge (parent -> child).
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

/// Search state: a path prefix plus its direction history.
///
/// Immutable once created; expansion produces new states.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchState {
    /// Arena index of the last path entry.
    pub entry: usize,
    /// Direction of the edge that produced `entry` (None at the start node).
    pub last_direction: Option<Direction>,
    /// Direction changes along the prefix.
    pub changes: usize,
}

impl SearchState {
    /// State at the start node.
    pub fn root(entry: usize) -> Self {
        Self {
            entry,
            last_direction: None,
            changes: 0,
        }
    }

    /// State after following one more edge in `direction`.
    ///
    /// The first edge never counts as a change.
    pub fn step(&self, entry: usize, direction: Direction) -> Self {
        let changes = match self.last_direction {
            Some(prev) if prev != direction => self.changes + 1,
            _ => self.changes,
        };
        Self {
            entry,
            last_direction: Some(direction),
            changes,
        }
    }
}

/// Result of a constrained path search.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedSearchResult {
    /// Best score, floored at 0.
    pub score: f64,

    /// Path with the highest raw score (first found among ties).
    /// None when `concept2` was never reached within `max_length`.
    pub best_path: Option<Vec<String>>,

    /// Direction changes along `best_path` (0 without a path).
    pub direction_changes: usize,

    /// Number of states dequeued.
    pub states_explored: usize,

    /// Number of times `concept2` was reached.
    pub completions: usize,
}

impl ConstrainedSearchResult {
    /// Result for a search that never ran (absent concept).
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            score: 0.0,
            best_path: None,
            direction_changes: 0,
            states_explored: 0,
            completions: 0,
        }
    }

    /// Whether any path reached `concept2`.
    #[must_use]
    pub fn path_found(&self) -> bool {
        self.best_path.is_some()
    }

    /// Edge count of the best path.
    #[must_use]
    pub fn path_length(&self) -> Option<usize> {
        self.best_path.as_ref().map(|path| path.len() - 1)
    }
}
