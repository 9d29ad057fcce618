//! Arena of path prefixes.

/// One path prefix: its last node and the prefix it extends.
#[derive(Debug, Clone, Copy)]
struct PathEntry<'a> {
    node: &'a str,
    parent: Option<usize>,
    length: usize,
}

/// Append-only store of path prefixes linked by parent indices.
///
/// Entry `i` represents the path from the root through `parent` links to
/// `entries[i].node`. Entries are never removed during a search.
#[derive(Debug, Default)]
pub(crate) struct PathArena<'a> {
    entries: Vec<PathEntry<'a>>,
}

impl<'a> PathArena<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Start a new path at `node`.
    pub fn push_root(&mut self, node: &'a str) -> usize {
        self.entries.push(PathEntry {
            node,
            parent: None,
            length: 0,
        });
        self.entries.len() - 1
    }

    /// Extend the path ending at `parent` by `node`.
    pub fn extend(&mut self, parent: usize, node: &'a str) -> usize {
        let length = self.entries[parent].length + 1;
        self.entries.push(PathEntry {
            node,
            parent: Some(parent),
            length,
        });
        self.entries.len() - 1
    }

    /// Last node of the path ending at `entry`.
    #[inline]
    pub fn node(&self, entry: usize) -> &'a str {
        self.entries[entry].node
    }

    /// Edge count of the path ending at `entry`.
    #[inline]
    pub fn length(&self, entry: usize) -> usize {
        self.entries[entry].length
    }

    /// Whether `node` occurs anywhere on the path ending at `entry`.
    ///
    /// Walks the parent chain: O(path length), bounded by `max_length + 1`.
    pub fn contains(&self, entry: usize, node: &str) -> bool {
        let mut cursor = Some(entry);
        while let Some(idx) = cursor {
            let current = &self.entries[idx];
            if current.node == node {
                return true;
            }
            cursor = current.parent;
        }
        false
    }

    /// Materialize the path ending at `entry`, root first.
    pub fn path(&self, entry: usize) -> Vec<String> {
        let mut path = Vec::with_capacity(self.entries[entry].length + 1);
        let mut cursor = Some(entry);
        while let Some(idx) = cursor {
            path.push(self.entries[idx].node.to_string());
            cursor = self.entries[idx].parent;
        }
        path.reverse();
        path
    }

    /// Number of stored prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
