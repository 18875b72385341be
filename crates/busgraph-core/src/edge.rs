//! Directed edges of the communication graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed relation between two named graph nodes.
///
/// The label carries the mediating topic name for node-to-node edges and is
/// semantically meaningless for synthetic edges. Edges are immutable value
/// objects: equality, ordering, and hashing cover the full
/// `(start, end, label)` tuple so edges can live in ordered sets and be
/// removed by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub label: String,
}

impl Edge {
    pub fn new(start: impl Into<String>, end: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: label.into(),
        }
    }

    /// An edge with no topic label (synthetic or mode-internal).
    pub fn unlabeled(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new(start, end, "")
    }

    /// True if either endpoint matches the given name.
    pub fn touches(&self, name: &str) -> bool {
        self.start == name || self.end == name
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{} -> {}", self.start, self.end)
        } else {
            write!(f, "{} -> {} [{}]", self.start, self.end, self.label)
        }
    }
}
