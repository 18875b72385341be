//! Generation and layout options.

/// Layout direction handed to the render backend as `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    LeftRight,
    TopBottom,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::LeftRight => "LR",
            Orientation::TopBottom => "TB",
        }
    }
}

/// Rank constraint applied to the graph and its subgraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rank {
    #[default]
    Same,
    Min,
    Max,
    Source,
    Sink,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Same => "same",
            Rank::Min => "min",
            Rank::Max => "max",
            Rank::Source => "source",
            Rank::Sink => "sink",
        }
    }
}

/// Layout attributes passed to the backend when creating the graph or a
/// namespace subgraph.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub rank: Option<Rank>,
    pub rank_separation: f64,
    pub rank_direction: Orientation,
    /// Suppress duplicate parallel edges.
    pub simplify: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rank: Some(Rank::Same),
            rank_separation: 0.2,
            rank_direction: Orientation::LeftRight,
            simplify: true,
        }
    }
}

/// Options for one generation pass.
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Remove topic nodes with fewer than two incident edges.
    pub hide_single_connection_topics: bool,
    /// Remove topic nodes with no outgoing edges.
    pub hide_dead_end_topics: bool,
    /// When positive, group same-namespace topics under one subgraph.
    pub cluster_namespaces_level: usize,
    /// Collapse complete five-topic action groups into one virtual node.
    pub accumulate_actions: bool,
    /// Layout direction; used as the effective rank direction.
    pub orientation: Orientation,
    pub rank: Option<Rank>,
    pub rank_separation: f64,
    /// Suppress duplicate parallel edges in the backend.
    pub simplify: bool,
    /// Drop ambient infrastructure peers and channels.
    pub quiet: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            hide_single_connection_topics: false,
            hide_dead_end_topics: false,
            cluster_namespaces_level: 0,
            accumulate_actions: true,
            orientation: Orientation::LeftRight,
            rank: Some(Rank::Same),
            rank_separation: 0.2,
            simplify: true,
            quiet: false,
        }
    }
}

impl GraphOptions {
    /// The layout attributes this pass hands to the backend.
    pub fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            rank: self.rank,
            rank_separation: self.rank_separation,
            rank_direction: self.orientation,
            simplify: self.simplify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_behavior() {
        let opts = GraphOptions::default();
        assert!(opts.accumulate_actions);
        assert!(opts.simplify);
        assert!(!opts.quiet);
        assert_eq!(opts.cluster_namespaces_level, 0);
        assert_eq!(opts.layout(), LayoutOptions::default());
    }

    #[test]
    fn test_orientation_strings() {
        assert_eq!(Orientation::LeftRight.as_str(), "LR");
        assert_eq!(Orientation::TopBottom.as_str(), "TB");
        assert_eq!(Rank::Source.as_str(), "source");
    }
}
