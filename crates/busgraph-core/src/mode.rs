//! Graph mode selection.

use std::str::FromStr;

use busgraph_error::Error;

/// Which node and edge sets participate in a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphMode {
    /// Process-to-process connectivity; edges are labeled with the
    /// mediating topic.
    NodeNode,
    /// Processes and topics; only edges with an active network connection.
    #[default]
    NodeTopic,
    /// Processes and topics; all edges, including inactive ones.
    NodeTopicAll,
}

impl GraphMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphMode::NodeNode => "node-node",
            GraphMode::NodeTopic => "node-topic",
            GraphMode::NodeTopicAll => "node-topic-all",
        }
    }

    /// True if topic nodes are part of the working set.
    pub fn includes_topics(&self) -> bool {
        !matches!(self, GraphMode::NodeNode)
    }
}

impl FromStr for GraphMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node-node" | "node_node" => Ok(GraphMode::NodeNode),
            "node-topic" | "node_topic" => Ok(GraphMode::NodeTopic),
            "node-topic-all" | "node_topic_all" => Ok(GraphMode::NodeTopicAll),
            other => Err(Error::unknown_mode(other).with_operation("mode::parse")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [
            GraphMode::NodeNode,
            GraphMode::NodeTopic,
            GraphMode::NodeTopicAll,
        ] {
            assert_eq!(mode.as_str().parse::<GraphMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "node-everything".parse::<GraphMode>().unwrap_err();
        assert_eq!(err.kind(), busgraph_error::ErrorKind::UnknownMode);
    }

    #[test]
    fn test_includes_topics() {
        assert!(!GraphMode::NodeNode.includes_topics());
        assert!(GraphMode::NodeTopic.includes_topics());
        assert!(GraphMode::NodeTopicAll.includes_topics());
    }
}
