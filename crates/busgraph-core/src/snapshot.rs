//! An introspected snapshot of the live communication graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::mode::GraphMode;

/// Fault annotation for a process node, as reported by the introspection
/// layer. Absence from the fault map means healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The process no longer responds at all.
    Dead,
    /// The process is reachable but not behaving (stale registration,
    /// unanswered probes).
    Unresponsive,
}

/// One materialized observation of the communication graph.
///
/// Topic names may carry the source's leading-space marker; the generator
/// normalizes them at intake. The snapshot is plain borrowed data: the
/// generator never mutates it or holds onto it across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Process peers participating in the bus.
    #[serde(default)]
    pub process_nodes: Vec<String>,
    /// Named channels, in the source's marker form.
    #[serde(default)]
    pub topic_nodes: Vec<String>,
    /// Process-to-process edges, labeled with the mediating topic.
    #[serde(default)]
    pub node_edges: Vec<Edge>,
    /// Process-to-topic edges with a live network connection behind them.
    #[serde(default)]
    pub topic_edges_active: Vec<Edge>,
    /// Process-to-topic edges including registered-but-inactive ones.
    #[serde(default)]
    pub topic_edges_all: Vec<Edge>,
    /// Fault kind by process name.
    #[serde(default)]
    pub faults: HashMap<String, FaultKind>,
}

impl GraphSnapshot {
    /// The edge collection a graph mode operates on.
    pub fn edges_for_mode(&self, mode: GraphMode) -> &[Edge] {
        match mode {
            GraphMode::NodeNode => &self.node_edges,
            GraphMode::NodeTopic => &self.topic_edges_active,
            GraphMode::NodeTopicAll => &self.topic_edges_all,
        }
    }

    /// Fault annotation for a process, if any.
    pub fn fault_of(&self, name: &str) -> Option<FaultKind> {
        self.faults.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let snapshot: GraphSnapshot = serde_json::from_str(
            r#"{
                "process_nodes": ["/talker"],
                "topic_nodes": [" /chat"],
                "topic_edges_active": [
                    {"start": "/talker", "end": " /chat", "label": "/chat"}
                ],
                "faults": {"/talker": "dead"}
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.process_nodes, vec!["/talker".to_string()]);
        assert_eq!(snapshot.topic_nodes, vec![" /chat".to_string()]);
        assert!(snapshot.node_edges.is_empty());
        assert!(snapshot.topic_edges_all.is_empty());
        assert_eq!(snapshot.fault_of("/talker"), Some(FaultKind::Dead));
        assert_eq!(snapshot.fault_of("/listener"), None);
    }

    #[test]
    fn test_edges_for_mode() {
        let snapshot = GraphSnapshot {
            node_edges: vec![Edge::new("/a", "/b", "/t")],
            topic_edges_active: vec![Edge::new("/a", " /t", "")],
            topic_edges_all: vec![
                Edge::new("/a", " /t", ""),
                Edge::new("/b", " /t", ""),
            ],
            ..Default::default()
        };

        assert_eq!(snapshot.edges_for_mode(GraphMode::NodeNode).len(), 1);
        assert_eq!(snapshot.edges_for_mode(GraphMode::NodeTopic).len(), 1);
        assert_eq!(snapshot.edges_for_mode(GraphMode::NodeTopicAll).len(), 2);
    }

    #[test]
    fn test_fault_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&FaultKind::Unresponsive).unwrap(),
            r#""unresponsive""#
        );
    }
}
