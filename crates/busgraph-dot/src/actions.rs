//! Detection and collapsing of five-topic action groups.
//!
//! An action is a conventional interaction pattern implemented as five
//! sibling topics under one prefix. Detection is all-or-nothing: a prefix
//! with only a subset of the suffixes is left untouched.

use std::collections::BTreeSet;

use busgraph_core::Edge;

use crate::connections::ConnectionMap;

/// The five topic suffixes that make up one action.
pub const ACTION_SUFFIXES: [&str; 5] = ["/status", "/result", "/goal", "/cancel", "/feedback"];

/// Name suffix of the virtual node standing in for a collapsed group.
pub const ACTION_NODE_SUFFIX: &str = "/action_topics";

/// One detected action group: the shared prefix, its five constituent
/// topics, and the union of their incident edges. Lives only for the
/// duration of a generation pass.
#[derive(Debug, Clone)]
pub struct ActionGroup {
    pub prefix: String,
    pub topics: Vec<String>,
    pub outgoing: BTreeSet<Edge>,
    pub incoming: BTreeSet<Edge>,
}

impl ActionGroup {
    /// Full name of the virtual node, used for cluster assignment.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.prefix, ACTION_NODE_SUFFIX)
    }

    /// Emitted name of the virtual node: the full name with its leading
    /// separator stripped.
    pub fn node_name(&self) -> String {
        let full = self.full_name();
        full.strip_prefix('/').map(String::from).unwrap_or(full)
    }
}

/// Scan the topic set for complete action groups.
///
/// Returns the detected groups and the set of topic names they absorb; the
/// caller materializes the shrunken working set from the removal set.
pub fn collect_action_groups(
    topic_nodes: &[String],
    connections: &ConnectionMap,
) -> (Vec<ActionGroup>, BTreeSet<String>) {
    let mut groups = Vec::new();
    let mut removal = BTreeSet::new();

    for topic in topic_nodes {
        let Some(prefix) = topic.strip_suffix("/feedback") else {
            continue;
        };

        let members: Vec<String> = ACTION_SUFFIXES
            .iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .filter(|candidate| topic_nodes.contains(candidate))
            .collect();
        if members.len() != ACTION_SUFFIXES.len() {
            continue;
        }

        let mut outgoing = BTreeSet::new();
        let mut incoming = BTreeSet::new();
        for member in &members {
            if let Some(conns) = connections.get(member) {
                outgoing.extend(conns.outgoing.iter().cloned());
                incoming.extend(conns.incoming.iter().cloned());
            }
        }

        removal.extend(members.iter().cloned());
        groups.push(ActionGroup {
            prefix: prefix.to_string(),
            topics: members,
            outgoing,
            incoming,
        });
    }

    (groups, removal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_topics(prefix: &str) -> Vec<String> {
        ACTION_SUFFIXES
            .iter()
            .map(|s| format!("{prefix}{s}"))
            .collect()
    }

    #[test]
    fn test_complete_group_is_detected() {
        let topics = action_topics("/arm/move");
        let connections = ConnectionMap::build(&[]);

        let (groups, removal) = collect_action_groups(&topics, &connections);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].prefix, "/arm/move");
        assert_eq!(removal.len(), 5);
    }

    #[test]
    fn test_partial_group_is_ignored() {
        let mut topics = action_topics("/arm/move");
        topics.retain(|t| !t.ends_with("/goal"));
        let connections = ConnectionMap::build(&[]);

        let (groups, removal) = collect_action_groups(&topics, &connections);
        assert!(groups.is_empty());
        assert!(removal.is_empty());
    }

    #[test]
    fn test_edge_unions_come_from_all_members() {
        let topics = action_topics("/act");
        let edges: Vec<Edge> = topics
            .iter()
            .map(|t| Edge::new("/client", t.clone(), ""))
            .collect();
        let connections = ConnectionMap::build(&edges);

        let (groups, _) = collect_action_groups(&topics, &connections);
        assert_eq!(groups[0].incoming.len(), 5);
        assert!(groups[0].outgoing.is_empty());
    }

    #[test]
    fn test_virtual_node_names() {
        let group = ActionGroup {
            prefix: "/act".to_string(),
            topics: Vec::new(),
            outgoing: BTreeSet::new(),
            incoming: BTreeSet::new(),
        };
        assert_eq!(group.full_name(), "/act/action_topics");
        assert_eq!(group.node_name(), "act/action_topics");
    }
}
