//! The staged snapshot-to-graph transformation pipeline.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use busgraph_core::{
    Edge, FaultKind, GraphMode, GraphSnapshot, NameFilter, QuietConfig, Result, display_name,
    namespace_of, node_cluster_namespace, topic_cluster_namespace,
};

use crate::actions::{ActionGroup, collect_action_groups};
use crate::connections::ConnectionMap;
use crate::factory::{ContainerId, GraphFactory, NodeShape, NodeSpec};
use crate::options::{GraphOptions, LayoutOptions};

/// Transforms one communication-graph snapshot into a render-backend
/// description.
///
/// All working state lives inside a single [`generate`](Self::generate)
/// call; the generator carries nothing across calls except its quiet
/// configuration. Snapshot and backend are borrowed per call.
#[derive(Debug, Clone, Default)]
pub struct DotcodeGenerator {
    quiet: QuietConfig,
}

impl DotcodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom quiet name/label lists instead of the ambient defaults.
    pub fn with_quiet_config(quiet: QuietConfig) -> Self {
        Self { quiet }
    }

    /// Run the full pipeline and hand the result back from the factory.
    ///
    /// `ns_filter` applies to process names, `topic_filter` to topic names
    /// (and to edge labels in node-node mode). Malformed filter patterns
    /// fail here, before anything is emitted.
    pub fn generate<F: GraphFactory>(
        &self,
        snapshot: &GraphSnapshot,
        ns_filter: &str,
        topic_filter: &str,
        mode: GraphMode,
        options: &GraphOptions,
        mut factory: F,
    ) -> Result<F::Output> {
        let ns_filter = NameFilter::parse(ns_filter)?;
        let topic_filter = NameFilter::parse(topic_filter)?;

        let (process_nodes, mut topic_nodes, mut edges) =
            self.select_working_set(snapshot, mode, &ns_filter, &topic_filter, options.quiet);
        tracing::debug!(
            processes = process_nodes.len(),
            topics = topic_nodes.len(),
            edges = edges.len(),
            mode = mode.as_str(),
            "selected working set"
        );

        // Connectivity feeds pruning, action detection, and nothing else;
        // node-node mode has no topics to prune or collapse.
        let connections = if mode.includes_topics() {
            ConnectionMap::build(&edges)
        } else {
            ConnectionMap::default()
        };

        if mode.includes_topics()
            && (options.hide_single_connection_topics || options.hide_dead_end_topics)
        {
            let removal: BTreeSet<String> = topic_nodes
                .iter()
                .filter(|topic| {
                    (options.hide_single_connection_topics && connections.degree(topic) < 2)
                        || (options.hide_dead_end_topics && !connections.has_outgoing(topic))
                })
                .cloned()
                .collect();
            if !removal.is_empty() {
                tracing::debug!(removed = removal.len(), "pruned topics");
                topic_nodes.retain(|topic| !removal.contains(topic));
                edges.retain(|e| {
                    !removal.contains(e.start.as_str()) && !removal.contains(e.end.as_str())
                });
            }
        }

        let mut action_groups: Vec<ActionGroup> = Vec::new();
        if mode.includes_topics() && options.accumulate_actions {
            let (groups, removal) = collect_action_groups(&topic_nodes, &connections);
            if !removal.is_empty() {
                tracing::debug!(groups = groups.len(), "collapsed action groups");
                topic_nodes.retain(|topic| !removal.contains(topic));
                edges.retain(|e| {
                    !removal.contains(e.start.as_str()) && !removal.contains(e.end.as_str())
                });
            }
            action_groups = groups;
        }

        // Defensive re-validation after the removal passes.
        {
            let names: HashSet<&str> = process_nodes
                .iter()
                .chain(topic_nodes.iter())
                .map(String::as_str)
                .collect();
            edges.retain(|e| names.contains(e.start.as_str()) && names.contains(e.end.as_str()));
        }

        // Orphan cleanup applies to topics only; an unconnected process is
        // still worth showing.
        {
            let touched: HashSet<&str> = edges
                .iter()
                .flat_map(|e| [e.start.as_str(), e.end.as_str()])
                .collect();
            topic_nodes.retain(|topic| touched.contains(topic.as_str()));
        }

        self.emit(
            snapshot,
            mode,
            options,
            &process_nodes,
            &topic_nodes,
            &edges,
            &action_groups,
            &mut factory,
        );
        Ok(factory.finish())
    }

    /// Namespaces of the nodes a generation pass over the same inputs would
    /// display, with no name filtering applied.
    pub fn generate_namespaces(
        &self,
        snapshot: &GraphSnapshot,
        mode: GraphMode,
        quiet: bool,
    ) -> BTreeSet<String> {
        let keep = |name: &str| !quiet || !self.quiet.suppresses_node(name);
        let mut namespaces = BTreeSet::new();

        for node in &snapshot.process_nodes {
            let node = display_name(node);
            if keep(node) {
                namespaces.insert(namespace_of(node).to_string());
            }
        }
        if mode.includes_topics() {
            for topic in &snapshot.topic_nodes {
                let topic = display_name(topic);
                if keep(topic) {
                    namespaces.insert(namespace_of(topic).to_string());
                }
            }
        }

        namespaces
    }

    /// Stage 2–5: mode selection, quiet suppression, name filtering, and
    /// endpoint intersection.
    fn select_working_set(
        &self,
        snapshot: &GraphSnapshot,
        mode: GraphMode,
        ns_filter: &NameFilter,
        topic_filter: &NameFilter,
        quiet: bool,
    ) -> (Vec<String>, Vec<String>, BTreeSet<Edge>) {
        let mut process_nodes: Vec<String> = snapshot
            .process_nodes
            .iter()
            .map(|n| display_name(n).to_string())
            .collect();
        let mut topic_nodes: Vec<String> = if mode.includes_topics() {
            snapshot
                .topic_nodes
                .iter()
                .map(|n| display_name(n).to_string())
                .collect()
        } else {
            Vec::new()
        };

        if quiet {
            process_nodes.retain(|n| !self.quiet.suppresses_node(n));
            topic_nodes.retain(|n| !self.quiet.suppresses_node(n));
        }

        process_nodes.retain(|n| ns_filter.keeps(n));
        topic_nodes.retain(|n| topic_filter.keeps(n));

        let mut edges: BTreeSet<Edge> = snapshot
            .edges_for_mode(mode)
            .iter()
            .map(|e| Edge::new(display_name(&e.start), display_name(&e.end), e.label.clone()))
            .collect();

        if mode == GraphMode::NodeNode {
            edges.retain(|e| topic_filter.keeps(&e.label));
        }
        if quiet {
            edges.retain(|e| !self.quiet.suppresses_edge(e));
        }

        // AND semantics: an edge is dropped even when only one endpoint was
        // filtered out, to avoid dangling edges.
        let names: HashSet<&str> = process_nodes
            .iter()
            .chain(topic_nodes.iter())
            .map(String::as_str)
            .collect();
        edges.retain(|e| names.contains(e.start.as_str()) && names.contains(e.end.as_str()));

        (process_nodes, topic_nodes, edges)
    }

    /// Stage 11–15: cluster assignment and emission.
    #[allow(clippy::too_many_arguments)]
    fn emit<F: GraphFactory>(
        &self,
        snapshot: &GraphSnapshot,
        mode: GraphMode,
        options: &GraphOptions,
        process_nodes: &[String],
        topic_nodes: &[String],
        edges: &BTreeSet<Edge>,
        action_groups: &[ActionGroup],
        factory: &mut F,
    ) {
        let layout = options.layout();
        let root = factory.create_graph(&layout);
        let mut clusters: BTreeMap<String, ContainerId> = BTreeMap::new();

        for topic in topic_nodes {
            let container =
                topic_container(topic, options, root, &mut clusters, factory, &layout);
            let url = format!("topic:{topic}");
            factory.add_node(
                container,
                &NodeSpec {
                    name: topic,
                    label: Some(topic),
                    shape: NodeShape::Box,
                    url: Some(&url),
                    color: None,
                },
            );
        }

        for group in action_groups {
            let full = group.full_name();
            let container =
                topic_container(&full, options, root, &mut clusters, factory, &layout);
            let name = group.node_name();
            let url = format!("topic:{name}");
            factory.add_node(
                container,
                &NodeSpec {
                    name: &name,
                    label: Some(&name),
                    shape: NodeShape::Box,
                    url: Some(&url),
                    color: None,
                },
            );
        }

        let mut emitted: HashSet<String> = topic_nodes.iter().cloned().collect();
        emitted.extend(action_groups.iter().map(ActionGroup::node_name));

        for process in process_nodes {
            let fault = snapshot.fault_of(process);
            if options.quiet && fault.is_some() {
                continue;
            }
            // A process joins a namespace cluster only when its peer topics
            // already created one.
            let container = if options.cluster_namespaces_level > 0 {
                node_cluster_namespace(process)
                    .and_then(|ns| clusters.get(ns).copied())
                    .unwrap_or(root)
            } else {
                root
            };
            let (shape, color) = match fault {
                Some(FaultKind::Dead) => (NodeShape::DoubleCircle, Some("red")),
                Some(FaultKind::Unresponsive) => (NodeShape::DoubleCircle, Some("orange")),
                None => (NodeShape::Ellipse, None),
            };
            factory.add_node(
                container,
                &NodeSpec {
                    name: process,
                    label: None,
                    shape,
                    url: Some(process),
                    color,
                },
            );
            emitted.insert(process.clone());
        }

        for edge in edges {
            if !emitted.contains(edge.start.as_str()) || !emitted.contains(edge.end.as_str()) {
                continue;
            }
            let label = (!edge.label.is_empty()).then_some(edge.label.as_str());
            // In node-node mode the label names the mediating topic, so the
            // edge doubles as a topic hyperlink.
            let url = (mode == GraphMode::NodeNode).then(|| format!("topic:{}", edge.label));
            factory.add_edge(root, &edge.start, &edge.end, label, url.as_deref());
        }

        for group in action_groups {
            let name = group.node_name();
            for out in &group.outgoing {
                if emitted.contains(out.end.as_str()) {
                    factory.add_edge(root, &name, &out.end, None, None);
                }
            }
            for inc in &group.incoming {
                if emitted.contains(inc.start.as_str()) {
                    factory.add_edge(root, &inc.start, &name, None, None);
                }
            }
        }
    }
}

/// Resolve the container for a topic-like node, lazily creating its
/// namespace cluster on first use.
fn topic_container<F: GraphFactory>(
    name: &str,
    options: &GraphOptions,
    root: ContainerId,
    clusters: &mut BTreeMap<String, ContainerId>,
    factory: &mut F,
    layout: &LayoutOptions,
) -> ContainerId {
    if options.cluster_namespaces_level == 0 {
        return root;
    }
    match topic_cluster_namespace(name) {
        Some(ns) => *clusters
            .entry(ns.to_string())
            .or_insert_with(|| factory.create_subgraph(root, ns, layout)),
        None => root,
    }
}
