use busgraph_core::{Edge, GraphMode, GraphSnapshot};
use busgraph_dot::{DotFactory, DotcodeGenerator, GraphOptions, Orientation};

fn arm_snapshot() -> GraphSnapshot {
    GraphSnapshot {
        process_nodes: vec!["/arm/controller".into(), "/planner".into()],
        topic_nodes: vec![" /arm/state".into(), " /plan".into()],
        topic_edges_active: vec![
            Edge::unlabeled("/arm/controller", " /arm/state"),
            Edge::unlabeled(" /arm/state", "/planner"),
            Edge::unlabeled("/planner", " /plan"),
            Edge::unlabeled(" /plan", "/arm/controller"),
        ],
        ..Default::default()
    }
}

#[test]
fn end_to_end_dot_document() {
    let generator = DotcodeGenerator::new();
    let dot = generator
        .generate(
            &arm_snapshot(),
            "/",
            "/",
            GraphMode::NodeTopic,
            &GraphOptions::default(),
            DotFactory::new(),
        )
        .unwrap();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("rankdir=\"LR\";"));
    assert!(dot.contains("\"/arm/state\"[label=\"/arm/state\", shape=box, URL=\"topic:/arm/state\"];"));
    assert!(dot.contains("\"/planner\"[label=\"/planner\", shape=ellipse, URL=\"/planner\"];"));
    assert!(dot.contains("\"/arm/controller\" -> \"/arm/state\";"));
}

#[test]
fn clustered_dot_document_nests_namespace_topics() {
    let generator = DotcodeGenerator::new();
    let options = GraphOptions {
        cluster_namespaces_level: 1,
        orientation: Orientation::TopBottom,
        ..Default::default()
    };
    let dot = generator
        .generate(
            &arm_snapshot(),
            "/",
            "/",
            GraphMode::NodeTopic,
            &options,
            DotFactory::new(),
        )
        .unwrap();

    assert!(dot.contains("subgraph cluster_arm {"));
    assert!(dot.contains("rankdir=\"TB\";"));

    // The clustered topic is declared inside the subgraph block.
    let cluster_start = dot.find("subgraph cluster_arm {").unwrap();
    let cluster_end = cluster_start + dot[cluster_start..].find("\n  }\n").unwrap();
    let cluster_block = &dot[cluster_start..cluster_end];
    assert!(cluster_block.contains("\"/arm/state\""));
    assert!(!cluster_block.contains("\"/plan\""));
}

#[test]
fn empty_snapshot_yields_an_empty_digraph() {
    let generator = DotcodeGenerator::new();
    let dot = generator
        .generate(
            &GraphSnapshot::default(),
            "/",
            "/",
            GraphMode::NodeTopic,
            &GraphOptions::default(),
            DotFactory::new(),
        )
        .unwrap();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(!dot.contains("->"));
}
