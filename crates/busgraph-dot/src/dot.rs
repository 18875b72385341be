//! DOT text backend and format helpers.

use std::collections::HashSet;
use std::fmt::Write;

use crate::factory::{ContainerId, GraphFactory, NodeSpec};
use crate::options::LayoutOptions;

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT labels and quoted identifiers.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

#[derive(Debug)]
struct Cluster {
    name: String,
    attrs: String,
    body: String,
}

/// [`GraphFactory`] backend producing DOT text.
///
/// Containers buffer their statements separately; `finish` assembles the
/// final digraph with namespace clusters ahead of the root statements.
/// When the layout requests `simplify`, repeated identical edges are
/// written once.
#[derive(Debug, Default)]
pub struct DotFactory {
    graph_attrs: String,
    root_body: String,
    clusters: Vec<Cluster>,
    simplify: bool,
    seen_edges: HashSet<String>,
}

impl DotFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn container_body(&mut self, container: ContainerId) -> &mut String {
        match container.0 {
            0 => &mut self.root_body,
            id => &mut self.clusters[id as usize - 1].body,
        }
    }

    fn indent_of(container: ContainerId) -> usize {
        if container.0 == 0 { 1 } else { 2 }
    }

    fn write_layout(attrs: &mut String, layout: &LayoutOptions, indent: usize) {
        if let Some(rank) = layout.rank {
            write_indent(attrs, indent);
            let _ = writeln!(attrs, "rank=\"{}\";", rank.as_str());
        }
        write_indent(attrs, indent);
        let _ = writeln!(attrs, "ranksep={};", layout.rank_separation);
        write_indent(attrs, indent);
        let _ = writeln!(attrs, "rankdir=\"{}\";", layout.rank_direction.as_str());
    }
}

impl GraphFactory for DotFactory {
    type Output = String;

    fn create_graph(&mut self, layout: &LayoutOptions) -> ContainerId {
        self.simplify = layout.simplify;
        Self::write_layout(&mut self.graph_attrs, layout, 1);
        ContainerId(0)
    }

    fn create_subgraph(
        &mut self,
        _parent: ContainerId,
        name: &str,
        layout: &LayoutOptions,
    ) -> ContainerId {
        let mut attrs = String::new();
        write_indent(&mut attrs, 2);
        let _ = writeln!(attrs, "label=\"{}\";", escape_label(name));
        Self::write_layout(&mut attrs, layout, 2);

        self.clusters.push(Cluster {
            name: name.to_string(),
            attrs,
            body: String::new(),
        });
        ContainerId(self.clusters.len() as u32)
    }

    fn add_node(&mut self, container: ContainerId, spec: &NodeSpec<'_>) {
        let indent = Self::indent_of(container);
        let mut line = String::new();
        write_indent(&mut line, indent);
        let _ = write!(
            line,
            "\"{}\"[label=\"{}\", shape={}",
            escape_label(spec.name),
            escape_label(spec.label.unwrap_or(spec.name)),
            spec.shape.as_str()
        );
        if let Some(url) = spec.url {
            let _ = write!(line, ", URL=\"{}\"", escape_label(url));
        }
        if let Some(color) = spec.color {
            let _ = write!(line, ", color=\"{}\"", escape_label(color));
        }
        line.push_str("];\n");
        self.container_body(container).push_str(&line);
    }

    fn add_edge(
        &mut self,
        container: ContainerId,
        start: &str,
        end: &str,
        label: Option<&str>,
        url: Option<&str>,
    ) {
        if self.simplify {
            let key = format!(
                "{}\u{1}{start}\u{1}{end}\u{1}{}\u{1}{}",
                container.0,
                label.unwrap_or(""),
                url.unwrap_or("")
            );
            if !self.seen_edges.insert(key) {
                return;
            }
        }

        let indent = Self::indent_of(container);
        let mut line = String::new();
        write_indent(&mut line, indent);
        let _ = write!(
            line,
            "\"{}\" -> \"{}\"",
            escape_label(start),
            escape_label(end)
        );
        let mut attrs = Vec::new();
        if let Some(label) = label {
            attrs.push(format!("label=\"{}\"", escape_label(label)));
        }
        if let Some(url) = url {
            attrs.push(format!("URL=\"{}\"", escape_label(url)));
        }
        if !attrs.is_empty() {
            let _ = write!(line, "[{}]", attrs.join(", "));
        }
        line.push_str(";\n");
        self.container_body(container).push_str(&line);
    }

    fn finish(self) -> String {
        let estimated = self.graph_attrs.len() + self.root_body.len() + 200;
        let mut output = String::with_capacity(estimated);

        output.push_str("digraph G {\n");
        output.push_str(&self.graph_attrs);

        for cluster in &self.clusters {
            write_indent(&mut output, 1);
            let _ = writeln!(output, "subgraph cluster_{} {{", sanitize_id(&cluster.name));
            output.push_str(&cluster.attrs);
            output.push_str(&cluster.body);
            write_indent(&mut output, 1);
            output.push_str("}\n");
        }

        output.push_str(&self.root_body);
        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use crate::factory::NodeShape;
    use crate::options::{LayoutOptions, Orientation, Rank};

    use super::*;

    fn layout() -> LayoutOptions {
        LayoutOptions {
            rank: Some(Rank::Same),
            rank_separation: 0.2,
            rank_direction: Orientation::LeftRight,
            simplify: true,
        }
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("sensors"), "sensors");
        assert_eq!(sanitize_id("/arm/move"), "_arm_move");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a\"b"), "a\\\"b");
        assert_eq!(escape_label("a\nb"), "a\\nb");
        assert_eq!(escape_label("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_graph_assembly() {
        let mut factory = DotFactory::new();
        let root = factory.create_graph(&layout());
        factory.add_node(
            root,
            &NodeSpec {
                name: "/talker",
                label: None,
                shape: NodeShape::Ellipse,
                url: Some("/talker"),
                color: None,
            },
        );
        factory.add_edge(root, "/talker", "/chat", Some("/chat"), None);
        let dot = factory.finish();

        assert!(dot.starts_with("digraph G {\n"));
        assert!(dot.contains("rankdir=\"LR\";"));
        assert!(dot.contains("ranksep=0.2;"));
        assert!(dot.contains("\"/talker\"[label=\"/talker\", shape=ellipse, URL=\"/talker\"];"));
        assert!(dot.contains("\"/talker\" -> \"/chat\"[label=\"/chat\"];"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_cluster_precedes_root_statements() {
        let mut factory = DotFactory::new();
        let root = factory.create_graph(&layout());
        let cluster = factory.create_subgraph(root, "sensors", &layout());
        factory.add_node(
            cluster,
            &NodeSpec {
                name: "/sensors/imu",
                label: Some("/sensors/imu"),
                shape: NodeShape::Box,
                url: None,
                color: None,
            },
        );
        factory.add_edge(root, "/driver", "/sensors/imu", None, None);
        let dot = factory.finish();

        let cluster_pos = dot.find("subgraph cluster_sensors {").unwrap();
        let edge_pos = dot.find("\"/driver\" -> \"/sensors/imu\";").unwrap();
        assert!(cluster_pos < edge_pos);
        assert!(dot.contains("label=\"sensors\";"));
    }

    #[test]
    fn test_simplify_suppresses_duplicate_edges() {
        let mut factory = DotFactory::new();
        let root = factory.create_graph(&layout());
        factory.add_edge(root, "/a", "/b", None, None);
        factory.add_edge(root, "/a", "/b", None, None);
        factory.add_edge(root, "/a", "/b", Some("/t"), None);
        let dot = factory.finish();

        assert_eq!(dot.matches("\"/a\" -> \"/b\";").count(), 1);
        assert_eq!(dot.matches("\"/a\" -> \"/b\"[label=\"/t\"];").count(), 1);
    }

    #[test]
    fn test_no_simplify_keeps_duplicates() {
        let mut factory = DotFactory::new();
        let mut opts = layout();
        opts.simplify = false;
        let root = factory.create_graph(&opts);
        factory.add_edge(root, "/a", "/b", None, None);
        factory.add_edge(root, "/a", "/b", None, None);
        let dot = factory.finish();

        assert_eq!(dot.matches("\"/a\" -> \"/b\";").count(), 2);
    }
}
