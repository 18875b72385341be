//! Abstract render-backend capability trait.

use crate::options::LayoutOptions;

/// Handle to a container (the root graph or one of its subgraphs) issued by
/// a [`GraphFactory`]. Opaque to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u32);

/// Node shape hints understood by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Healthy process node.
    Ellipse,
    /// Topic node.
    Box,
    /// Faulted process node.
    DoubleCircle,
}

impl NodeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Ellipse => "ellipse",
            NodeShape::Box => "box",
            NodeShape::DoubleCircle => "doublecircle",
        }
    }
}

/// Everything a backend needs to draw one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec<'a> {
    pub name: &'a str,
    /// Display label; backends fall back to the name when absent.
    pub label: Option<&'a str>,
    pub shape: NodeShape,
    pub url: Option<&'a str>,
    pub color: Option<&'a str>,
}

/// Capability set of a render backend.
///
/// The generator drives a factory through these five operations and never
/// inspects the finished output. Containers are created up front and
/// referenced by id; nodes and edges are appended to them.
pub trait GraphFactory {
    /// Finished renderable description.
    type Output;

    /// Create the root graph container with the given layout.
    fn create_graph(&mut self, layout: &LayoutOptions) -> ContainerId;

    /// Create a named subgraph under `parent`.
    fn create_subgraph(
        &mut self,
        parent: ContainerId,
        name: &str,
        layout: &LayoutOptions,
    ) -> ContainerId;

    /// Append a node to a container.
    fn add_node(&mut self, container: ContainerId, spec: &NodeSpec<'_>);

    /// Append a directed edge to a container.
    fn add_edge(
        &mut self,
        container: ContainerId,
        start: &str,
        end: &str,
        label: Option<&str>,
        url: Option<&str>,
    );

    /// Finalize and hand back the renderable description.
    fn finish(self) -> Self::Output;
}
