//! Graph generation module producing renderable graph descriptions.
//!
//! This module transforms a [`busgraph_core::GraphSnapshot`] into an abstract
//! graph description handed to a [`GraphFactory`] render backend. The staged
//! pipeline filters nodes and topics by name patterns, prunes dead-end and
//! single-connection topics, collapses five-topic action groups into one
//! virtual node, clusters same-namespace topics into subgraphs, and keeps
//! edges consistent with the surviving node set throughout.
//!
//! # Module Structure
//!
//! - [`generator`]: the staged transformation pipeline
//! - [`factory`]: the abstract render-backend capability trait
//! - [`dot`]: the DOT text backend and format helpers
//! - [`options`]: generation and layout options

mod actions;
mod connections;
mod dot;
mod factory;
mod generator;
mod options;

pub use actions::ActionGroup;
pub use connections::ConnectionMap;
pub use dot::{DotFactory, escape_label, sanitize_id};
pub use factory::{ContainerId, GraphFactory, NodeShape, NodeSpec};
pub use generator::DotcodeGenerator;
pub use options::{GraphOptions, LayoutOptions, Orientation, Rank};
