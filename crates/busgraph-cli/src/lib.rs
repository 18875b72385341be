//! busgraph command-line interface.
//!
//! Loads a [`GraphSnapshot`] from a JSON file and renders it as DOT, or
//! enumerates the namespaces a render would display.

use busgraph_core::{Error, ErrorKind, GraphMode, GraphSnapshot, Result};
use busgraph_dot::{DotFactory, DotcodeGenerator, GraphOptions};

/// Options for running busgraph.
#[derive(Debug, Clone)]
pub struct BusgraphOptions {
    /// Path of the snapshot JSON file.
    pub snapshot: String,
    /// Process name filter, comma-separated include/exclude patterns.
    pub ns_filter: String,
    /// Topic name filter, comma-separated include/exclude patterns.
    pub topic_filter: String,
    pub mode: GraphMode,
    pub graph: GraphOptions,
    /// Print the observed namespaces instead of rendering.
    pub namespaces: bool,
    pub output: Option<String>,
}

/// Main entry point
pub fn run_main(opts: &BusgraphOptions) -> Result<String> {
    let snapshot = load_snapshot(&opts.snapshot)?;
    tracing::debug!(
        processes = snapshot.process_nodes.len(),
        topics = snapshot.topic_nodes.len(),
        "snapshot loaded"
    );
    let generator = DotcodeGenerator::new();

    if opts.namespaces {
        let namespaces = generator.generate_namespaces(&snapshot, opts.mode, opts.graph.quiet);
        let mut listing = namespaces.into_iter().collect::<Vec<_>>().join("\n");
        listing.push('\n');
        return Ok(listing);
    }

    generator.generate(
        &snapshot,
        &opts.ns_filter,
        &opts.topic_filter,
        opts.mode,
        &opts.graph,
        DotFactory::new(),
    )
}

fn load_snapshot(path: &str) -> Result<GraphSnapshot> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context("path", path))?;
    serde_json::from_str(&data).map_err(|e| {
        Error::new(ErrorKind::DeserializationFailed, "snapshot is not valid JSON")
            .with_operation("snapshot::load")
            .with_context("path", path)
            .set_source(e)
    })
}
