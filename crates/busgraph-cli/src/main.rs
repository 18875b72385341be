use clap::Parser;

use busgraph::{BusgraphOptions, run_main};
use busgraph_core::{GraphMode, Result};
use busgraph_dot::{GraphOptions, Orientation, Rank};

#[derive(Parser, Debug)]
#[command(
    name = "busgraph",
    about = "busgraph: render a live message-bus communication graph as DOT",
    version
)]
pub struct Cli {
    /// Snapshot JSON file describing the communication graph
    #[arg(value_name = "SNAPSHOT")]
    snapshot: String,

    /// Graph mode: 'node-node', 'node-topic', or 'node-topic-all'
    #[arg(long = "graph-mode", value_name = "MODE", default_value = "node-topic")]
    graph_mode: String,

    /// Process name filter: comma-separated patterns, prefix '-' to exclude
    #[arg(long = "ns-filter", value_name = "FILTER", default_value = "/")]
    ns_filter: String,

    /// Topic name filter: comma-separated patterns, prefix '-' to exclude
    #[arg(long = "topic-filter", value_name = "FILTER", default_value = "/")]
    topic_filter: String,

    /// Hide topics with fewer than two incident edges
    #[arg(long = "hide-single-connection-topics", default_value_t = false)]
    hide_single_connection_topics: bool,

    /// Hide topics with no outgoing edges
    #[arg(long = "hide-dead-end-topics", default_value_t = false)]
    hide_dead_end_topics: bool,

    /// Group same-namespace topics under one cluster (0 disables)
    #[arg(long = "cluster-namespaces-level", value_name = "LEVEL", default_value = "0")]
    cluster_namespaces_level: usize,

    /// Keep the five action topics as individual nodes
    #[arg(long = "no-accumulate-actions", default_value_t = false)]
    no_accumulate_actions: bool,

    /// Layout direction: 'LR' or 'TB'
    #[arg(long, value_name = "DIR", default_value = "LR")]
    orientation: String,

    /// Rank constraint: 'same', 'min', 'max', 'source', 'sink', or 'none'
    #[arg(long, value_name = "RANK", default_value = "same")]
    rank: String,

    /// Vertical distance between layers
    #[arg(long, value_name = "SEP", default_value = "0.2")]
    ranksep: f64,

    /// Keep duplicate parallel edges
    #[arg(long = "no-simplify", default_value_t = false)]
    no_simplify: bool,

    /// Suppress ambient infrastructure peers and channels
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Print the observed namespaces instead of rendering
    #[arg(long, default_value_t = false)]
    namespaces: bool,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let mode: GraphMode = args.graph_mode.parse()?;
    let orientation = match args.orientation.as_str() {
        "LR" => Orientation::LeftRight,
        "TB" => Orientation::TopBottom,
        other => {
            return Err(busgraph_core::Error::config_invalid(format!(
                "unknown orientation '{other}'. Use 'LR' or 'TB'"
            )));
        }
    };
    let rank = match args.rank.as_str() {
        "none" => None,
        "same" => Some(Rank::Same),
        "min" => Some(Rank::Min),
        "max" => Some(Rank::Max),
        "source" => Some(Rank::Source),
        "sink" => Some(Rank::Sink),
        other => {
            return Err(busgraph_core::Error::config_invalid(format!(
                "unknown rank '{other}'. Use 'same', 'min', 'max', 'source', 'sink', or 'none'"
            )));
        }
    };

    let opts = BusgraphOptions {
        snapshot: args.snapshot,
        ns_filter: args.ns_filter,
        topic_filter: args.topic_filter,
        mode,
        graph: GraphOptions {
            hide_single_connection_topics: args.hide_single_connection_topics,
            hide_dead_end_topics: args.hide_dead_end_topics,
            cluster_namespaces_level: args.cluster_namespaces_level,
            accumulate_actions: !args.no_accumulate_actions,
            orientation,
            rank,
            rank_separation: args.ranksep,
            simplify: !args.no_simplify,
            quiet: args.quiet,
        },
        namespaces: args.namespaces,
        output: args.output.clone(),
    };

    match run_main(&opts) {
        Ok(output) => {
            if let Some(ref path) = args.output {
                std::fs::write(path, &output)?;
                tracing::info!(path, "output written");
            } else {
                print!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "generation failed");
            Err(e)
        }
    }
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
