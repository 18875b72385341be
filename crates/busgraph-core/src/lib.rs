pub mod edge;
pub mod filter;
pub mod mode;
pub mod naming;
pub mod quiet;
pub mod snapshot;

pub use busgraph_error::{Error, ErrorKind, Result};
pub use edge::Edge;
pub use filter::NameFilter;
pub use mode::GraphMode;
pub use naming::{display_name, namespace_of, node_cluster_namespace, topic_cluster_namespace};
pub use quiet::QuietConfig;
pub use snapshot::{FaultKind, GraphSnapshot};
