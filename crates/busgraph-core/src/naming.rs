//! Node and topic naming conventions.
//!
//! The graph source keeps topic names distinct from process names by
//! prefixing topics with a single space. Everything downstream of the
//! snapshot works with display names, so the marker must be stripped at
//! intake and never reappear in emitted output.

/// Marker prepended to topic names by the graph source.
pub const TOPIC_MARKER: char = ' ';

/// Strip the internal topic marker, if present.
pub fn display_name(name: &str) -> &str {
    name.strip_prefix(TOPIC_MARKER).unwrap_or(name)
}

/// The namespace prefix of a name: everything up to and including the last
/// separator. A name without a separator lives in the root namespace `/`.
pub fn namespace_of(name: &str) -> &str {
    match name.rfind('/') {
        Some(idx) => &name[..=idx],
        None => "/",
    }
}

/// The first path segment of a name, e.g. `sensors` for `/sensors/imu`.
fn first_segment(name: &str) -> Option<&str> {
    match name.split('/').nth(1) {
        Some("") | None => None,
        Some(segment) => Some(segment),
    }
}

/// Cluster namespace for a topic name.
///
/// A topic joins a namespace cluster only when its name has a non-trivial
/// second path segment, i.e. at least two separators: `/sensors/imu`
/// clusters under `sensors`, the top-level `/imu` does not cluster.
pub fn topic_cluster_namespace(name: &str) -> Option<&str> {
    if name.matches('/').count() > 1 {
        first_segment(name)
    } else {
        None
    }
}

/// Cluster namespace candidate for a process name.
///
/// Processes are grouped more eagerly than topics: a single separator is
/// enough, so `/imu_driver` yields `imu_driver`. The caller only uses the
/// candidate when a topic cluster of the same name already exists.
pub fn node_cluster_namespace(name: &str) -> Option<&str> {
    if name.contains('/') {
        first_segment(name)
    } else {
        None
    }
}
