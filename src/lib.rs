//! Densegraph
//!
//! An in-memory graph analytics engine. Graphs are stored as dense adjacency
//! matrices of 16-bit weights and addressed by numeric handles through a
//! concurrent [`GraphRegistry`].
//!
//! # Architecture
//!
//! - `densegraph-algorithms`: matrix storage, column access and the
//!   algorithm suite (degree, statistics, isolation, triangles, shortest
//!   paths, betweenness centrality, neighbor queries)
//! - [`registry`]: handle table behind a single reader/writer lock
//!
//! ## Example Usage
//!
//! ```rust
//! use densegraph::{Edge, GraphRegistry};
//!
//! let registry = GraphRegistry::default();
//! let id = registry.create(4).unwrap();
//!
//! let edges = [Edge::unit(0, 1), Edge::unit(1, 2), Edge::unit(2, 3)];
//! registry.batch_set(id, &edges, true).unwrap();
//!
//! assert_eq!(registry.shortest_path(id, 0, false).unwrap(), vec![0, 1, 2, 3]);
//! assert_eq!(registry.count_triangles(id, false).unwrap(), 0);
//! ```

#![warn(clippy::all)]

pub mod registry;

// Re-export main types for convenience
pub use registry::{
    ConfigError, GraphId, GraphRegistry, RegistryConfig, RegistryError, RegistryResult,
};

pub use densegraph_algorithms::{
    AdjMatrix, Degree, DegreeStats, Edge, ErrorKind, GraphError, NodeIndex, Weight, NO_EDGE,
    UNREACHABLE,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
