//! Graph registry
//!
//! Maps numeric handles to owned adjacency matrices and is the only entry
//! point external callers use. Constructed once at startup and shared by
//! reference; teardown is an explicit [`GraphRegistry::clear_all`].

pub mod config;
pub mod manager;

pub use config::{ConfigError, RegistryConfig, CLIENT_MAX_GRAPH_SIZE};
pub use manager::{GraphId, GraphRegistry, RegistryError, RegistryResult};
