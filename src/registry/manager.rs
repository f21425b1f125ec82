//! Graph registry: owns every live graph and arbitrates access
//!
//! One reader/writer lock guards the whole handle table. Queries hold the
//! shared side for the full duration of the algorithm, so a matrix can never
//! be freed underneath a running query. Mutations (create, edge writes,
//! destroy, clear) hold the exclusive side and therefore serialize against
//! every other registry call, including queries on unrelated graphs.

use super::config::RegistryConfig;
use densegraph_algorithms::{
    self as algo, AdjMatrix, Degree, DegreeStats, Edge, ErrorKind, GraphError, GraphResult,
    NodeIndex,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Opaque graph handle. Allocated in increasing order from 1, never reused.
pub type GraphId = u64;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No live graph has this handle
    #[error("Graph not found: {0}")]
    GraphNotFound(GraphId),

    /// Requested size is above the configured limit
    #[error("Graph size {requested} exceeds configured limit {limit}")]
    SizeLimitExceeded { requested: u32, limit: u32 },

    /// Matrix or algorithm failure
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::GraphNotFound(_) => ErrorKind::OutOfRange,
            RegistryError::SizeLimitExceeded { .. } => ErrorKind::ResourceExhaustion,
            RegistryError::Graph(e) => e.kind(),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Handle table plus the next handle to hand out
struct Graphs {
    entries: HashMap<GraphId, AdjMatrix>,
    next_id: GraphId,
}

/// Registry of live graphs, shared by reference across worker threads
pub struct GraphRegistry {
    config: RegistryConfig,
    graphs: RwLock<Graphs>,
}

impl GraphRegistry {
    /// Create an empty registry
    pub fn new(config: RegistryConfig) -> Self {
        info!(
            "Graph registry initialized (max graph size: {:?})",
            config.max_graph_size
        );
        let graphs = Graphs {
            entries: HashMap::with_capacity(config.initial_capacity),
            next_id: 1,
        };
        Self {
            config,
            graphs: RwLock::new(graphs),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Allocate a new `size x size` graph with no edges and return its handle.
    ///
    /// A failed allocation does not consume a handle.
    pub fn create(&self, size: u32) -> RegistryResult<GraphId> {
        if let Some(limit) = self.config.max_graph_size {
            if size > limit {
                warn!("Rejected graph of size {} (limit {})", size, limit);
                return Err(RegistryError::SizeLimitExceeded { requested: size, limit });
            }
        }

        let mut graphs = self.graphs.write();
        let matrix = AdjMatrix::new(size)?;
        let id = graphs.next_id;
        graphs.next_id += 1;
        graphs.entries.insert(id, matrix);

        info!("Created graph {} with {} nodes", id, size);
        Ok(id)
    }

    /// Check whether a handle names a live graph
    pub fn exists(&self, id: GraphId) -> bool {
        debug!("Existence check for graph {}", id);
        self.graphs.read().entries.contains_key(&id)
    }

    /// Node count of a live graph
    pub fn graph_size(&self, id: GraphId) -> RegistryResult<u32> {
        self.with_graph(id, |mat| Ok(mat.size()))
    }

    /// Write one edge; `bi` stores it in both directions
    pub fn set(&self, id: GraphId, edge: Edge, bi: bool) -> RegistryResult<()> {
        self.with_graph_mut(id, |mat| write_edge(mat, edge, bi))?;
        debug!("Set edge {} -> {} (w={}, bi={}) on graph {}", edge.u, edge.v, edge.weight, bi, id);
        Ok(())
    }

    /// Write many edges in the given order under one exclusive hold.
    ///
    /// Every edge is validated before any is written, so a rejected batch
    /// leaves the graph untouched.
    #[doc(alias = "bash_set")]
    pub fn batch_set(&self, id: GraphId, edges: &[Edge], bi: bool) -> RegistryResult<()> {
        self.with_graph_mut(id, |mat| {
            for edge in edges {
                mat.check_writable(edge.u, edge.v)?;
            }
            edges.iter().try_for_each(|&edge| write_edge(mat, edge, bi))
        })?;
        debug!("Applied {} edges (bi={}) to graph {}", edges.len(), bi, id);
        Ok(())
    }

    pub fn get_degree(&self, id: GraphId, node: NodeIndex, directed: bool) -> RegistryResult<Degree> {
        debug!("Degree of node {} on graph {} (directed={})", node, id, directed);
        self.with_graph(id, |mat| algo::get_degree(mat, node, directed))
    }

    pub fn degree_stats(&self, id: GraphId, directed: bool) -> RegistryResult<DegreeStats> {
        debug!("Degree stats on graph {} (directed={})", id, directed);
        self.with_graph(id, |mat| Ok(algo::degree_stats(mat, directed)))
    }

    pub fn isolated_nodes(&self, id: GraphId, directed: bool) -> RegistryResult<Vec<NodeIndex>> {
        debug!("Isolated nodes on graph {} (directed={})", id, directed);
        self.with_graph(id, |mat| Ok(algo::isolated_nodes(mat, directed)))
    }

    pub fn count_triangles(&self, id: GraphId, directed: bool) -> RegistryResult<u64> {
        debug!("Triangle count on graph {} (directed={})", id, directed);
        self.with_graph(id, |mat| Ok(algo::count_triangles(mat, directed)))
    }

    /// Distance from `start` to every node; unreachable nodes hold `i32::MAX`
    pub fn shortest_path(&self, id: GraphId, start: NodeIndex, weighted: bool) -> RegistryResult<Vec<i32>> {
        debug!("Shortest paths from {} on graph {} (weighted={})", start, id, weighted);
        self.with_graph(id, |mat| algo::shortest_path(mat, start, weighted))
    }

    /// Brandes betweenness of every node. Holds the shared lock for the whole
    /// O(n^3) computation.
    pub fn betweenness_centrality(&self, id: GraphId, weighted: bool) -> RegistryResult<Vec<f64>> {
        debug!("Betweenness centrality on graph {} (weighted={})", id, weighted);
        self.with_graph(id, |mat| Ok(algo::betweenness_centrality(mat, weighted)))
    }

    pub fn get_from(&self, id: GraphId, node: NodeIndex) -> RegistryResult<Vec<NodeIndex>> {
        debug!("Outgoing neighbours of {} on graph {}", node, id);
        self.with_graph(id, |mat| algo::get_from(mat, node))
    }

    pub fn get_to(&self, id: GraphId, node: NodeIndex) -> RegistryResult<Vec<NodeIndex>> {
        debug!("Incoming neighbours of {} on graph {}", node, id);
        self.with_graph(id, |mat| algo::get_to(mat, node))
    }

    pub fn get_neighbours(&self, id: GraphId, node: NodeIndex, bi: bool) -> RegistryResult<Vec<NodeIndex>> {
        debug!("Neighbours of {} on graph {} (bi={})", node, id, bi);
        self.with_graph(id, |mat| algo::get_neighbours(mat, node, bi))
    }

    /// Drop a graph. Returns whether anything was removed.
    pub fn destroy(&self, id: GraphId) -> bool {
        let removed = self.graphs.write().entries.remove(&id).is_some();
        if removed {
            info!("Destroyed graph {}", id);
        } else {
            debug!("Destroy of unknown graph {}", id);
        }
        removed
    }

    /// Snapshot of live handles, in no particular order
    pub fn list_ids(&self) -> Vec<GraphId> {
        debug!("Listing graph handles");
        self.graphs.read().entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.graphs.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every graph. Handles already issued stay retired.
    pub fn clear_all(&self) {
        let mut graphs = self.graphs.write();
        let count = graphs.entries.len();
        graphs.entries.clear();
        info!("Cleared {} graphs from registry", count);
    }

    fn with_graph<T>(
        &self,
        id: GraphId,
        f: impl FnOnce(&AdjMatrix) -> GraphResult<T>,
    ) -> RegistryResult<T> {
        let graphs = self.graphs.read();
        let mat = graphs.entries.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(mat)?)
    }

    fn with_graph_mut<T>(
        &self,
        id: GraphId,
        f: impl FnOnce(&mut AdjMatrix) -> GraphResult<T>,
    ) -> RegistryResult<T> {
        let mut graphs = self.graphs.write();
        let mat = graphs.entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(mat)?)
    }
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

fn write_edge(mat: &mut AdjMatrix, edge: Edge, bi: bool) -> GraphResult<()> {
    if bi {
        mat.bi_set(edge.u, edge.v, edge.weight)
    } else {
        mat.set(edge.u, edge.v, edge.weight)
    }
}

fn not_found(id: GraphId) -> RegistryError {
    warn!("Graph {} not found", id);
    RegistryError::GraphNotFound(id)
}
