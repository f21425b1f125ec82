pub mod common;
pub mod error;
pub mod matrix;
pub mod column;
pub mod degree;
pub mod topology;
pub mod pathfinding;
pub mod centrality;
pub mod neighborhood;

pub use common::{Edge, NodeIndex, Weight, NO_EDGE};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use matrix::AdjMatrix;
pub use column::{Column, ColumnIter};
pub use degree::{get_degree, degree_stats, isolated_nodes, Degree, DegreeStats};
pub use topology::count_triangles;
pub use pathfinding::{shortest_path, reachable, UNREACHABLE};
pub use centrality::betweenness_centrality;
pub use neighborhood::{get_from, get_to, get_neighbours};
