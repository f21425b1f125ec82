//! Degree queries: per-node degree, degree statistics, isolated nodes

use crate::common::{NodeIndex, Weight, NO_EDGE};
use crate::error::GraphResult;
use crate::matrix::AdjMatrix;

/// Out/in degree of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degree {
    pub out: u32,
    pub r#in: u32,
}

/// Degree distribution summary for a whole graph
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeStats {
    /// Mean out-degree
    pub avg: f64,
    /// Smallest out-degree
    pub min: u32,
    /// Largest out-degree
    pub max: u32,
    /// Present edges over possible edges
    pub edge_density: f64,
}

#[inline]
fn count_edges(weights: impl IntoIterator<Item = Weight>) -> u32 {
    weights.into_iter().filter(|&w| w != NO_EDGE).count() as u32
}

/// Degree of `node`.
///
/// Out-degree counts the node's row. For an undirected graph the in-degree is
/// taken to equal the out-degree; for a directed graph the column is scanned
/// with the self entry excluded.
pub fn get_degree(mat: &AdjMatrix, node: NodeIndex, directed: bool) -> GraphResult<Degree> {
    mat.check_bounds(node)?;

    let out = count_edges(mat.row(node).iter().copied());
    let r#in = if directed {
        count_edges(mat.column(node, node))
    } else {
        out
    };

    Ok(Degree { out, r#in })
}

/// Average, minimum and maximum out-degree, plus edge density.
///
/// Undirected graphs count every edge from both endpoints, so the edge count
/// is half the out-degree sum. An empty graph reports all zeros, and a graph
/// with no possible edges (`n < 2`) reports a density of zero.
pub fn degree_stats(mat: &AdjMatrix, directed: bool) -> DegreeStats {
    let n = mat.size();
    if n == 0 {
        return DegreeStats { avg: 0.0, min: 0, max: 0, edge_density: 0.0 };
    }

    let mut total: u64 = 0;
    let mut min = u32::MAX;
    let mut max = 0;
    for i in 0..n {
        let deg = count_edges(mat.row(i).iter().copied());
        total += deg as u64;
        min = min.min(deg);
        max = max.max(deg);
    }

    let n64 = n as u64;
    let (edge_count, possible) = if directed {
        (total, n64 * (n64 - 1))
    } else {
        (total / 2, n64 * (n64 - 1) / 2)
    };
    let edge_density = if possible == 0 {
        0.0
    } else {
        edge_count as f64 / possible as f64
    };

    DegreeStats {
        avg: total as f64 / n as f64,
        min,
        max,
        edge_density,
    }
}

/// Nodes with no outgoing edges; when `directed`, also no incoming edges.
pub fn isolated_nodes(mat: &AdjMatrix, directed: bool) -> Vec<NodeIndex> {
    let candidates = (0..mat.size())
        .filter(|&i| mat.row(i).iter().all(|&w| w == NO_EDGE));

    if !directed {
        return candidates.collect();
    }

    candidates
        .filter(|&i| mat.column(i, i).into_iter().all(|w| w == NO_EDGE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn path4() -> AdjMatrix {
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.bi_set(0, 1, 1).unwrap();
        mat.bi_set(1, 2, 1).unwrap();
        mat.bi_set(2, 3, 1).unwrap();
        mat
    }

    #[test]
    fn test_undirected_degree_mirrors_out() {
        let mut mat = AdjMatrix::new(3).unwrap();
        mat.set(0, 1, 1).unwrap();
        mat.set(2, 1, 1).unwrap();

        let deg = get_degree(&mat, 1, false).unwrap();
        assert_eq!(deg, Degree { out: 0, r#in: 0 });
        let deg = get_degree(&mat, 0, false).unwrap();
        assert_eq!(deg, Degree { out: 1, r#in: 1 });
    }

    #[test]
    fn test_directed_degree_scans_column() {
        let mut mat = AdjMatrix::new(3).unwrap();
        mat.set(0, 1, 1).unwrap();
        mat.set(2, 1, 1).unwrap();
        mat.set(1, 0, 1).unwrap();

        assert_eq!(get_degree(&mat, 1, true).unwrap(), Degree { out: 1, r#in: 2 });
        assert_eq!(get_degree(&mat, 2, true).unwrap(), Degree { out: 1, r#in: 0 });
    }

    #[test]
    fn test_degree_out_of_range() {
        let mat = AdjMatrix::new(2).unwrap();
        assert_eq!(
            get_degree(&mat, 2, true).unwrap_err(),
            GraphError::OutOfRange { index: 2, size: 2 }
        );
    }

    #[test]
    fn test_path_stats() {
        let stats = degree_stats(&path4(), false);
        assert_eq!(
            stats,
            DegreeStats { avg: 1.5, min: 1, max: 2, edge_density: 0.5 }
        );
    }

    #[test]
    fn test_directed_stats() {
        let mut mat = AdjMatrix::new(3).unwrap();
        mat.set(0, 1, 1).unwrap();
        mat.set(0, 2, 1).unwrap();
        mat.set(1, 2, 1).unwrap();

        let stats = degree_stats(&mat, true);
        assert_eq!(stats.avg, 1.0);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 2);
        assert_eq!(stats.edge_density, 0.5);
    }

    #[test]
    fn test_stats_degenerate_sizes() {
        let empty = AdjMatrix::new(0).unwrap();
        assert_eq!(
            degree_stats(&empty, false),
            DegreeStats { avg: 0.0, min: 0, max: 0, edge_density: 0.0 }
        );

        let single = AdjMatrix::new(1).unwrap();
        let stats = degree_stats(&single, true);
        assert_eq!(stats.edge_density, 0.0);
        assert_eq!(stats.min, 0);
    }

    #[test]
    fn test_isolated_undirected_ignores_incoming() {
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.set(0, 1, 1).unwrap();

        // 1 only receives, 2 and 3 have nothing at all
        assert_eq!(isolated_nodes(&mat, false), vec![1, 2, 3]);
    }

    #[test]
    fn test_isolated_directed_requires_no_incoming() {
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.set(0, 1, 1).unwrap();

        assert_eq!(isolated_nodes(&mat, true), vec![2, 3]);
    }

    #[test]
    fn test_isolated_none_on_connected_path() {
        assert!(isolated_nodes(&path4(), true).is_empty());
        assert!(isolated_nodes(&path4(), false).is_empty());
    }
}
