//! One-hop neighbor queries

use crate::common::{NodeIndex, NO_EDGE};
use crate::error::GraphResult;
use crate::matrix::AdjMatrix;

/// Nodes reachable from `node` by one outgoing edge.
pub fn get_from(mat: &AdjMatrix, node: NodeIndex) -> GraphResult<Vec<NodeIndex>> {
    mat.check_bounds(node)?;

    Ok(mat
        .row(node)
        .iter()
        .enumerate()
        .filter(|&(j, &w)| j as NodeIndex != node && w != NO_EDGE)
        .map(|(j, _)| j as NodeIndex)
        .collect())
}

/// Nodes with an outgoing edge into `node`.
pub fn get_to(mat: &AdjMatrix, node: NodeIndex) -> GraphResult<Vec<NodeIndex>> {
    mat.check_bounds(node)?;

    Ok(mat
        .column(node, node)
        .into_iter()
        .enumerate()
        .filter(|&(_, w)| w != NO_EDGE)
        .map(|(i, _)| i as NodeIndex)
        .collect())
}

/// Neighbors of `node`.
///
/// With `bi` set only outgoing edges count, giving the same set as
/// [`get_from`]. Without it a node qualifies when an edge exists in either
/// direction. Note that `bi` does not select mutual neighbors.
pub fn get_neighbours(mat: &AdjMatrix, node: NodeIndex, bi: bool) -> GraphResult<Vec<NodeIndex>> {
    if bi {
        return get_from(mat, node);
    }
    mat.check_bounds(node)?;

    Ok(mat
        .row(node)
        .iter()
        .zip(mat.column(node, node))
        .enumerate()
        .filter(|&(i, (&out, inbound))| {
            i as NodeIndex != node && (out != NO_EDGE || inbound != NO_EDGE)
        })
        .map(|(i, _)| i as NodeIndex)
        .collect())
}
