//! Single-source shortest paths: BFS (unweighted) and Dijkstra (weighted)

use crate::common::{NodeIndex, NO_EDGE};
use crate::error::GraphResult;
use crate::matrix::AdjMatrix;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Distance value for nodes that cannot be reached from the source
pub const UNREACHABLE: i32 = i32::MAX;

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) cost: i32,
    pub(crate) node: NodeIndex,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from `start` to every node.
///
/// `distances[start]` is 0 and unreachable nodes hold [`UNREACHABLE`]. When
/// `weighted` is false every edge costs one hop (BFS); otherwise the stored
/// weight is the edge cost (Dijkstra).
pub fn shortest_path(mat: &AdjMatrix, start: NodeIndex, weighted: bool) -> GraphResult<Vec<i32>> {
    mat.check_bounds(start)?;

    if weighted {
        Ok(dijkstra(mat, start))
    } else {
        Ok(bfs(mat, start))
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
fn bfs(mat: &AdjMatrix, start: NodeIndex) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; mat.size() as usize];
    dist[start as usize] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        let next = dist[u as usize].saturating_add(1);
        for (v, &w) in mat.row(u).iter().enumerate() {
            if w != NO_EDGE && dist[v] == UNREACHABLE {
                dist[v] = next;
                queue.push_back(v as NodeIndex);
            }
        }
    }

    dist
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Stale heap entries, whose cost exceeds the settled distance, are skipped.
fn dijkstra(mat: &AdjMatrix, start: NodeIndex) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; mat.size() as usize];
    dist[start as usize] = 0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0, node: start });

    while let Some(State { cost, node: u }) = heap.pop() {
        if cost > dist[u as usize] {
            continue;
        }

        for (v, &w) in mat.row(u).iter().enumerate() {
            if w == NO_EDGE {
                continue;
            }
            let alt = cost.saturating_add(w as i32);
            if alt < dist[v] {
                dist[v] = alt;
                heap.push(State { cost: alt, node: v as NodeIndex });
            }
        }
    }

    dist
}

/// Pairs of `(node, distance)` for every node reached in `distances`
pub fn reachable(distances: &[i32]) -> impl Iterator<Item = (NodeIndex, i32)> + '_ {
    distances
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d != UNREACHABLE)
        .map(|(i, &d)| (i as NodeIndex, d))
}
