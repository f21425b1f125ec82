//! Betweenness centrality (Brandes)

use crate::common::{NodeIndex, NO_EDGE};
use crate::matrix::AdjMatrix;
use crate::pathfinding::{State, UNREACHABLE};
use std::collections::{BinaryHeap, VecDeque};

/// Per-source scratch space, reused across sources.
struct Brandes {
    dist: Vec<i32>,
    /// Number of shortest paths from the source
    sigma: Vec<f64>,
    delta: Vec<f64>,
    preds: Vec<Vec<NodeIndex>>,
    /// Nodes in order of settlement; popped in non-increasing distance
    stack: Vec<NodeIndex>,
}

impl Brandes {
    fn new(n: usize) -> Self {
        Self {
            dist: vec![UNREACHABLE; n],
            sigma: vec![0.0; n],
            delta: vec![0.0; n],
            preds: vec![Vec::new(); n],
            stack: Vec::with_capacity(n),
        }
    }

    fn reset(&mut self, source: NodeIndex) {
        self.dist.fill(UNREACHABLE);
        self.sigma.fill(0.0);
        self.delta.fill(0.0);
        self.preds.iter_mut().for_each(Vec::clear);
        self.stack.clear();

        self.dist[source as usize] = 0;
        self.sigma[source as usize] = 1.0;
    }

    fn traverse_unweighted(&mut self, mat: &AdjMatrix, source: NodeIndex) {
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            self.stack.push(v);
            let vi = v as usize;
            let next = self.dist[vi] + 1;

            for (w, &weight) in mat.row(v).iter().enumerate() {
                if weight == NO_EDGE {
                    continue;
                }
                if self.dist[w] == UNREACHABLE {
                    self.dist[w] = next;
                    queue.push_back(w as NodeIndex);
                }
                if self.dist[w] == next {
                    self.sigma[w] += self.sigma[vi];
                    self.preds[w].push(v);
                }
            }
        }
    }

    fn traverse_weighted(&mut self, mat: &AdjMatrix, source: NodeIndex) {
        let mut heap = BinaryHeap::new();
        heap.push(State { cost: 0, node: source });

        while let Some(State { cost, node: v }) = heap.pop() {
            let vi = v as usize;
            if cost > self.dist[vi] {
                continue;
            }
            self.stack.push(v);

            for (w, &weight) in mat.row(v).iter().enumerate() {
                if weight == NO_EDGE {
                    continue;
                }
                let alt = cost.saturating_add(weight as i32);
                if alt < self.dist[w] {
                    self.dist[w] = alt;
                    heap.push(State { cost: alt, node: w as NodeIndex });
                    self.sigma[w] = self.sigma[vi];
                    self.preds[w].clear();
                    self.preds[w].push(v);
                } else if alt == self.dist[w] {
                    self.sigma[w] += self.sigma[vi];
                    self.preds[w].push(v);
                }
            }
        }
    }

    /// Back-propagate dependencies and add them to `centrality`
    fn accumulate(&mut self, source: NodeIndex, centrality: &mut [f64]) {
        while let Some(w) = self.stack.pop() {
            let wi = w as usize;
            let coeff = (1.0 + self.delta[wi]) / self.sigma[wi];
            for &v in &self.preds[wi] {
                let vi = v as usize;
                self.delta[vi] += self.sigma[vi] * coeff;
            }
            if w != source {
                centrality[wi] += self.delta[wi];
            }
        }
    }
}

/// Betweenness centrality of every node.
///
/// Runs one shortest-path traversal per source (BFS layering when
/// `weighted` is false, Dijkstra relaxation otherwise), tracking path
/// counts and predecessors, then accumulates dependencies in decreasing
/// distance order. Every score is halved at the end.
///
/// The halving assumes each edge is stored in both directions. Traversal
/// follows `(v, w)` cells only, so on an asymmetric matrix the result is
/// half the directed betweenness, not a corrected value.
pub fn betweenness_centrality(mat: &AdjMatrix, weighted: bool) -> Vec<f64> {
    let n = mat.size();
    let mut centrality = vec![0.0; n as usize];
    let mut state = Brandes::new(n as usize);

    for s in 0..n {
        state.reset(s);
        if weighted {
            state.traverse_weighted(mat, s);
        } else {
            state.traverse_unweighted(mat, s);
        }
        state.accumulate(s, &mut centrality);
    }

    for value in &mut centrality {
        *value /= 2.0;
    }
    centrality
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_path_centrality() {
        // 0 - 1 - 2 - 3
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.bi_set(0, 1, 1).unwrap();
        mat.bi_set(1, 2, 1).unwrap();
        mat.bi_set(2, 3, 1).unwrap();

        let bc = betweenness_centrality(&mat, false);
        assert_close(&bc, &[0.0, 2.0, 2.0, 0.0]);
        assert_close(&betweenness_centrality(&mat, true), &bc);
    }

    #[test]
    fn test_star_centrality() {
        // Hub 0 with leaves 1..=4: C(4,2) leaf pairs all route through the hub
        let mut mat = AdjMatrix::new(5).unwrap();
        for leaf in 1..5 {
            mat.bi_set(0, leaf, 1).unwrap();
        }

        let bc = betweenness_centrality(&mat, false);
        assert_close(&bc, &[6.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_split_paths_share_credit() {
        // Square 0-1-3, 0-2-3: two shortest paths between 0 and 3
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.bi_set(0, 1, 1).unwrap();
        mat.bi_set(0, 2, 1).unwrap();
        mat.bi_set(1, 3, 1).unwrap();
        mat.bi_set(2, 3, 1).unwrap();

        let bc = betweenness_centrality(&mat, false);
        assert_close(&bc, &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_weights_reroute_paths() {
        // Triangle where 0-2 is expensive: the cheap route goes through 1
        let mut mat = AdjMatrix::new(3).unwrap();
        mat.bi_set(0, 1, 1).unwrap();
        mat.bi_set(1, 2, 1).unwrap();
        mat.bi_set(0, 2, 10).unwrap();

        assert_close(&betweenness_centrality(&mat, false), &[0.0, 0.0, 0.0]);
        assert_close(&betweenness_centrality(&mat, true), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_weighted_split_paths_share_credit() {
        // Same square with every edge costing 3: both 0-3 routes tie at 6
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.bi_set(0, 1, 3).unwrap();
        mat.bi_set(0, 2, 3).unwrap();
        mat.bi_set(1, 3, 3).unwrap();
        mat.bi_set(2, 3, 3).unwrap();

        assert_close(&betweenness_centrality(&mat, true), &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_weighted_tie_from_uneven_legs() {
        // 0-1-3 costs 2+2 and 0-2-3 costs 1+3: the routes still tie at 4.
        // 1-2 goes only through 0 (3 < 5); 2-3 takes the direct edge (3 < 5).
        let mut mat = AdjMatrix::new(4).unwrap();
        mat.bi_set(0, 1, 2).unwrap();
        mat.bi_set(1, 3, 2).unwrap();
        mat.bi_set(0, 2, 1).unwrap();
        mat.bi_set(2, 3, 3).unwrap();

        assert_close(&betweenness_centrality(&mat, true), &[1.0, 0.5, 0.5, 0.0]);
        assert_close(&betweenness_centrality(&mat, false), &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_directed_chain_is_halved() {
        // 0 -> 1 -> 2: node 1 lies on one directed path, reported as 0.5
        let mut mat = AdjMatrix::new(3).unwrap();
        mat.set(0, 1, 1).unwrap();
        mat.set(1, 2, 1).unwrap();

        assert_close(&betweenness_centrality(&mat, false), &[0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_empty_and_edgeless() {
        assert!(betweenness_centrality(&AdjMatrix::new(0).unwrap(), false).is_empty());
        let bc = betweenness_centrality(&AdjMatrix::new(3).unwrap(), true);
        assert_close(&bc, &[0.0, 0.0, 0.0]);
    }
}
