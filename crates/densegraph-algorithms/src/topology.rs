//! Graph topology analysis: triangle counting

use crate::common::{NodeIndex, NO_EDGE};
use crate::matrix::AdjMatrix;

/// Triangle Counting
///
/// Undirected: every pair `i < j` joined by an edge contributes the nodes
/// `k > j` adjacent to both, so each triangle is counted once.
///
/// Directed: counts 3-cycles `i -> j -> k -> i`. Each edge `i -> j` looks for
/// `k` with `k -> i` (column `i`) and `j -> k` (row `j`). A cycle is found once
/// from each of its three edges, hence the final division by three.
pub fn count_triangles(mat: &AdjMatrix, directed: bool) -> u64 {
    if directed {
        count_directed_cycles(mat)
    } else {
        count_undirected(mat)
    }
}

fn count_undirected(mat: &AdjMatrix) -> u64 {
    let n = mat.size();
    let mut count = 0u64;

    for i in 0..n {
        let row_i = mat.row(i);
        for j in (i + 1)..n {
            if row_i[j as usize] == NO_EDGE {
                continue;
            }
            let row_j = mat.row(j);
            let start = j as usize + 1;
            count += row_i[start..]
                .iter()
                .zip(&row_j[start..])
                .filter(|&(&ik, &jk)| ik != NO_EDGE && jk != NO_EDGE)
                .count() as u64;
        }
    }

    count
}

fn count_directed_cycles(mat: &AdjMatrix) -> u64 {
    let n = mat.size();
    let mut count = 0u64;

    for i in 0..n {
        for j in 0..n {
            if i == j || mat.at(i, j) == NO_EDGE {
                continue;
            }
            let row_j = mat.row(j);
            count += mat
                .column(i, i)
                .into_iter()
                .zip(row_j)
                .enumerate()
                .filter(|&(k, (ki, &jk))| {
                    let k = k as NodeIndex;
                    k != i && k != j && ki != NO_EDGE && jk != NO_EDGE
                })
                .count() as u64;
        }
    }

    count / 3
}
