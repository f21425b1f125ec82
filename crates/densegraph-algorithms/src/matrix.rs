//! Dense adjacency matrix storage
//!
//! One graph is one `n x n` buffer of 16-bit weights, row-major. Cell `(i, j)`
//! holds the weight of the edge `i -> j`, or [`NO_EDGE`] when there is none.
//! The size is fixed at construction; there is no resize and no removal.

use std::alloc::{self, Layout};
use std::ptr;

use crate::column::Column;
use crate::common::{NodeIndex, Weight, NO_EDGE};
use crate::error::{GraphError, GraphResult};

// `AdjMatrix::new` relies on a zeroed buffer reading as empty.
const _: () = assert!(NO_EDGE == 0);

/// Fixed-size dense adjacency matrix.
///
/// The diagonal is never writable, so `(i, i)` always reads as [`NO_EDGE`].
/// Symmetry is not enforced: callers pick per write whether an edge is
/// stored one-way ([`set`](Self::set)) or both ways ([`bi_set`](Self::bi_set)).
///
/// Not `Clone`: a matrix has exactly one owning registry entry.
#[derive(Debug)]
pub struct AdjMatrix {
    /// Number of nodes
    n: NodeIndex,
    /// Row-major weights, length `n * n`
    data: Box<[Weight]>,
}

impl AdjMatrix {
    /// Allocate an `n x n` matrix with every cell set to [`NO_EDGE`].
    ///
    /// No upper bound is placed on `n`; an allocation that cannot be satisfied
    /// is reported as [`GraphError::AllocationFailed`] instead of aborting.
    /// The buffer comes from a zeroed allocation, so pages are not touched
    /// until an edge is written to them.
    pub fn new(n: NodeIndex) -> GraphResult<Self> {
        let failed = || GraphError::AllocationFailed { size: n };
        let len = (n as usize).checked_mul(n as usize).ok_or_else(failed)?;
        let layout = Layout::array::<Weight>(len).map_err(|_| failed())?;

        if layout.size() == 0 {
            return Ok(Self { n, data: Box::default() });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) }.cast::<Weight>();
        if raw.is_null() {
            return Err(failed());
        }

        // SAFETY: `raw` came from the global allocator with the layout of
        // `[Weight; len]`, and all-zero bytes are `len` valid `NO_EDGE` cells.
        let data = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(raw, len)) };
        Ok(Self { n, data })
    }

    /// Number of nodes
    #[inline]
    pub fn size(&self) -> NodeIndex {
        self.n
    }

    /// Write `w` at `(i, j)` only.
    ///
    /// Writing [`NO_EDGE`] is accepted and clears the cell, so a later read
    /// sees no edge there.
    pub fn set(&mut self, i: NodeIndex, j: NodeIndex, w: Weight) -> GraphResult<()> {
        self.check_writable(i, j)?;
        let idx = self.offset(i, j);
        self.data[idx] = w;
        Ok(())
    }

    /// Write `w` at both `(i, j)` and `(j, i)`.
    ///
    /// Both indices are validated before either cell is touched. As with
    /// [`set`](Self::set), a weight of [`NO_EDGE`] clears both cells.
    pub fn bi_set(&mut self, i: NodeIndex, j: NodeIndex, w: Weight) -> GraphResult<()> {
        self.check_writable(i, j)?;
        let forward = self.offset(i, j);
        let backward = self.offset(j, i);
        self.data[forward] = w;
        self.data[backward] = w;
        Ok(())
    }

    /// Read the weight at `(i, j)`; diagonal cells read as [`NO_EDGE`].
    pub fn get(&self, i: NodeIndex, j: NodeIndex) -> GraphResult<Weight> {
        self.check_bounds(i)?;
        self.check_bounds(j)?;
        Ok(self.data[self.offset(i, j)])
    }

    /// Total count of stored (directed) edge cells
    pub fn edge_count_directed(&self) -> usize {
        self.data.iter().filter(|&&w| w != NO_EDGE).count()
    }

    /// Borrow row `i`: the outgoing weights of node `i`.
    ///
    /// Index must already be validated.
    #[inline]
    pub(crate) fn row(&self, i: NodeIndex) -> &[Weight] {
        let start = self.offset(i, 0);
        &self.data[start..start + self.n as usize]
    }

    /// Unchecked read for algorithm inner loops; indices must be valid.
    #[inline]
    pub(crate) fn at(&self, i: NodeIndex, j: NodeIndex) -> Weight {
        self.data[self.offset(i, j)]
    }

    /// Lazy view of column `col` (incoming weights), with row `exclude`
    /// reading as [`NO_EDGE`].
    #[inline]
    pub(crate) fn column(&self, col: NodeIndex, exclude: NodeIndex) -> Column<'_> {
        Column::new(&self.data, self.n as usize, col as usize, exclude as usize)
    }

    #[inline]
    pub(crate) fn check_bounds(&self, i: NodeIndex) -> GraphResult<()> {
        if i >= self.n {
            return Err(GraphError::OutOfRange { index: i, size: self.n });
        }
        Ok(())
    }

    /// Check that `(i, j)` could be written: both in range and off-diagonal
    pub fn check_writable(&self, i: NodeIndex, j: NodeIndex) -> GraphResult<()> {
        self.check_bounds(i)?;
        self.check_bounds(j)?;
        if i == j {
            return Err(GraphError::DiagonalWrite(i));
        }
        Ok(())
    }

    /// Row/column to buffer offset
    #[inline]
    fn offset(&self, i: NodeIndex, j: NodeIndex) -> usize {
        i as usize * self.n as usize + j as usize
    }
}
