//! Column-wise access to a row-major matrix buffer
//!
//! Reading inbound edges means walking a column with a stride of `n`. The
//! view yields exactly `n` weights, top to bottom, and substitutes
//! [`NO_EDGE`] for one excluded row so callers can skip the self entry
//! without a branch in their own loop. Nothing is copied or transposed.

use crate::common::{Weight, NO_EDGE};
use std::iter::FusedIterator;

/// Restartable view of one column. Every call to [`iter`](Self::iter) starts
/// again from row 0.
///
/// Performs no bounds validation: `col` and `exclude` must already be known
/// to be valid for the buffer.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    data: &'a [Weight],
    stride: usize,
    col: usize,
    exclude: usize,
}

impl<'a> Column<'a> {
    pub fn new(data: &'a [Weight], stride: usize, col: usize, exclude: usize) -> Self {
        Self { data, stride, col, exclude }
    }

    pub fn iter(&self) -> ColumnIter<'a> {
        ColumnIter { column: *self, row: 0 }
    }
}

impl<'a> IntoIterator for Column<'a> {
    type Item = Weight;
    type IntoIter = ColumnIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Column`]
#[derive(Debug, Clone)]
pub struct ColumnIter<'a> {
    column: Column<'a>,
    row: usize,
}

impl Iterator for ColumnIter<'_> {
    type Item = Weight;

    #[inline]
    fn next(&mut self) -> Option<Weight> {
        let c = &self.column;
        if self.row >= c.stride {
            return None;
        }
        let row = self.row;
        self.row += 1;
        if row == c.exclude {
            return Some(NO_EDGE);
        }
        Some(c.data[row * c.stride + c.col])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.column.stride.saturating_sub(self.row);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColumnIter<'_> {}

impl FusedIterator for ColumnIter<'_> {}
