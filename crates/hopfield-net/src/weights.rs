//! Symmetric zero-diagonal weight matrix.
//!
//! Only the strict upper triangle is stored, packed row by row:
//!
//! ```text
//!        j=0  j=1  j=2  j=3
//! i=0     -    0    1    2
//! i=1          -    3    4
//! i=2               -    5
//! ```
//!
//! Each unordered pair `{i, j}` owns exactly one cell, so `(i, j)` and
//! `(j, i)` can never disagree, and the diagonal has no storage at all.

use crate::error::{check_index, HopfieldError};
use crate::numeric::Weight;

/// Packed symmetric weight matrix for `n` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricWeights<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Weight> SymmetricWeights<T> {
    /// All-zero matrix for `n` nodes.
    ///
    /// # Panics
    ///
    /// Panics if the `n(n-1)/2` cells cannot be allocated. Use
    /// [`try_new`](Self::try_new) for a fallible variant.
    pub fn new(n: usize) -> Self {
        match Self::try_new(n) {
            Ok(weights) => weights,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::TooLarge`] if the cell count overflows
    /// `usize` or the allocator refuses the request.
    pub fn try_new(n: usize) -> Result<Self, HopfieldError> {
        let too_large = || HopfieldError::TooLarge { num_nodes: n };
        let count = n.checked_mul(n.saturating_sub(1)).ok_or_else(too_large)? / 2;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large())?;
        cells.resize(count, T::zero());
        Ok(Self { n, cells })
    }

    /// Matrix dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Weight between `i` and `j`. The diagonal is always zero.
    pub fn get(&self, i: usize, j: usize) -> Result<T, HopfieldError> {
        check_index(i, self.n)?;
        check_index(j, self.n)?;
        if i == j {
            return Ok(T::zero());
        }
        Ok(self.cells[self.cell(i, j)])
    }

    /// Set the weight shared by `(i, j)` and `(j, i)`.
    ///
    /// # Errors
    ///
    /// [`HopfieldError::IndexOutOfRange`] if either index is out of range,
    /// [`HopfieldError::SelfConnection`] if `i == j`.
    pub fn set(&mut self, i: usize, j: usize, weight: T) -> Result<(), HopfieldError> {
        check_index(i, self.n)?;
        check_index(j, self.n)?;
        if i == j {
            return Err(HopfieldError::SelfConnection(i));
        }
        let cell = self.cell(i, j);
        self.cells[cell] = weight;
        Ok(())
    }

    /// Iterate `(i, j, w)` with `i < j` over every non-zero weight.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n)
            .flat_map(move |i| (i + 1..self.n).map(move |j| (i, j)))
            .zip(self.cells.iter().copied())
            .filter(|(_, w)| !w.is_zero())
            .map(|((i, j), w)| (i, j, w))
    }

    /// Weights of row `i` paired with their column, skipping the diagonal.
    ///
    /// Caller guarantees `i < n`.
    pub(crate) fn row(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        (0..self.n)
            .filter(move |&j| j != i)
            .map(move |j| (j, self.cells[self.cell(i, j)]))
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> usize {
        debug_assert!(i != j && i < self.n && j < self.n);
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        lo * self.n - lo * (lo + 1) / 2 + (hi - lo - 1)
    }
}
