// Copyright (c) 2026 The rs-assign developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Dense cost matrices with forbidden cells.
//!
//! A [`CostMatrix`] is a rectangular grid of costs in which single
//! cells may be marked *forbidden* (conceptually of infinite cost).
//! The module provides the shared preprocessing steps of the solvers:
//! row and column reduction, padding to a square shape and the
//! transformation of a maximization instance into a minimization
//! instance.

use crate::error::{Error, Result};
use crate::num::traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Fill policy for padding a rectangular matrix to a square one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Fill {
    /// Pad with zero cost cells (minimization padding).
    Zero,
    /// Pad with forbidden cells (maximization padding).
    Forbidden,
}

/// A dense, row-major cost matrix.
///
/// Each cell is either a finite cost or `None`, the *forbidden*
/// sentinel marking a disallowed pairing.
///
/// # Example
///
/// ```
/// use rs_assign::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![Some(4), None],
///     vec![Some(2), Some(1)],
/// ]).unwrap();
///
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 2);
/// assert_eq!(m.get(0, 1), None);
/// assert_eq!(m.row_min(1), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CostMatrix<F> {
    rows: usize,
    cols: usize,
    data: Vec<Option<F>>,
}

impl<F> CostMatrix<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// Create a matrix from nested rows of cells.
    ///
    /// Fails with [`Error::InvalidInput`] if the rows are empty or
    /// ragged.
    pub fn from_rows(rows: Vec<Vec<Option<F>>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidInput {
                msg: "cost matrix must not be empty".into(),
            });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::InvalidInput {
                    msg: format!("row {} has {} cells, expected {}", i, row.len(), ncols),
                });
            }
            data.extend(row);
        }
        Ok(CostMatrix {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Create a matrix from nested rows of finite costs.
    pub fn from_costs(rows: Vec<Vec<F>>) -> Result<Self> {
        Self::from_rows(rows.into_iter().map(|r| r.into_iter().map(Some).collect()).collect())
    }

    /// Create a matrix of the given shape filled with one cell value.
    pub fn filled(rows: usize, cols: usize, cell: Option<F>) -> Self {
        CostMatrix {
            rows,
            cols,
            data: vec![cell; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The cell at `(i, j)`, `None` if the pairing is forbidden.
    pub fn get(&self, i: usize, j: usize) -> Option<F> {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, cell: Option<F>) {
        self.data[i * self.cols + j] = cell;
    }

    /// The minimum finite value of row `i`, `None` if the row is
    /// fully forbidden.
    pub fn row_min(&self, i: usize) -> Option<F> {
        let mut min = None;
        for j in 0..self.cols {
            if let Some(v) = self.get(i, j) {
                min = Some(match min {
                    Some(m) if m < v => m,
                    _ => v,
                });
            }
        }
        min
    }

    /// The minimum finite value of column `j`, `None` if the column
    /// is fully forbidden.
    pub fn col_min(&self, j: usize) -> Option<F> {
        let mut min = None;
        for i in 0..self.rows {
            if let Some(v) = self.get(i, j) {
                min = Some(match min {
                    Some(m) if m < v => m,
                    _ => v,
                });
            }
        }
        min
    }

    /// The global maximum finite value, `None` if all cells are
    /// forbidden.
    pub fn max_finite(&self) -> Option<F> {
        let mut max = None;
        for &cell in &self.data {
            if let Some(v) = cell {
                max = Some(match max {
                    Some(m) if m > v => m,
                    _ => v,
                });
            }
        }
        max
    }

    /// The index of the first row without a finite cell, if any.
    pub fn fully_forbidden_row(&self) -> Option<usize> {
        (0..self.rows).find(|&i| self.row_min(i).is_none())
    }

    /// The index of the first column without a finite cell, if any.
    pub fn fully_forbidden_col(&self) -> Option<usize> {
        (0..self.cols).find(|&j| self.col_min(j).is_none())
    }

    /// Subtract each row's minimum finite value from every finite
    /// cell of that row.
    ///
    /// Rows without a finite cell are left untouched (such a row
    /// makes an assignment instance infeasible and is rejected by the
    /// solver's input validation).
    ///
    /// # Example
    ///
    /// ```
    /// use rs_assign::CostMatrix;
    ///
    /// let mut m = CostMatrix::from_costs(vec![vec![4, 1], vec![2, 5]]).unwrap();
    /// m.reduce_rows();
    /// assert_eq!(m.get(0, 0), Some(3));
    /// assert_eq!(m.get(0, 1), Some(0));
    /// assert_eq!(m.get(1, 0), Some(0));
    /// assert_eq!(m.get(1, 1), Some(3));
    /// ```
    pub fn reduce_rows(&mut self) {
        for i in 0..self.rows {
            if let Some(min) = self.row_min(i) {
                for j in 0..self.cols {
                    if let Some(v) = self.get(i, j) {
                        self.set(i, j, Some(v - min));
                    }
                }
            }
        }
    }

    /// Subtract each column's minimum finite value from every finite
    /// cell of that column. See [`CostMatrix::reduce_rows`].
    pub fn reduce_cols(&mut self) {
        for j in 0..self.cols {
            if let Some(min) = self.col_min(j) {
                for i in 0..self.rows {
                    if let Some(v) = self.get(i, j) {
                        self.set(i, j, Some(v - min));
                    }
                }
            }
        }
    }

    /// Pad the matrix to a square shape with `fill` cells.
    ///
    /// Square matrices are returned unchanged. Zero padding is
    /// appropriate for minimization instances, forbidden padding for
    /// maximization instances, so that the padding never wins an
    /// optimal assignment improperly.
    pub fn squared(&self, fill: Fill) -> CostMatrix<F> {
        if self.is_square() {
            return self.clone();
        }
        let n = self.rows.max(self.cols);
        let cell = match fill {
            Fill::Zero => Some(F::zero()),
            Fill::Forbidden => None,
        };
        let mut sq = CostMatrix::filled(n, n, cell);
        for i in 0..self.rows {
            for j in 0..self.cols {
                sq.set(i, j, self.get(i, j));
            }
        }
        sq
    }

    /// Transform a maximization instance into a minimization
    /// instance.
    ///
    /// Every finite cell `v` is replaced by `max - v` where `max` is
    /// the global maximum finite value; forbidden cells stay
    /// forbidden. The transform is lossless: an optimal assignment of
    /// the result is optimal for the original maximization problem
    /// and the original objective is `max * n - reduced_cost`.
    ///
    /// A matrix without any finite cell is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_assign::CostMatrix;
    ///
    /// let m = CostMatrix::from_rows(vec![
    ///     vec![Some(4), Some(1)],
    ///     vec![None, Some(5)],
    /// ]).unwrap();
    /// let t = m.to_minimization();
    /// assert_eq!(t.get(0, 0), Some(1));
    /// assert_eq!(t.get(0, 1), Some(4));
    /// assert_eq!(t.get(1, 0), None);
    /// assert_eq!(t.get(1, 1), Some(0));
    /// ```
    pub fn to_minimization(&self) -> CostMatrix<F> {
        let max = match self.max_finite() {
            Some(max) => max,
            None => return self.clone(),
        };
        let mut t = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                if let Some(v) = self.get(i, j) {
                    t.set(i, j, Some(max - v));
                }
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::{CostMatrix, Fill};
    use crate::error::Error;

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            CostMatrix::<i64>::from_costs(vec![]),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            CostMatrix::<i64>::from_rows(vec![vec![]]),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            CostMatrix::from_costs(vec![vec![1, 2], vec![3]]),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_reduction_skips_forbidden() {
        let mut m = CostMatrix::from_rows(vec![vec![Some(7), None, Some(3)], vec![None, None, None]]).unwrap();
        m.reduce_rows();
        assert_eq!(m.get(0, 0), Some(4));
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(0, 2), Some(0));
        // the fully forbidden row is untouched
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.fully_forbidden_row(), Some(1));
    }

    #[test]
    fn test_column_reduction() {
        let mut m = CostMatrix::from_costs(vec![vec![4, 1], vec![2, 5]]).unwrap();
        m.reduce_cols();
        assert_eq!(m.get(0, 0), Some(2));
        assert_eq!(m.get(1, 0), Some(0));
        assert_eq!(m.get(0, 1), Some(0));
        assert_eq!(m.get(1, 1), Some(4));
    }

    #[test]
    fn test_squared_zero_fill() {
        let m = CostMatrix::from_costs(vec![vec![1, 2, 3]]).unwrap();
        let sq = m.squared(Fill::Zero);
        assert_eq!(sq.rows(), 3);
        assert_eq!(sq.cols(), 3);
        assert_eq!(sq.get(0, 1), Some(2));
        assert_eq!(sq.get(2, 0), Some(0));
    }

    #[test]
    fn test_squared_forbidden_fill() {
        let m = CostMatrix::from_costs(vec![vec![1], vec![2]]).unwrap();
        let sq = m.squared(Fill::Forbidden);
        assert_eq!(sq.rows(), 2);
        assert_eq!(sq.get(0, 1), None);
        assert_eq!(sq.get(1, 1), None);
        assert_eq!(sq.get(1, 0), Some(2));
    }

    #[test]
    fn test_squared_noop_for_square() {
        let m = CostMatrix::from_costs(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.squared(Fill::Zero), m);
    }

    #[test]
    fn test_to_minimization_floats() {
        let m = CostMatrix::from_costs(vec![vec![0.5, 2.0], vec![1.5, 1.0]]).unwrap();
        let t = m.to_minimization();
        assert_eq!(t.get(0, 0), Some(1.5));
        assert_eq!(t.get(0, 1), Some(0.0));
        assert_eq!(t.get(1, 0), Some(0.5));
        assert_eq!(t.get(1, 1), Some(1.0));
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::CostMatrix;

        #[test]
        fn test_serde() {
            let m = CostMatrix::from_rows(vec![vec![Some(1), None], vec![Some(2), Some(3)]]).unwrap();
            let serialized = serde_json::to_string(&m).unwrap();
            let n: CostMatrix<i64> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(m, n);
        }
    }
}
