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

//! The Hungarian method (Kuhn-Munkres) for the assignment problem.
//!
//! The solver pads the cost matrix to a square shape, reduces rows
//! and columns and then alternates between an augmenting-path
//! matching on the zero cells and a covering-line cost adjustment
//! until a perfect matching on zeros exists.
//!
//! Ties between equally good zero cells are broken in row-major scan
//! order, so results are deterministic.

use super::Objective;
use crate::error::{Error, Result};
use crate::matrix::{CostMatrix, Fill};
use crate::num::traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

const NONE: usize = usize::MAX;

/// An optimal assignment.
///
/// Row/column pairs refer to the original (unpadded) matrix; padding
/// cells never contribute. For a rectangular matrix the assignment is
/// a partial permutation of size `min(rows, cols)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Assignment<F> {
    rows: usize,
    cols: usize,
    pairs: Vec<(usize, usize, F)>,
    total: F,
}

impl<F> Assignment<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// The assigned `(row, column, cost)` triples in row-major order.
    pub fn pairs(&self) -> &[(usize, usize, F)] {
        &self.pairs
    }

    /// The total cost of the assignment.
    pub fn total(&self) -> F {
        self.total
    }

    /// The 0/1 indicator matrix of the assignment in the original
    /// shape. Every row and column contains at most one `1`.
    pub fn indicator(&self) -> Vec<Vec<u8>> {
        let mut ind = vec![vec![0; self.cols]; self.rows];
        for &(i, j, _) in &self.pairs {
            ind[i][j] = 1;
        }
        ind
    }
}

/// Solve the assignment problem for a cost matrix.
///
/// Returns the optimal [`Assignment`] for the given [`Objective`].
/// Maximization instances are transformed into minimization instances
/// by replacing every finite cost `v` with `max - v` first; the
/// reported pairs and total refer to the original costs.
///
/// Fails with [`Error::InvalidInput`] if the matrix is empty or has a
/// fully forbidden row or column, with
/// [`Error::IncompleteAssignment`] if no complete assignment exists
/// and with [`Error::NonConvergence`] if the adjustment loop exceeds
/// `50 * n` rounds.
///
/// # Example
///
/// ```
/// use rs_assign::assignment::{self, Objective};
/// use rs_assign::CostMatrix;
///
/// let m = CostMatrix::from_costs(vec![
///     vec![4, 1, 3],
///     vec![2, 0, 5],
///     vec![3, 2, 2],
/// ]).unwrap();
///
/// let a = assignment::solve(&m, Objective::Minimize).unwrap();
/// assert_eq!(a.total(), 5);
/// assert_eq!(a.pairs(), &[(0, 1, 1), (1, 0, 2), (2, 2, 2)]);
///
/// let a = assignment::solve(&m, Objective::Maximize).unwrap();
/// assert_eq!(a.total(), 11);
/// assert_eq!(a.pairs(), &[(0, 0, 4), (1, 2, 5), (2, 1, 2)]);
/// ```
pub fn solve<F>(costs: &CostMatrix<F>, objective: Objective) -> Result<Assignment<F>>
where
    F: NumAssign + PartialOrd + Copy,
{
    if let Some(i) = costs.fully_forbidden_row() {
        return Err(Error::InvalidInput {
            msg: format!("row {} has no admissible cell", i),
        });
    }
    if let Some(j) = costs.fully_forbidden_col() {
        return Err(Error::InvalidInput {
            msg: format!("column {} has no admissible cell", j),
        });
    }

    let mut work = match objective {
        Objective::Minimize => costs.clone(),
        Objective::Maximize => costs.to_minimization(),
    }
    .squared(Fill::Zero);
    let n = work.rows();

    work.reduce_rows();
    work.reduce_cols();

    let mut row_match = vec![NONE; n];
    let mut col_match = vec![NONE; n];
    let max_rounds = 50 * n;

    for round in 0..=max_rounds {
        if round == max_rounds {
            return Err(Error::NonConvergence { iterations: max_rounds });
        }

        // Maximum matching on the zero cells.
        for m in row_match.iter_mut() {
            *m = NONE;
        }
        for m in col_match.iter_mut() {
            *m = NONE;
        }
        let mut matched = 0;
        for i in 0..n {
            let mut visited = vec![false; n];
            if augment(&work, i, &mut visited, &mut row_match, &mut col_match) {
                matched += 1;
            }
        }
        if matched == n {
            break;
        }

        // Minimum vertex cover of the zeros: unmatched rows are
        // marked, marks propagate to zero columns and to the rows
        // matched to them. Cover = unmarked rows + marked columns.
        let mut row_marked: Vec<bool> = row_match.iter().map(|&j| j == NONE).collect();
        let mut col_marked = vec![false; n];
        loop {
            let mut changed = false;
            for i in 0..n {
                if !row_marked[i] {
                    continue;
                }
                for j in 0..n {
                    if !col_marked[j] && is_zero(&work, i, j) {
                        col_marked[j] = true;
                        changed = true;
                    }
                }
            }
            for j in 0..n {
                if col_marked[j] && col_match[j] != NONE && !row_marked[col_match[j]] {
                    row_marked[col_match[j]] = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Smallest uncovered finite value.
        let mut delta = None;
        for i in 0..n {
            for j in 0..n {
                if row_marked[i] && !col_marked[j] {
                    if let Some(v) = work.get(i, j) {
                        delta = Some(match delta {
                            Some(d) if d < v => d,
                            _ => v,
                        });
                    }
                }
            }
        }
        let delta = match delta {
            Some(d) => d,
            // Every uncovered cell is forbidden, no further zero can
            // be created: the instance is infeasible.
            None => {
                return Err(Error::IncompleteAssignment {
                    assigned: matched,
                    required: n,
                })
            }
        };

        for i in 0..n {
            for j in 0..n {
                if let Some(v) = work.get(i, j) {
                    if row_marked[i] && !col_marked[j] {
                        work.set(i, j, Some(v - delta));
                    } else if !row_marked[i] && col_marked[j] {
                        work.set(i, j, Some(v + delta));
                    }
                }
            }
        }
    }

    // Collect the pairs inside the original shape. Forbidden cells
    // are never matched (they are never zero in the working matrix),
    // matches on padding rows/columns are dropped.
    let mut pairs = Vec::new();
    let mut total = F::zero();
    for i in 0..costs.rows() {
        let j = row_match[i];
        if j < costs.cols() {
            if let Some(v) = costs.get(i, j) {
                pairs.push((i, j, v));
                total += v;
            }
        }
    }

    Ok(Assignment {
        rows: costs.rows(),
        cols: costs.cols(),
        pairs,
        total,
    })
}

fn is_zero<F>(work: &CostMatrix<F>, i: usize, j: usize) -> bool
where
    F: NumAssign + PartialOrd + Copy,
{
    work.get(i, j).map_or(false, |v| v.is_zero())
}

/// Try to match row `i` to a zero column, rerouting existing matches
/// along an augmenting path. Columns are scanned in increasing order,
/// which fixes the tie-break among equal zeros.
fn augment<F>(
    work: &CostMatrix<F>,
    i: usize,
    visited: &mut [bool],
    row_match: &mut [usize],
    col_match: &mut [usize],
) -> bool
where
    F: NumAssign + PartialOrd + Copy,
{
    for j in 0..work.cols() {
        if !visited[j] && is_zero(work, i, j) {
            visited[j] = true;
            if col_match[j] == NONE || augment(work, col_match[j], visited, row_match, col_match) {
                row_match[i] = j;
                col_match[j] = i;
                return true;
            }
        }
    }
    false
}
