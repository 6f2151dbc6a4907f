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

//! The MODI (modified distribution) optimization method.
//!
//! Starting from a basic feasible solution, each iteration computes
//! row and column potentials from the basic cells, selects the
//! non-basic cell with the most negative reduced cost, finds its
//! closed loop through the basic cells and shifts allocation around
//! the loop until every reduced cost is non-negative.
//!
//! Basis membership is tracked explicitly: a basic cell may carry a
//! zero allocation (a degenerate basis stays a spanning tree), and
//! each pivot exchanges exactly one basic cell for the entering cell.

use crate::error::{Error, Result};
use crate::num::traits::NumAssign;
use log::{debug, warn};

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Col,
}

/// Optimize a basic feasible solution in place.
///
/// `costs`, `alloc` and `basis` must have the same `R x C` shape;
/// `alloc` must be feasible and zero outside the basis, and the basis
/// cells must form a spanning tree over the sources and destinations
/// (exactly `R + C - 1` cells, as produced by
/// [`northwest_corner`](super::northwest_corner)). Every pivot
/// preserves the row and column sums exactly and swaps one basic cell
/// for the entering cell. Returns the number of pivots performed,
/// zero if the input is already optimal.
///
/// Fails with [`Error::InvalidInput`] if `costs` is empty. For a
/// caller-supplied basis that does not span, unresolvable potentials
/// are set to zero with a logged warning; if an entering cell chosen
/// under such potentials has no closed loop the solve fails with
/// [`Error::BrokenBasis`]. More than `50 * (R + C)` pivots fail with
/// [`Error::NonConvergence`].
pub fn optimize<F>(costs: &[Vec<F>], alloc: &mut [Vec<F>], basis: &mut [Vec<bool>]) -> Result<usize>
where
    F: NumAssign + PartialOrd + Copy,
{
    if costs.is_empty() || costs[0].is_empty() {
        return Err(Error::InvalidInput {
            msg: "cost matrix must not be empty".into(),
        });
    }
    let rows = costs.len();
    let cols = costs[0].len();
    let max_pivots = 50 * (rows + cols);

    for pivots in 0..=max_pivots {
        let (u, v) = potentials(costs, basis);

        // Entering cell: the non-basic cell with the most negative
        // reduced cost, ties broken in row-major order by the strict
        // comparison.
        let mut entering = None;
        for i in 0..rows {
            for j in 0..cols {
                if basis[i][j] {
                    continue;
                }
                let reduced = costs[i][j] - (u[i] + v[j]);
                if reduced < F::zero() {
                    match entering {
                        Some((_, _, best)) if best <= reduced => {}
                        _ => entering = Some((i, j, reduced)),
                    }
                }
            }
        }

        let (ei, ej, _) = match entering {
            Some(cell) => cell,
            // All reduced costs are non-negative: optimal.
            None => return Ok(pivots),
        };
        if pivots == max_pivots {
            return Err(Error::NonConvergence { iterations: max_pivots });
        }
        debug!("pivot {}: entering cell ({}, {})", pivots + 1, ei, ej);

        let cycle = find_loop(basis, (ei, ej)).ok_or(Error::BrokenBasis { row: ei, col: ej })?;

        // Alternate +/- labels starting with + at the entering cell.
        // The first "-" cell with the smallest allocation leaves the
        // basis; other "-" cells reaching zero stay basic.
        let mut leaving = None;
        for &(i, j) in cycle.iter().skip(1).step_by(2) {
            match leaving {
                Some((theta, _, _)) if theta <= alloc[i][j] => {}
                _ => leaving = Some((alloc[i][j], i, j)),
            }
        }
        let (theta, li, lj) = leaving.expect("stepping-stone loop has at least two cells");

        for (k, &(i, j)) in cycle.iter().enumerate() {
            if k % 2 == 0 {
                alloc[i][j] += theta;
            } else {
                alloc[i][j] -= theta;
            }
        }
        basis[ei][ej] = true;
        basis[li][lj] = false;
    }

    unreachable!()
}

/// Compute the dual potentials `u` (rows) and `v` (columns) from the
/// basic cells, anchored by `u[0] = 0`.
///
/// For every basic cell `(i, j)` the potentials satisfy
/// `u[i] + v[j] = cost[i][j]`. A spanning basis determines all of
/// them; potentials left underivable by a non-spanning basis are set
/// to zero.
fn potentials<F>(costs: &[Vec<F>], basis: &[Vec<bool>]) -> (Vec<F>, Vec<F>)
where
    F: NumAssign + PartialOrd + Copy,
{
    let rows = costs.len();
    let cols = costs[0].len();
    let mut u: Vec<Option<F>> = vec![None; rows];
    let mut v: Vec<Option<F>> = vec![None; cols];
    u[0] = Some(F::zero());

    loop {
        let mut changed = false;
        for i in 0..rows {
            for j in 0..cols {
                if !basis[i][j] {
                    continue;
                }
                match (u[i], v[j]) {
                    (Some(ui), None) => {
                        v[j] = Some(costs[i][j] - ui);
                        changed = true;
                    }
                    (None, Some(vj)) => {
                        u[i] = Some(costs[i][j] - vj);
                        changed = true;
                    }
                    _ => {}
                }
            }
        }
        if !changed {
            break;
        }
    }

    if u.iter().any(Option::is_none) || v.iter().any(Option::is_none) {
        warn!("basis does not span all rows and columns: unresolved potentials set to zero");
    }
    (
        u.into_iter().map(|x| x.unwrap_or_else(F::zero)).collect(),
        v.into_iter().map(|x| x.unwrap_or_else(F::zero)).collect(),
    )
}

/// Find the closed stepping-stone loop for an entering cell.
///
/// The loop starts and ends at `start`, alternates strictly between
/// row and column moves, visits only basic cells in between and has
/// length at least four. The first move runs along the row of the
/// entering cell; since a closed loop can be traversed in either
/// direction this loses no generality.
fn find_loop(basis: &[Vec<bool>], start: (usize, usize)) -> Option<Vec<(usize, usize)>> {
    let mut path = vec![start];
    if extend(basis, start, &mut path, Axis::Row) {
        Some(path)
    } else {
        None
    }
}

fn extend(basis: &[Vec<bool>], start: (usize, usize), path: &mut Vec<(usize, usize)>, axis: Axis) -> bool {
    let &(ci, cj) = path.last().expect("path never empty");
    match axis {
        Axis::Row => {
            for j in 0..basis[ci].len() {
                if j == cj || !basis[ci][j] || path.contains(&(ci, j)) {
                    continue;
                }
                path.push((ci, j));
                if extend(basis, start, path, Axis::Col) {
                    return true;
                }
                path.pop();
            }
        }
        Axis::Col => {
            // The final move back to the entering cell is a column
            // move (its predecessor was reached by a row move).
            if cj == start.1 && path.len() >= 4 {
                return true;
            }
            for i in 0..basis.len() {
                if i == ci || !basis[i][cj] || path.contains(&(i, cj)) {
                    continue;
                }
                path.push((i, cj));
                if extend(basis, start, path, Axis::Row) {
                    return true;
                }
                path.pop();
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{find_loop, optimize, potentials};
    use crate::error::Error;
    use crate::transportation::{northwest_corner, total_cost};

    fn positive_basis(alloc: &[Vec<i64>]) -> Vec<Vec<bool>> {
        alloc.iter().map(|row| row.iter().map(|&a| a > 0).collect()).collect()
    }

    #[test]
    fn test_optimal_input_performs_no_pivot() {
        // The MODI-optimal allocation of the golden instance: all
        // reduced costs are non-negative, so no pivot happens.
        let costs = vec![
            vec![17i64, 20, 13, 12],
            vec![15, 21, 26, 25],
            vec![15, 14, 15, 17],
        ];
        let mut alloc = vec![vec![0i64, 0, 0, 70], vec![50, 40, 0, 0], vec![0, 20, 70, 25]];
        let mut basis = positive_basis(&alloc);
        let before = alloc.clone();
        assert_eq!(optimize(&costs, &mut alloc, &mut basis), Ok(0));
        assert_eq!(alloc, before);
    }

    #[test]
    fn test_pivot_improves_cost() {
        let costs = vec![
            vec![17i64, 20, 13, 12],
            vec![15, 21, 26, 25],
            vec![15, 14, 15, 17],
        ];
        let (mut alloc, mut basis) = northwest_corner(&[70, 90, 115], &[50, 60, 70, 95]);
        let pivots = optimize(&costs, &mut alloc, &mut basis).unwrap();
        assert!(pivots > 0);
        assert_eq!(total_cost(&costs, &alloc), 4185);
    }

    #[test]
    fn test_potentials_of_spanning_basis() {
        let costs = vec![vec![1i64, 2], vec![2, 1]];
        let basis = positive_basis(&[vec![4, 1], vec![0, 5]]);
        let (u, v) = potentials(&costs, &basis);
        assert_eq!(u, vec![0, -1]);
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn test_degenerate_start_requires_pivot() {
        // Simultaneous exhaustion in the Northwest corner: the basis
        // carries a zero-allocation cell and the pivot through it
        // still finds the optimum.
        let costs = vec![vec![1i64, 3], vec![2, 10]];
        let (mut alloc, mut basis) = northwest_corner(&[10, 10], &[10, 10]);
        assert_eq!(total_cost(&costs, &alloc), 110);
        let pivots = optimize(&costs, &mut alloc, &mut basis).unwrap();
        assert_eq!(pivots, 1);
        assert_eq!(alloc, vec![vec![0, 10], vec![10, 0]]);
        assert_eq!(total_cost(&costs, &alloc), 50);
    }

    #[test]
    fn test_degenerate_start_already_optimal() {
        let costs = vec![vec![16i64, 24], vec![7, 8]];
        let (mut alloc, mut basis) = northwest_corner(&[19, 19], &[19, 19]);
        assert_eq!(optimize(&costs, &mut alloc, &mut basis), Ok(0));
        assert_eq!(alloc, vec![vec![19, 0], vec![0, 19]]);
        assert_eq!(total_cost(&costs, &alloc), 456);
    }

    #[test]
    fn test_disconnected_basis_is_fatal() {
        // A caller-supplied basis without a spanning tree: the
        // entering cell has no closed loop.
        let costs = vec![vec![3i64, 1], vec![1, 3]];
        let mut alloc = vec![vec![5i64, 0], vec![0, 5]];
        let mut basis = vec![vec![true, false], vec![false, true]];
        assert_eq!(
            optimize(&costs, &mut alloc, &mut basis),
            Err(Error::BrokenBasis { row: 1, col: 0 })
        );
    }

    #[test]
    fn test_empty_costs_rejected() {
        let costs: Vec<Vec<i64>> = Vec::new();
        assert!(matches!(
            optimize(&costs, &mut [], &mut []),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_find_loop_length_four() {
        let basis = vec![vec![true, true], vec![false, true]];
        let cycle = find_loop(&basis, (1, 0)).unwrap();
        assert_eq!(cycle, vec![(1, 0), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_find_loop_missing() {
        let basis = vec![vec![true, false], vec![false, true]];
        assert!(find_loop(&basis, (1, 0)).is_none());
    }
}
