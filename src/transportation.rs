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

//! The balanced transportation problem.
//!
//! Given supplies for `R` sources, demands for `C` destinations and
//! an `R x C` cost matrix, find a non-negative allocation matrix
//! whose row sums equal the supplies and whose column sums equal the
//! demands at minimum total cost.
//!
//! The solver builds an initial basic feasible solution with the
//! Northwest-Corner rule and improves it to optimality with the MODI
//! method (potentials and stepping-stone pivots).

pub mod modi;
pub mod northwest;
pub use self::northwest::northwest_corner;

use crate::error::{Error, Result};
use crate::matrix::CostMatrix;
use crate::num::traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An optimal allocation of supplies to demands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Allocation<F> {
    cells: Vec<Vec<F>>,
    initial: F,
    total: F,
    pivots: usize,
}

impl<F> Allocation<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// The allocation matrix, one row per source.
    pub fn allocations(&self) -> &[Vec<F>] {
        &self.cells
    }

    /// The allocated quantity shipped from source `i` to
    /// destination `j`.
    pub fn get(&self, i: usize, j: usize) -> F {
        self.cells[i][j]
    }

    /// The cost of the Northwest-Corner starting solution.
    pub fn initial_cost(&self) -> F {
        self.initial
    }

    /// The optimized total cost.
    pub fn total(&self) -> F {
        self.total
    }

    /// The number of MODI pivots performed.
    pub fn pivots(&self) -> usize {
        self.pivots
    }
}

/// The total cost `sum of allocation[i][j] * cost[i][j]` of an
/// allocation.
pub fn total_cost<F>(costs: &[Vec<F>], alloc: &[Vec<F>]) -> F
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut total = F::zero();
    for (crow, arow) in costs.iter().zip(alloc) {
        for (&c, &a) in crow.iter().zip(arow) {
            total += a * c;
        }
    }
    total
}

/// Solve a balanced transportation problem.
///
/// Fails with [`Error::InvalidInput`] if the vectors are empty or do
/// not match the matrix shape, if a supply or demand is negative or
/// if the cost matrix contains a forbidden cell, and with
/// [`Error::Unbalanced`] if total supply and total demand differ.
/// [`Error::BrokenBasis`] and [`Error::NonConvergence`] are
/// propagated from the MODI phase.
///
/// # Example
///
/// ```
/// use rs_assign::transportation;
/// use rs_assign::CostMatrix;
///
/// let costs = CostMatrix::from_costs(vec![
///     vec![17, 20, 13, 12],
///     vec![15, 21, 26, 25],
///     vec![15, 14, 15, 17],
/// ]).unwrap();
///
/// let sol = transportation::solve(&[70, 90, 115], &[50, 60, 70, 95], &costs).unwrap();
/// assert_eq!(sol.initial_cost(), 5305);
/// assert_eq!(sol.total(), 4185);
///
/// // feasibility: row sums match the supplies, column sums the demands
/// let row0: i64 = sol.allocations()[0].iter().sum();
/// assert_eq!(row0, 70);
/// ```
pub fn solve<F>(supply: &[F], demand: &[F], costs: &CostMatrix<F>) -> Result<Allocation<F>>
where
    F: NumAssign + PartialOrd + Copy,
{
    if supply.len() != costs.rows() || demand.len() != costs.cols() {
        return Err(Error::InvalidInput {
            msg: format!(
                "supply/demand lengths {}/{} do not match the {}x{} cost matrix",
                supply.len(),
                demand.len(),
                costs.rows(),
                costs.cols()
            ),
        });
    }
    if supply.iter().chain(demand).any(|&x| x < F::zero()) {
        return Err(Error::InvalidInput {
            msg: "supplies and demands must be non-negative".into(),
        });
    }

    let mut dense = Vec::with_capacity(costs.rows());
    for i in 0..costs.rows() {
        let mut row = Vec::with_capacity(costs.cols());
        for j in 0..costs.cols() {
            match costs.get(i, j) {
                Some(v) => row.push(v),
                None => {
                    return Err(Error::InvalidInput {
                        msg: format!("transportation cost at ({}, {}) must be finite", i, j),
                    })
                }
            }
        }
        dense.push(row);
    }

    let mut s = F::zero();
    for &x in supply {
        s += x;
    }
    let mut d = F::zero();
    for &x in demand {
        d += x;
    }
    if s != d {
        return Err(Error::Unbalanced);
    }

    let (mut alloc, mut basis) = northwest_corner(supply, demand);
    let initial = total_cost(&dense, &alloc);
    let pivots = modi::optimize(&dense, &mut alloc, &mut basis)?;
    let total = total_cost(&dense, &alloc);

    Ok(Allocation {
        cells: alloc,
        initial,
        total,
        pivots,
    })
}
