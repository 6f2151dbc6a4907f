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

//! The Northwest-Corner rule.

use crate::num::traits::NumAssign;

/// Build an initial basic feasible solution with the
/// Northwest-Corner rule.
///
/// Starting at the top-left cell, the rule allocates the minimum of
/// the remaining supply and demand, advances to the next row when the
/// current supply is exhausted and to the next column when the
/// current demand is exhausted. When both are exhausted at once only
/// the row index advances, so the next visited cell stays in the
/// basis with a zero allocation. Every visited cell is a basic cell,
/// for a balanced instance exactly `R + C - 1` of them, forming a
/// spanning tree over the sources and destinations.
///
/// Returns the allocation matrix (row sums equal the supplies, column
/// sums the demands) and the basis membership matrix. The cost of the
/// result is generally not optimal, see
/// [`modi::optimize`](super::modi::optimize).
///
/// The caller is expected to pass a balanced instance with
/// non-negative supplies and demands;
/// [`transportation::solve`](super::solve) validates this.
///
/// # Example
///
/// ```
/// use rs_assign::transportation::northwest_corner;
///
/// let (alloc, basis) = northwest_corner(&[70, 90, 115], &[50, 60, 70, 95]);
/// assert_eq!(alloc, vec![
///     vec![50, 20, 0, 0],
///     vec![0, 40, 50, 0],
///     vec![0, 0, 20, 95],
/// ]);
/// assert_eq!(basis[1], vec![false, true, true, false]);
/// ```
pub fn northwest_corner<F>(supply: &[F], demand: &[F]) -> (Vec<Vec<F>>, Vec<Vec<bool>>)
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut alloc = vec![vec![F::zero(); demand.len()]; supply.len()];
    let mut basis = vec![vec![false; demand.len()]; supply.len()];
    let mut s = supply.to_vec();
    let mut d = demand.to_vec();

    let mut i = 0;
    let mut j = 0;
    while i < s.len() && j < d.len() {
        let q = if s[i] < d[j] { s[i] } else { d[j] };
        alloc[i][j] = q;
        basis[i][j] = true;
        s[i] -= q;
        d[j] -= q;
        if s[i].is_zero() {
            i += 1;
        } else if d[j].is_zero() {
            j += 1;
        }
    }

    (alloc, basis)
}

#[cfg(test)]
mod tests {
    use super::northwest_corner;

    #[test]
    fn test_feasibility() {
        let supply = [12i64, 1, 5];
        let demand = [3i64, 3, 3, 9];
        let (alloc, basis) = northwest_corner(&supply, &demand);
        for (row, &s) in alloc.iter().zip(&supply) {
            assert_eq!(row.iter().sum::<i64>(), s);
        }
        for (j, &d) in demand.iter().enumerate() {
            assert_eq!(alloc.iter().map(|row| row[j]).sum::<i64>(), d);
        }
        let count = basis.iter().flatten().filter(|&&b| b).count();
        assert_eq!(count, supply.len() + demand.len() - 1);
    }

    #[test]
    fn test_simultaneous_exhaustion_keeps_spanning_basis() {
        // supply 0 and demand 0 hit at the same time; the cell below
        // the corner stays basic with a zero allocation so the basis
        // still spans
        let (alloc, basis) = northwest_corner(&[10i64, 20], &[10, 20]);
        assert_eq!(alloc, vec![vec![10, 0], vec![0, 20]]);
        assert_eq!(basis, vec![vec![true, false], vec![true, true]]);
    }

    #[test]
    fn test_zero_supply_row() {
        let (alloc, basis) = northwest_corner(&[0i64, 10], &[4, 6]);
        assert_eq!(alloc, vec![vec![0, 0], vec![4, 6]]);
        assert_eq!(basis, vec![vec![true, false], vec![true, true]]);
    }

    #[test]
    fn test_single_cell() {
        let (alloc, basis) = northwest_corner(&[5i64], &[5]);
        assert_eq!(alloc, vec![vec![5]]);
        assert_eq!(basis, vec![vec![true]]);
    }
}
