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

//! Error types shared by all solvers.

use std::error;
use std::fmt;

/// Error returned by a failed solve call.
///
/// All errors are terminal for that call, no partial result is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The instance is malformed (empty matrix, ragged rows, a fully
    /// forbidden row or column, negative supplies, ...). Detected
    /// before solving begins.
    InvalidInput { msg: String },
    /// The total supply of a transportation instance does not equal
    /// the total demand.
    Unbalanced,
    /// The Hungarian method terminated without a full matching, the
    /// cost matrix admits no complete assignment.
    IncompleteAssignment { assigned: usize, required: usize },
    /// No closed loop through the basic cells exists for the entering
    /// cell, the basic solution is corrupt.
    BrokenBasis { row: usize, col: usize },
    /// The iteration cap was exceeded.
    NonConvergence { iterations: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidInput { msg } => write!(fmt, "Invalid input: {}", msg),
            Unbalanced => write!(fmt, "Unbalanced instance: total supply does not equal total demand"),
            IncompleteAssignment { assigned, required } => write!(
                fmt,
                "Incomplete assignment: only {} of {} rows could be assigned",
                assigned, required
            ),
            BrokenBasis { row, col } => {
                write!(fmt, "Broken basis: no closed loop for entering cell ({}, {})", row, col)
            }
            NonConvergence { iterations } => write!(fmt, "No convergence after {} iterations", iterations),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
