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

//! The linear assignment problem.
//!
//! Given an `n x m` cost matrix, find a set of row/column pairs such
//! that every row and every column is used at most once, all
//! `min(n, m)` possible pairs are formed and the total cost of the
//! chosen cells is minimal (or maximal).

pub mod hungarian;
pub use self::hungarian::{solve, Assignment};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Optimization direction of an assignment instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Objective {
    /// Find an assignment of minimum total cost.
    Minimize,
    /// Find an assignment of maximum total cost.
    Maximize,
}
