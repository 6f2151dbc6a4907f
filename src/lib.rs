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

//! A library for matrix-based assignment and transportation problems.
//!
//! Two solvers share a numeric substrate of dense cost matrices with
//! forbidden cells ([`CostMatrix`]):
//!
//! * [`assignment`] solves the linear assignment problem with the
//!   Hungarian method (matrix reduction, augmenting-path matching on
//!   zero cells and covering-line adjustments).
//! * [`transportation`] solves the balanced transportation problem
//!   with a Northwest-Corner starting solution followed by MODI
//!   (potentials and stepping-stone pivots).
//!
//! Both solvers are synchronous, deterministic pure functions of
//! their inputs and are generic over the cost type via `num-traits`,
//! so integer and floating-point matrices both work.

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

pub mod matrix;
pub use self::matrix::{CostMatrix, Fill};

// # Solvers

pub mod assignment;
pub use self::assignment::Objective;

pub mod transportation;
