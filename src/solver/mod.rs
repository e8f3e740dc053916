//! Implements the explicit adaptive solver for the Richards equation

mod darcy;
mod euler;
mod richards;
mod solution;
mod time_step;
pub use crate::solver::darcy::*;
pub use crate::solver::euler::*;
pub use crate::solver::richards::*;
pub use crate::solver::solution::*;
pub use crate::solver::time_step::*;
