//! Reference solver for the one-dimensional Richards equation
//!
//! The pressure head along a vertical soil column is advanced in time with an explicit,
//! adaptive, predictor-corrector scheme. Face fluxes use Darcy's law with the geometric
//! mean of the nodal conductivities, and the material response is given by a soil
//! constitutive model (van Genuchten–Mualem by default).
//!
//! This is a reference integrator: there is no step rejection, damping, or retry.
//! NaN or Inf values entering the state are reported as errors.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod models;
pub mod prelude;
pub mod solver;
pub use crate::base::*;
pub use crate::models::*;
pub use crate::solver::*;
