//! Makes available common structures needed to run a simulation
//!
//! You may write `use richsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Control, ParamSoil, SampleParams, SimInput, SoilColumn, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::models::{ModelConstitutive, ModelVanGenuchten};
pub use crate::solver::{solve, Solution, SolverRichards};
pub use crate::StrError;
