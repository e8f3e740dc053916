//! Implements the base structures for a soil column simulation

mod constants;
mod control;
mod grid;
mod parameters;
mod sample_params;
mod sim_input;
mod soil_column;
mod testing;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::grid::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
pub use crate::base::sim_input::*;
pub use crate::base::soil_column::*;

#[allow(unused_imports)]
pub(crate) use crate::base::testing::*;
