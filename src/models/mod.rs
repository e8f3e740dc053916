//! Implements soil constitutive models

mod model_constitutive;
mod model_van_genuchten;
pub use crate::models::model_constitutive::*;
pub use crate::models::model_van_genuchten::*;
