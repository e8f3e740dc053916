use crate::base::Control;
use crate::StrError;
use russell_lab::{vec_norm, Norm, Vector};

/// Calculates the time increment for the next step
///
/// ```text
/// Δt = min(dt_max, courant · dz_min / max(|q|))
/// ```
///
/// If all fluxes are zero, the ratio is undefined and `Δt = dt_max`.
///
/// # Input
///
/// * `q` -- face fluxes
/// * `dz_min` -- minimum absolute node spacing
/// * `control` -- holds `dt_max` and `courant`
///
/// # Output
///
/// Returns `0 < Δt ≤ dt_max`
pub fn calc_time_step(q: &Vector, dz_min: f64, control: &Control) -> Result<f64, StrError> {
    if q.as_data().iter().any(|v| !v.is_finite()) {
        return Err("found NaN or Inf in the flux field");
    }
    let q_max = vec_norm(q, Norm::Max);
    if q_max == 0.0 {
        return Ok(control.dt_max);
    }
    let dt = f64::min(control.dt_max, control.courant * dz_min / q_max);
    if dt <= 0.0 || !dt.is_finite() {
        return Err("the time increment must be positive and finite");
    }
    Ok(dt)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
