use super::{DEFAULT_COURANT, DEFAULT_DT_MAX};
use serde::{Deserialize, Serialize};

/// Holds the (time-loop) options to control the simulation
///
/// Missing fields in a JSON input take their default values; see [Control::new()].
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Control {
    /// Absolute ceiling of the time increment max(Δt)
    pub dt_max: f64,

    /// Coefficient of the Courant-like bound Δt ≤ courant · min(|Δz|) / max(|q|)
    pub courant: f64,

    /// Prescribed flux at the top boundary
    pub q_upper: f64,

    /// Prescribed flux at the bottom boundary
    pub q_lower: f64,

    /// Maximum number of time steps (None means unlimited)
    pub n_max_time_steps: Option<usize>,

    /// Time increment for recording profile snapshots (None means no recording)
    pub dt_out: Option<f64>,

    /// Verbose mode during timesteps
    pub verbose: bool,
}

impl Control {
    /// Allocates a new instance with default values
    ///
    /// The boundary fluxes are zero (closed column).
    pub fn new() -> Self {
        Control {
            dt_max: DEFAULT_DT_MAX,
            courant: DEFAULT_COURANT,
            q_upper: 0.0,
            q_lower: 0.0,
            n_max_time_steps: None,
            dt_out: None,
            verbose: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.dt_max > 0.0) || !self.dt_max.is_finite() {
            return Some(format!("dt_max = {:?} is incorrect; it must be > 0.0", self.dt_max));
        }
        if !(self.courant > 0.0) || !self.courant.is_finite() {
            return Some(format!("courant = {:?} is incorrect; it must be > 0.0", self.courant));
        }
        if !self.q_upper.is_finite() {
            return Some(format!("q_upper = {:?} is incorrect; it must be finite", self.q_upper));
        }
        if !self.q_lower.is_finite() {
            return Some(format!("q_lower = {:?} is incorrect; it must be finite", self.q_lower));
        }
        if let Some(n) = self.n_max_time_steps {
            if n == 0 {
                return Some("n_max_time_steps = 0 is incorrect; it must be ≥ 1".to_string());
            }
        }
        if let Some(dt_out) = self.dt_out {
            if !(dt_out > 0.0) || !dt_out.is_finite() {
                return Some(format!("dt_out = {:?} is incorrect; it must be > 0.0", dt_out));
            }
        }
        None // all good
    }

    /// Prints the header of the table with timestep data
    #[inline]
    pub fn print_header(&self) {
        if self.verbose {
            println!("{:>8} {:>13} {:>13} {:>13}", "timestep", "t", "Δt", "max|q|");
        }
    }

    /// Prints timestep data
    #[inline]
    pub fn print_timestep(&self, timestep: usize, t: f64, dt: f64, q_max: f64) {
        if !self.verbose {
            return;
        }
        println!("{:>8} {:>13.6e} {:>13.6e} {:>13.6e}", timestep + 1, t, dt, q_max);
    }

    /// Prints the final time and the number of timesteps
    #[inline]
    pub fn print_summary(&self, n_steps: usize, t: f64) {
        if self.verbose {
            println!("\nfinished after {} timesteps at t = {:.6e}", n_steps, t);
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Control::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
