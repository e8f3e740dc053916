use serde::{Deserialize, Serialize};

/// Holds the van Genuchten parameters of one soil type
///
/// The exponent `m = 1 - 1/n` is derived from `n` (Mualem's restriction).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamSoil {
    /// Saturated hydraulic conductivity
    pub ks: f64,

    /// α parameter (inverse of the air-entry pressure head)
    pub alpha: f64,

    /// n parameter (pore-size distribution index)
    pub n: f64,

    /// Saturated volumetric water content θs
    pub ts: f64,

    /// Residual volumetric water content θr
    pub tr: f64,
}

impl ParamSoil {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.ks > 0.0) || !self.ks.is_finite() {
            return Some(format!("ks = {:?} is incorrect; it must be > 0.0", self.ks));
        }
        if !(self.alpha > 0.0) || !self.alpha.is_finite() {
            return Some(format!("alpha = {:?} is incorrect; it must be > 0.0", self.alpha));
        }
        if !(self.n > 1.0) || !self.n.is_finite() {
            return Some(format!("n = {:?} is incorrect; it must be > 1.0", self.n));
        }
        if !(self.tr >= 0.0) {
            return Some(format!("tr = {:?} is incorrect; it must be ≥ 0.0", self.tr));
        }
        if !(self.ts > self.tr) || self.ts > 1.0 {
            return Some(format!(
                "ts = {:?} is incorrect; it must satisfy tr = {:?} < ts ≤ 1.0",
                self.ts, self.tr
            ));
        }
        None // all good
    }

    /// Returns the van Genuchten exponent m = 1 - 1/n
    pub fn m(&self) -> f64 {
        1.0 - 1.0 / self.n
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
