use super::ModelConstitutive;
use crate::base::DEFAULT_C_MIN;
use crate::StrError;
use russell_lab::Vector;

/// Defines Mualem's pore-connectivity parameter
const PORE_CONNECTIVITY: f64 = 0.5;

/// Implements the van Genuchten–Mualem model for conductivity and liquid retention
///
/// With `x = α|ψ|`, `m = 1 - 1/n` and `ψ < 0` (unsaturated):
///
/// ```text
/// Se = (1 + xⁿ)⁻ᵐ
/// θ  = θr + (θs - θr) Se
/// K  = ks Se^l (1 - (1 - Se^(1/m))ᵐ)²
/// C  = dθ/dψ = (θs - θr) α n m xⁿ⁻¹ (1 + xⁿ)⁻ᵐ⁻¹
/// ```
///
/// For `ψ ≥ 0` (saturated), `Se = 1`, `K = ks`. The capacity is bounded below by `c_min`,
/// thus it never vanishes at saturation.
///
/// # References
///
/// * van Genuchten MTh (1980) A closed-form equation for predicting the hydraulic conductivity
///   of unsaturated soils. Soil Science Society of America Journal, 44(5), 892-898
/// * Mualem Y (1976) A new model for predicting the hydraulic conductivity of unsaturated
///   porous media. Water Resources Research, 12(3), 513-522
#[derive(Clone, Copy, Debug)]
pub struct ModelVanGenuchten {
    // parameters
    c_min: f64, // minimum capacity
    l: f64,     // pore-connectivity parameter
}

impl ModelVanGenuchten {
    /// Allocates a new instance with c_min = 1e-8
    pub fn new() -> Self {
        ModelVanGenuchten {
            c_min: DEFAULT_C_MIN,
            l: PORE_CONNECTIVITY,
        }
    }

    /// Allocates a new instance with a given minimum capacity
    pub fn with_c_min(c_min: f64) -> Result<Self, StrError> {
        if !(c_min > 0.0) || !c_min.is_finite() {
            return Err("c_min parameter for the van Genuchten model is invalid");
        }
        Ok(ModelVanGenuchten {
            c_min,
            l: PORE_CONNECTIVITY,
        })
    }

    /// Returns the minimum capacity
    pub fn c_min(&self) -> f64 {
        self.c_min
    }

    /// Calculates the effective saturation Se(ψ)
    pub fn saturation(&self, psi: f64, alpha: f64, n: f64) -> f64 {
        if psi >= 0.0 {
            return 1.0;
        }
        let m = 1.0 - 1.0 / n;
        let v = 1.0 + f64::powf(alpha * f64::abs(psi), n);
        f64::powf(v, -m)
    }

    /// Calculates the volumetric water content θ(ψ)
    pub fn theta(&self, psi: f64, ts: f64, tr: f64, alpha: f64, n: f64) -> f64 {
        tr + (ts - tr) * self.saturation(psi, alpha, n)
    }

    /// Calculates the unsaturated conductivity K(ψ)
    pub fn conductivity(&self, psi: f64, ks: f64, alpha: f64, n: f64) -> f64 {
        if psi >= 0.0 {
            return ks;
        }
        let m = 1.0 - 1.0 / n;
        let v = 1.0 + f64::powf(alpha * f64::abs(psi), n);
        let se_l = f64::powf(v, -m * self.l);
        let b = 1.0 - f64::powf(1.0 - 1.0 / v, m); // Se^(1/m) = 1/v
        ks * se_l * b * b
    }

    /// Calculates the specific moisture capacity C(ψ) = dθ/dψ
    pub fn capacity(&self, psi: f64, ts: f64, tr: f64, alpha: f64, n: f64) -> f64 {
        if psi >= 0.0 {
            return self.c_min;
        }
        let m = 1.0 - 1.0 / n;
        let x = alpha * f64::abs(psi);
        let v = 1.0 + f64::powf(x, n);
        let c = (ts - tr) * alpha * n * m * f64::powf(x, n - 1.0) * f64::powf(v, -m - 1.0);
        f64::max(c, self.c_min)
    }

    /// Calculates the effective saturation corresponding to a water content
    ///
    /// The result is clipped to [0, 1].
    pub fn saturation_from_theta(&self, theta: f64, ts: f64, tr: f64) -> f64 {
        let se = (theta - tr) / (ts - tr);
        f64::min(f64::max(se, 0.0), 1.0)
    }

    /// Calculates the pressure head corresponding to a water content (inverse retention curve)
    ///
    /// Returns zero if θ ≥ θs.
    pub fn psi_from_theta(&self, theta: f64, ts: f64, tr: f64, alpha: f64, n: f64) -> Result<f64, StrError> {
        if !theta.is_finite() {
            return Err("theta must be finite");
        }
        if theta <= tr {
            return Err("theta must be greater than the residual water content");
        }
        if theta >= ts {
            return Ok(0.0);
        }
        let m = 1.0 - 1.0 / n;
        let se = (theta - tr) / (ts - tr);
        let x = f64::powf(f64::powf(se, -1.0 / m) - 1.0, 1.0 / n);
        Ok(-x / alpha)
    }
}

impl ModelConstitutive for ModelVanGenuchten {
    fn calc_conductivity(&self, k: &mut Vector, psi: &Vector, ks: &Vector, alpha: &Vector, n: &Vector) {
        for i in 0..psi.dim() {
            k[i] = self.conductivity(psi[i], ks[i], alpha[i], n[i]);
        }
    }

    fn calc_capacity(&self, c: &mut Vector, psi: &Vector, ts: &Vector, tr: &Vector, alpha: &Vector, n: &Vector) {
        for i in 0..psi.dim() {
            c[i] = self.capacity(psi[i], ts[i], tr[i], alpha[i], n[i]);
        }
    }

    fn calc_water_content(
        &self,
        theta: &mut Vector,
        psi: &Vector,
        ts: &Vector,
        tr: &Vector,
        alpha: &Vector,
        n: &Vector,
    ) {
        for i in 0..psi.dim() {
            theta[i] = self.theta(psi[i], ts[i], tr[i], alpha[i], n[i]);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
