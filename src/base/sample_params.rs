use super::ParamSoil;

/// Holds samples of soil parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns a simple soil with ks = 1e-5, α = 1, n = 2, θs = 0.4, θr = 0.05
    pub fn param_soil_simple() -> ParamSoil {
        ParamSoil {
            ks: 1e-5,
            alpha: 1.0,
            n: 2.0,
            ts: 0.4,
            tr: 0.05,
        }
    }

    /// Returns parameters for a loam (Carsel and Parrish, 1988; SI units)
    pub fn param_soil_loam() -> ParamSoil {
        ParamSoil {
            ks: 2.89e-6, // m/s
            alpha: 3.6,  // 1/m
            n: 1.56,     // [-]
            ts: 0.43,    // [-]
            tr: 0.078,   // [-]
        }
    }

    /// Returns parameters for a sand (Carsel and Parrish, 1988; SI units)
    pub fn param_soil_sand() -> ParamSoil {
        ParamSoil {
            ks: 8.25e-5, // m/s
            alpha: 14.5, // 1/m
            n: 2.68,     // [-]
            ts: 0.43,    // [-]
            tr: 0.045,   // [-]
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
