use super::{SampleParams, SoilColumn};

/// Returns a column with three nodes at z = [0, -0.01, -0.02] and the simple soil
///
/// **Note:** the explicit scheme is not stable on this fine grid for more than a single step.
#[allow(dead_code)]
pub(crate) fn sample_column_three_nodes() -> SoilColumn {
    let soil = SampleParams::param_soil_simple();
    SoilColumn::homogeneous(&[0.0, -0.01, -0.02], soil).unwrap()
}

/// Returns a column with eleven nodes from z = 0 to z = -1 and the simple soil
#[allow(dead_code)]
pub(crate) fn sample_column_eleven_nodes() -> SoilColumn {
    let soil = SampleParams::param_soil_simple();
    let z: Vec<f64> = (0..11).map(|i| -0.1 * (i as f64)).collect();
    SoilColumn::homogeneous(&z, soil).unwrap()
}
