use super::{ParamSoil, VerticalGrid};
use crate::models::ModelConstitutive;
use crate::StrError;
use russell_lab::Vector;

/// Holds the soil parameters gathered at each node of the column
#[derive(Clone, Debug)]
pub struct NodalParams {
    /// Saturated hydraulic conductivity (npoint)
    pub ks: Vector,

    /// α parameter (npoint)
    pub alpha: Vector,

    /// n parameter (npoint)
    pub n: Vector,

    /// Saturated volumetric water content (npoint)
    pub ts: Vector,

    /// Residual volumetric water content (npoint)
    pub tr: Vector,
}

/// Holds the grid, the soil assignment, and the soil parameter table of a column
///
/// All data is immutable after construction.
#[derive(Clone, Debug)]
pub struct SoilColumn {
    /// Node coordinates
    grid: VerticalGrid,

    /// Soil index of each node (npoint)
    soil_ids: Vec<usize>,

    /// Soil parameter table
    soils: Vec<ParamSoil>,

    /// Parameters at each node
    params: NodalParams,
}

impl SoilColumn {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `z` -- node coordinates (strictly monotonic; the first node is the top)
    /// * `soil_ids` -- soil index (into `soils`) of each node
    /// * `soils` -- soil parameter table
    pub fn new(z: &[f64], soil_ids: &[usize], soils: &[ParamSoil]) -> Result<Self, StrError> {
        let grid = VerticalGrid::new(z)?;
        let npoint = grid.npoint();
        if soil_ids.len() != npoint {
            return Err("soil_ids.len() must equal the number of grid nodes");
        }
        if soils.is_empty() {
            return Err("the soil parameter table must not be empty");
        }
        for soil in soils {
            if let Some(msg) = soil.validate() {
                println!("ERROR: {}", msg);
                return Err("cannot allocate column because soil.validate() failed");
            }
        }
        let mut params = NodalParams {
            ks: Vector::new(npoint),
            alpha: Vector::new(npoint),
            n: Vector::new(npoint),
            ts: Vector::new(npoint),
            tr: Vector::new(npoint),
        };
        for (i, id) in soil_ids.iter().enumerate() {
            let soil = soils.get(*id).ok_or("soil index is out of range")?;
            params.ks[i] = soil.ks;
            params.alpha[i] = soil.alpha;
            params.n[i] = soil.n;
            params.ts[i] = soil.ts;
            params.tr[i] = soil.tr;
        }
        Ok(SoilColumn {
            grid,
            soil_ids: soil_ids.to_vec(),
            soils: soils.to_vec(),
            params,
        })
    }

    /// Allocates a column with a single soil type
    pub fn homogeneous(z: &[f64], soil: ParamSoil) -> Result<Self, StrError> {
        let soil_ids = vec![0; z.len()];
        SoilColumn::new(z, &soil_ids, &[soil])
    }

    /// Returns the number of nodes
    pub fn npoint(&self) -> usize {
        self.grid.npoint()
    }

    /// Returns the grid
    pub fn grid(&self) -> &VerticalGrid {
        &self.grid
    }

    /// Returns the soil index of each node
    pub fn soil_ids(&self) -> &[usize] {
        &self.soil_ids
    }

    /// Returns the soil parameter table
    pub fn soils(&self) -> &[ParamSoil] {
        &self.soils
    }

    /// Returns the soil parameters at each node
    pub fn params(&self) -> &NodalParams {
        &self.params
    }

    /// Calculates the volumetric water content at each node
    pub fn calc_theta(&self, model: &dyn ModelConstitutive, psi: &Vector) -> Result<Vector, StrError> {
        if psi.dim() != self.npoint() {
            return Err("psi.dim() must equal the number of grid nodes");
        }
        let p = &self.params;
        let mut theta = Vector::new(self.npoint());
        model.calc_water_content(&mut theta, psi, &p.ts, &p.tr, &p.alpha, &p.n);
        Ok(theta)
    }

    /// Calculates the water stored in the column (trapezoidal rule over the nodes)
    pub fn calc_storage(&self, model: &dyn ModelConstitutive, psi: &Vector) -> Result<f64, StrError> {
        let theta = self.calc_theta(model, psi)?;
        let dz = self.grid.dz();
        let mut storage = 0.0;
        for i in 0..dz.dim() {
            storage += 0.5 * (theta[i] + theta[i + 1]) * f64::abs(dz[i]);
        }
        Ok(storage)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SoilColumn;
    use crate::base::{ParamSoil, SampleParams};
    use crate::models::ModelVanGenuchten;
    use russell_lab::{approx_eq, vec_approx_eq, Vector};

    #[test]
    fn new_captures_errors() {
        let soil = SampleParams::param_soil_simple();
        assert_eq!(
            SoilColumn::new(&[0.0], &[0], &[soil]).err(),
            Some("the grid must have at least two nodes")
        );
        assert_eq!(
            SoilColumn::new(&[0.0, -1.0], &[0], &[soil]).err(),
            Some("soil_ids.len() must equal the number of grid nodes")
        );
        assert_eq!(
            SoilColumn::new(&[0.0, -1.0], &[0, 0], &[]).err(),
            Some("the soil parameter table must not be empty")
        );
        assert_eq!(
            SoilColumn::new(&[0.0, -1.0], &[0, 1], &[soil]).err(),
            Some("soil index is out of range")
        );
        let wrong = ParamSoil { ks: -1.0, ..soil };
        assert_eq!(
            SoilColumn::new(&[0.0, -1.0], &[0, 0], &[wrong]).err(),
            Some("cannot allocate column because soil.validate() failed")
        );
    }

    #[test]
    fn new_works() {
        let loam = SampleParams::param_soil_loam();
        let sand = SampleParams::param_soil_sand();
        let column = SoilColumn::new(&[0.0, -0.5, -1.0], &[1, 1, 0], &[loam, sand]).unwrap();
        assert_eq!(column.npoint(), 3);
        assert_eq!(column.soil_ids(), &[1, 1, 0]);
        assert_eq!(column.soils().len(), 2);
        let p = column.params();
        vec_approx_eq(&p.ks, &[sand.ks, sand.ks, loam.ks], 1e-15);
        vec_approx_eq(&p.alpha, &[sand.alpha, sand.alpha, loam.alpha], 1e-15);
        vec_approx_eq(&p.n, &[sand.n, sand.n, loam.n], 1e-15);
        vec_approx_eq(&p.ts, &[sand.ts, sand.ts, loam.ts], 1e-15);
        vec_approx_eq(&p.tr, &[sand.tr, sand.tr, loam.tr], 1e-15);
    }

    #[test]
    fn calc_storage_works() {
        let soil = SampleParams::param_soil_simple();
        let column = SoilColumn::homogeneous(&[0.0, -0.5, -1.0], soil).unwrap();
        let model = ModelVanGenuchten::new();

        // saturated column holds ts · depth
        let psi = Vector::from(&[0.0, 0.5, 1.0]);
        let theta = column.calc_theta(&model, &psi).unwrap();
        vec_approx_eq(&theta, &[0.4, 0.4, 0.4], 1e-15);
        approx_eq(column.calc_storage(&model, &psi).unwrap(), 0.4, 1e-15);

        // wrong dimension
        let psi = Vector::from(&[0.0, 0.5]);
        assert_eq!(
            column.calc_storage(&model, &psi).err(),
            Some("psi.dim() must equal the number of grid nodes")
        );
    }
}
