use crate::StrError;
use russell_lab::Vector;

/// Holds the node elevations of a vertical soil column
///
/// The coordinates must be strictly monotonic, either increasing (elevation) or
/// decreasing (e.g., `[0, -0.01, -0.02]`, depth below the surface). The first node
/// is the top of the column and the last node is the bottom.
#[derive(Clone, Debug)]
pub struct VerticalGrid {
    /// Node coordinates (npoint)
    z: Vector,

    /// Signed node spacing Δz[i] = z[i+1] - z[i] (npoint - 1)
    dz: Vector,

    /// Minimum absolute node spacing
    dz_min: f64,
}

impl VerticalGrid {
    /// Allocates a new instance
    pub fn new(z: &[f64]) -> Result<Self, StrError> {
        let npoint = z.len();
        if npoint < 2 {
            return Err("the grid must have at least two nodes");
        }
        if z.iter().any(|v| !v.is_finite()) {
            return Err("the grid coordinates must be finite");
        }
        let mut dz = Vector::new(npoint - 1);
        for i in 0..(npoint - 1) {
            dz[i] = z[i + 1] - z[i];
        }
        let increasing = dz[0] > 0.0;
        let mut dz_min = f64::MAX;
        for i in 0..(npoint - 1) {
            if dz[i] == 0.0 || (dz[i] > 0.0) != increasing {
                return Err("the grid coordinates must be strictly monotonic");
            }
            dz_min = f64::min(dz_min, f64::abs(dz[i]));
        }
        let mut zz = Vector::new(npoint);
        zz.as_mut_data().copy_from_slice(z);
        Ok(VerticalGrid {
            z: zz,
            dz,
            dz_min,
        })
    }

    /// Allocates a grid with equally spaced nodes from z_top to z_bottom
    pub fn uniform(z_top: f64, z_bottom: f64, npoint: usize) -> Result<Self, StrError> {
        if npoint < 2 {
            return Err("the grid must have at least two nodes");
        }
        let step = (z_bottom - z_top) / ((npoint - 1) as f64);
        let z: Vec<f64> = (0..npoint).map(|i| z_top + (i as f64) * step).collect();
        VerticalGrid::new(&z)
    }

    /// Returns the number of nodes
    pub fn npoint(&self) -> usize {
        self.z.dim()
    }

    /// Returns the node coordinates
    pub fn z(&self) -> &Vector {
        &self.z
    }

    /// Returns the signed node spacing (npoint - 1)
    pub fn dz(&self) -> &Vector {
        &self.dz
    }

    /// Returns the minimum absolute node spacing
    pub fn min_spacing(&self) -> f64 {
        self.dz_min
    }

    /// Returns the total height of the column
    pub fn depth(&self) -> f64 {
        let n = self.z.dim();
        f64::abs(self.z[n - 1] - self.z[0])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
