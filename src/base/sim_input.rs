use super::{Control, ParamSoil, SoilColumn};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds all input data of a simulation
///
/// The JSON representation looks like this:
///
/// ```text
/// {
///   "end_time": 1.0,
///   "z": [0.0, -0.1, -0.2],
///   "soil_ids": [0, 0, 1],
///   "soils": [{"ks": 1e-5, "alpha": 1.0, "n": 2.0, "ts": 0.4, "tr": 0.05}, ...],
///   "psi_ini": [-0.5, -0.5, -0.5],
///   "control": {"courant": 0.05}
/// }
/// ```
///
/// The `control` entry and any of its fields may be omitted.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimInput {
    /// Requested end time (≥ 0)
    pub end_time: f64,

    /// Node coordinates (strictly monotonic; the first node is the top)
    pub z: Vec<f64>,

    /// Soil index of each node
    pub soil_ids: Vec<usize>,

    /// Soil parameter table
    pub soils: Vec<ParamSoil>,

    /// Initial pressure head at each node
    pub psi_ini: Vec<f64>,

    /// Time-loop options
    #[serde(default)]
    pub control: Control,
}

impl SimInput {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !self.end_time.is_finite() || self.end_time < 0.0 {
            return Some(format!(
                "end_time = {:?} is incorrect; it must be finite and ≥ 0.0",
                self.end_time
            ));
        }
        if self.psi_ini.len() != self.z.len() {
            return Some(format!(
                "psi_ini.len() = {} is incorrect; it must equal z.len() = {}",
                self.psi_ini.len(),
                self.z.len()
            ));
        }
        if self.soil_ids.len() != self.z.len() {
            return Some(format!(
                "soil_ids.len() = {} is incorrect; it must equal z.len() = {}",
                self.soil_ids.len(),
                self.z.len()
            ));
        }
        for (i, id) in self.soil_ids.iter().enumerate() {
            if *id >= self.soils.len() {
                return Some(format!(
                    "soil_ids[{}] = {} is incorrect; it must be < soils.len() = {}",
                    i,
                    id,
                    self.soils.len()
                ));
            }
        }
        for soil in &self.soils {
            if let Some(msg) = soil.validate() {
                return Some(msg);
            }
        }
        self.control.validate()
    }

    /// Allocates the soil column
    pub fn column(&self) -> Result<SoilColumn, StrError> {
        SoilColumn::new(&self.z, &self.soil_ids, &self.soils)
    }

    /// Returns the initial pressure head as a vector
    pub fn psi_ini_vector(&self) -> Vector {
        let mut psi = Vector::new(self.psi_ini.len());
        psi.as_mut_data().copy_from_slice(&self.psi_ini);
        psi
    }

    /// Reads a JSON file containing the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let input: SimInput = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        if let Some(msg) = input.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot read input because validate() failed");
        }
        Ok(input)
    }

    /// Writes a JSON file with the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
