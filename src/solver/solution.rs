use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of a solve
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solution {
    /// Elapsed time at the end of the solve (may overshoot the requested end time by one step)
    pub t: f64,

    /// Number of accepted timesteps
    pub n_steps: usize,

    /// Pressure head at the end of the solve (npoint)
    pub psi: Vector,

    /// Times of the recorded snapshots
    pub times: Vec<f64>,

    /// Recorded pressure head profiles (one per entry in `times`)
    pub profiles: Vec<Vector>,
}

impl Solution {
    /// Allocates a new instance at t = 0
    ///
    /// The initial profile is recorded if `recording` is true.
    pub fn new(psi_ini: &Vector, recording: bool) -> Self {
        let mut solution = Solution {
            t: 0.0,
            n_steps: 0,
            psi: psi_ini.clone(),
            times: Vec::new(),
            profiles: Vec::new(),
        };
        if recording {
            solution.record(0.0, psi_ini);
        }
        solution
    }

    /// Records a snapshot of the pressure head
    pub fn record(&mut self, t: f64, psi: &Vector) {
        self.times.push(t);
        self.profiles.push(psi.clone());
    }

    /// Reads a JSON file containing the results
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
        let solution = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(solution)
    }

    /// Writes a JSON file with the results
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
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
