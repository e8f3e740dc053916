use super::{calc_darcy_flux, calc_euler_update, calc_time_step, Solution};
use crate::base::{Control, SoilColumn};
use crate::models::{ModelConstitutive, ModelVanGenuchten};
use crate::StrError;
use russell_lab::{vec_norm, Norm, Vector};

/// Implements the adaptive explicit solver for the Richards equation in a soil column
///
/// Each timestep is a modified midpoint (predictor-corrector) step:
///
/// 1. Evaluate `k(ψ)`, `c(ψ)`, and `q(ψ)`
/// 2. Select `Δt = min(dt_max, courant · min|Δz| / max|q|)` (or `dt_max` if all fluxes are zero)
/// 3. Predictor: `ψ* = euler(ψ, c, q, Δt/2)`
/// 4. Re-evaluate `k(ψ*)`, `c(ψ*)`, and `q(ψ*)`
/// 5. Corrector: `ψ = euler(ψ*, c*, q*, Δt)`, starting from the predicted state
///
/// The loop stops as soon as the elapsed time reaches the requested end time; thus, the
/// final time may overshoot by at most one step.
///
/// **Note:** This is a reference integrator. There is no step rejection, damping, or retry.
/// NaN or Inf values in the state or in the material response abort the solve with an error.
pub struct SolverRichards<'a> {
    /// Holds the grid and soil data
    column: &'a SoilColumn,

    /// Holds the constitutive model
    model: &'a dyn ModelConstitutive,

    /// Holds the time-loop options
    control: &'a Control,
}

/// Holds the material response and fluxes at one stage of a step
struct Stage {
    /// Conductivity (npoint)
    k: Vector,

    /// Capacity (npoint)
    c: Vector,

    /// Face fluxes (npoint - 1)
    q: Vector,
}

impl<'a> SolverRichards<'a> {
    /// Allocates a new instance
    pub fn new(column: &'a SoilColumn, model: &'a dyn ModelConstitutive, control: &'a Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        Ok(SolverRichards { column, model, control })
    }

    /// Advances the pressure head from t = 0 to (at least) end_time
    ///
    /// # Input
    ///
    /// * `end_time` -- requested end time (≥ 0); zero means no steps
    /// * `psi_ini` -- initial pressure head (npoint)
    pub fn solve(&self, end_time: f64, psi_ini: &Vector) -> Result<Solution, StrError> {
        // check
        let npoint = self.column.npoint();
        if !end_time.is_finite() || end_time < 0.0 {
            return Err("end_time must be finite and ≥ 0.0");
        }
        if psi_ini.dim() != npoint {
            return Err("psi_ini.dim() must equal the number of grid nodes");
        }
        if psi_ini.as_data().iter().any(|v| !v.is_finite()) {
            return Err("psi_ini must be finite");
        }

        // constants
        let grid = self.column.grid();
        let dz = grid.dz();
        let dz_min = grid.min_spacing();
        let (qb_u, qb_l) = (self.control.q_upper, self.control.q_lower);

        // state and auxiliary arrays
        let mut psi = psi_ini.clone();
        let mut psi_star = Vector::new(npoint);
        let mut psi_new = Vector::new(npoint);
        let mut stage = Stage {
            k: Vector::new(npoint),
            c: Vector::new(npoint),
            q: Vector::new(npoint - 1),
        };

        // output
        let mut solution = Solution::new(psi_ini, self.control.dt_out.is_some());
        let mut t_out = self.control.dt_out.unwrap_or(f64::MAX);

        // time loop
        let mut t = 0.0;
        let mut n_steps = 0;
        self.control.print_header();
        while t < end_time {
            if let Some(n_max) = self.control.n_max_time_steps {
                if n_steps >= n_max {
                    return Err("the maximum number of time steps has been reached");
                }
            }

            // evaluate and select the time increment
            self.evaluate(&mut stage, &psi)?;
            let dt = calc_time_step(&stage.q, dz_min, self.control)?;
            self.control.print_timestep(n_steps, t, dt, vec_norm(&stage.q, Norm::Max));

            // predictor
            calc_euler_update(&mut psi_star, &psi, &stage.c, &stage.q, qb_u, qb_l, 0.5 * dt, dz);
            check_state(&psi_star)?;

            // corrector
            self.evaluate(&mut stage, &psi_star)?;
            calc_euler_update(&mut psi_new, &psi_star, &stage.c, &stage.q, qb_u, qb_l, dt, dz);
            check_state(&psi_new)?;

            // commit
            std::mem::swap(&mut psi, &mut psi_new);
            t += dt;
            n_steps += 1;

            // record snapshots
            if let Some(dt_out) = self.control.dt_out {
                if t >= t_out {
                    solution.record(t, &psi);
                    while t_out <= t {
                        t_out += dt_out;
                    }
                }
            }
        }
        self.control.print_summary(n_steps, t);

        // record the final state if it has not been recorded yet
        if self.control.dt_out.is_some() && solution.times.last() != Some(&t) {
            solution.record(t, &psi);
        }
        solution.t = t;
        solution.n_steps = n_steps;
        solution.psi = psi;
        Ok(solution)
    }

    /// Calculates the conductivity, capacity, and face fluxes for a given pressure head
    fn evaluate(&self, stage: &mut Stage, psi: &Vector) -> Result<(), StrError> {
        let p = self.column.params();
        self.model.calc_conductivity(&mut stage.k, psi, &p.ks, &p.alpha, &p.n);
        self.model.calc_capacity(&mut stage.c, psi, &p.ts, &p.tr, &p.alpha, &p.n);
        if stage.k.as_data().iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err("the conductivity must be finite and non-negative");
        }
        if stage.c.as_data().iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("the capacity must be finite and positive");
        }
        calc_darcy_flux(&mut stage.q, psi, self.column.grid().z(), &stage.k);
        Ok(())
    }
}

/// Checks whether the pressure head contains NaN or Inf values
fn check_state(psi: &Vector) -> Result<(), StrError> {
    if psi.as_data().iter().any(|v| !v.is_finite()) {
        return Err("found NaN or Inf in the pressure head");
    }
    Ok(())
}

/// Solves the Richards equation with the van Genuchten–Mualem model and default control options
///
/// Returns the pressure head at (or just past) `end_time`.
pub fn solve(end_time: f64, psi_ini: &Vector, column: &SoilColumn) -> Result<Vector, StrError> {
    let model = ModelVanGenuchten::new();
    let control = Control::new();
    let solver = SolverRichards::new(column, &model, &control)?;
    let solution = solver.solve(end_time, psi_ini)?;
    Ok(solution.psi)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{solve, SolverRichards};
    use crate::base::{sample_column_eleven_nodes, sample_column_three_nodes, Control, SampleParams, SoilColumn};
    use crate::models::{ModelConstitutive, ModelVanGenuchten};
    use crate::solver::{calc_time_step, darcy, euler};
    use russell_lab::{approx_eq, vec_approx_eq, Vector};

    /// Returns a constant conductivity and capacity, regardless of the pressure head
    struct ModelConstant {
        k: f64,
        c: f64,
    }

    impl ModelConstitutive for ModelConstant {
        fn calc_conductivity(&self, k: &mut Vector, _: &Vector, _: &Vector, _: &Vector, _: &Vector) {
            k.fill(self.k);
        }
        fn calc_capacity(&self, c: &mut Vector, _: &Vector, _: &Vector, _: &Vector, _: &Vector, _: &Vector) {
            c.fill(self.c);
        }
        fn calc_water_content(&self, theta: &mut Vector, _: &Vector, _: &Vector, _: &Vector, _: &Vector, _: &Vector) {
            theta.fill(0.3);
        }
    }

    #[test]
    fn new_captures_errors() {
        let column = sample_column_three_nodes();
        let model = ModelVanGenuchten::new();
        let mut control = Control::new();
        control.dt_max = 0.0;
        assert_eq!(
            SolverRichards::new(&column, &model, &control).err(),
            Some("cannot allocate solver because control.validate() failed")
        );
    }

    #[test]
    fn solve_captures_errors() {
        let column = sample_column_three_nodes();
        let model = ModelVanGenuchten::new();
        let control = Control::new();
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let psi = Vector::from(&[-0.5, -0.5, -0.5]);
        assert_eq!(
            solver.solve(-1.0, &psi).err(),
            Some("end_time must be finite and ≥ 0.0")
        );
        assert_eq!(
            solver.solve(f64::NAN, &psi).err(),
            Some("end_time must be finite and ≥ 0.0")
        );
        assert_eq!(
            solver.solve(1.0, &Vector::from(&[-0.5, -0.5])).err(),
            Some("psi_ini.dim() must equal the number of grid nodes")
        );
        assert_eq!(
            solver.solve(1.0, &Vector::from(&[-0.5, f64::NAN, -0.5])).err(),
            Some("psi_ini must be finite")
        );
    }

    #[test]
    fn invalid_material_response_is_captured() {
        let column = sample_column_three_nodes();
        let control = Control::new();
        let psi = Vector::from(&[-0.5, -0.5, -0.5]);

        let model = ModelConstant { k: -1.0, c: 1.0 };
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        assert_eq!(
            solver.solve(1.0, &psi).err(),
            Some("the conductivity must be finite and non-negative")
        );

        let model = ModelConstant { k: 1.0, c: 0.0 };
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        assert_eq!(
            solver.solve(1.0, &psi).err(),
            Some("the capacity must be finite and positive")
        );

        let model = ModelConstant { k: f64::NAN, c: 1.0 };
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        assert_eq!(
            solver.solve(1.0, &psi).err(),
            Some("the conductivity must be finite and non-negative")
        );
    }

    #[test]
    fn blow_up_is_captured() {
        let column = sample_column_three_nodes();
        let control = Control::new();
        let psi = Vector::from(&[-0.5, -0.5, -0.5]);

        // √(k k) overflows
        let model = ModelConstant { k: 1e300, c: 1.0 };
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        assert_eq!(
            solver.solve(1.0, &psi).err(),
            Some("found NaN or Inf in the flux field")
        );

        // a tiny capacity makes the explicit update overflow
        let model = ModelConstant { k: 1.0, c: 1e-300 };
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        assert_eq!(
            solver.solve(1.0, &psi).err(),
            Some("found NaN or Inf in the pressure head")
        );
    }

    #[test]
    fn step_budget_is_enforced() {
        let column = sample_column_eleven_nodes();
        let model = ModelVanGenuchten::new();
        let mut control = Control::new();
        control.n_max_time_steps = Some(3);
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let psi = Vector::filled(11, -0.5);
        assert_eq!(
            solver.solve(100.0, &psi).err(),
            Some("the maximum number of time steps has been reached")
        );
    }

    #[test]
    fn zero_duration_is_a_no_op() {
        let column = sample_column_three_nodes();
        let psi = Vector::from(&[-0.5, -0.5, -0.5]);
        let res = solve(0.0, &psi, &column).unwrap();
        assert_eq!(res.as_data(), psi.as_data());

        let model = ModelVanGenuchten::new();
        let control = Control::new();
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let solution = solver.solve(0.0, &psi).unwrap();
        assert_eq!(solution.t, 0.0);
        assert_eq!(solution.n_steps, 0);
    }

    #[test]
    fn single_step_matches_manual_calculation() {
        // one step with Δt = dt_max (the fluxes are small)
        let column = sample_column_three_nodes();
        let p = column.params();
        let z = column.grid().z();
        let model = ModelVanGenuchten::new();
        let control = Control::new();
        let psi = Vector::from(&[-0.5, -0.6, -0.7]);

        let mut k = Vector::new(3);
        let mut c = Vector::new(3);
        model.calc_conductivity(&mut k, &psi, &p.ks, &p.alpha, &p.n);
        model.calc_capacity(&mut c, &psi, &p.ts, &p.tr, &p.alpha, &p.n);
        let q = darcy(&psi, z, &k);
        let dt = calc_time_step(&q, column.grid().min_spacing(), &control).unwrap();
        let psi_star = euler(&psi, &c, &q, 0.0, 0.0, 0.5 * dt, z);
        model.calc_conductivity(&mut k, &psi_star, &p.ks, &p.alpha, &p.n);
        model.calc_capacity(&mut c, &psi_star, &p.ts, &p.tr, &p.alpha, &p.n);
        let q = darcy(&psi_star, z, &k);
        let correct = euler(&psi_star, &c, &q, 0.0, 0.0, dt, z);

        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let solution = solver.solve(1e-3, &psi).unwrap();
        assert_eq!(solution.n_steps, 1);
        assert_eq!(solution.t, dt);
        vec_approx_eq(&solution.psi, &correct, 1e-15);
    }

    #[test]
    fn elapsed_time_overshoots_by_less_than_one_step() {
        let column = sample_column_eleven_nodes();
        let model = ModelVanGenuchten::new();
        let control = Control::new();
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let psi = Vector::filled(11, -0.5);
        for end_time in [0.01, 0.1, 0.25, 1.0] {
            let solution = solver.solve(end_time, &psi).unwrap();
            assert!(solution.t >= end_time);
            assert!(solution.t < end_time + 0.1);
            assert_eq!(solution.psi.dim(), 11);
        }
    }

    #[test]
    fn hydrostatic_column_remains_unchanged() {
        // φ = ψ + z = -1 everywhere → zero fluxes
        let soil = SampleParams::param_soil_simple();
        let z = [0.0, -0.25, -0.5, -0.75, -1.0];
        let column = SoilColumn::homogeneous(&z, soil).unwrap();
        let psi = Vector::from(&[-1.0, -0.75, -0.5, -0.25, 0.0]);
        let res = solve(2.0, &psi, &column).unwrap();
        vec_approx_eq(&res, &psi, 1e-12);
    }

    #[test]
    fn snapshots_are_recorded() {
        let column = sample_column_eleven_nodes();
        let model = ModelVanGenuchten::new();
        let mut control = Control::new();
        control.dt_out = Some(0.25);
        let solver = SolverRichards::new(&column, &model, &control).unwrap();
        let psi = Vector::filled(11, -0.5);
        let solution = solver.solve(1.0, &psi).unwrap();
        assert_eq!(solution.times.len(), solution.profiles.len());
        assert_eq!(solution.times[0], 0.0);
        vec_approx_eq(&solution.profiles[0], &psi, 1e-15);
        assert!(solution.times.len() >= 5);
        for i in 1..solution.times.len() {
            assert!(solution.times[i] > solution.times[i - 1]);
        }
        let last = solution.times.len() - 1;
        approx_eq(solution.times[last], solution.t, 1e-15);
        vec_approx_eq(&solution.profiles[last], &solution.psi, 1e-15);
    }
}
