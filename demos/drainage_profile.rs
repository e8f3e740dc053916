use plotpy::{Curve, Plot};
use richsim::prelude::*;
use russell_lab::Vector;
use std::path::Path;

const OUT_DIR: &str = "/tmp/richsim/demos";

fn main() -> Result<(), StrError> {
    // column: 1 m of the simple soil discretized with 11 nodes
    let npoint = 11;
    let z: Vec<f64> = (0..npoint).map(|i| -0.1 * (i as f64)).collect();
    let column = SoilColumn::homogeneous(&z, SampleParams::param_soil_simple())?;

    // initial state: uniform pressure head
    let mut psi_ini = Vector::new(npoint);
    psi_ini.fill(-0.5);

    // solver
    let model = ModelVanGenuchten::new();
    let mut control = Control::new();
    control.dt_out = Some(2.5);
    control.verbose = true;
    let solver = SolverRichards::new(&column, &model, &control)?;
    let solution = solver.solve(10.0, &psi_ini)?;

    // storage
    let storage_ini = column.calc_storage(&model, &psi_ini)?;
    let storage_fin = column.calc_storage(&model, &solution.psi)?;
    println!("\nstorage: initial = {:.6e}, final = {:.6e}", storage_ini, storage_fin);

    // curves
    let mut plot = Plot::new();
    for (t, psi) in solution.times.iter().zip(solution.profiles.iter()) {
        let mut curve = Curve::new();
        curve
            .set_label(&format!("t = {:.2}", t))
            .set_marker_style("o")
            .draw(&psi.as_data().to_vec(), &z);
        plot.add(&curve);
    }
    plot.grid_and_labels("pressure head $\\psi$", "elevation $z$").legend();

    // save figure
    let path = Path::new(OUT_DIR).join("drainage_profile.svg");
    plot.save(&path)?;
    Ok(())
}
