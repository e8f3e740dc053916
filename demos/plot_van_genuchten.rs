use plotpy::{Curve, Plot};
use richsim::prelude::*;
use std::path::Path;

const OUT_DIR: &str = "/tmp/richsim/demos";

fn main() -> Result<(), StrError> {
    // model
    let model = ModelVanGenuchten::new();

    // soils
    let soils = [
        ("simple", SampleParams::param_soil_simple()),
        ("loam", SampleParams::param_soil_loam()),
        ("sand", SampleParams::param_soil_sand()),
    ];

    // suction axis (log-spaced from 1e-3 to 1e2)
    let npoint = 101;
    let suction: Vec<f64> = (0..npoint)
        .map(|i| f64::powf(10.0, -3.0 + 5.0 * (i as f64) / ((npoint - 1) as f64)))
        .collect();

    // curves
    let mut plot_theta = Plot::new();
    let mut plot_k = Plot::new();
    for (name, p) in &soils {
        let theta: Vec<f64> = suction.iter().map(|s| model.theta(-s, p.ts, p.tr, p.alpha, p.n)).collect();
        let k: Vec<f64> = suction
            .iter()
            .map(|s| model.conductivity(-s, p.ks, p.alpha, p.n) / p.ks)
            .collect();
        let mut curve_theta = Curve::new();
        let mut curve_k = Curve::new();
        curve_theta.set_label(*name).draw(&suction, &theta);
        curve_k.set_label(*name).draw(&suction, &k);
        plot_theta.add(&curve_theta);
        plot_k.add(&curve_k);
    }
    plot_theta
        .set_log_x(true)
        .grid_and_labels("suction $-\\psi$", "water content $\\theta$")
        .legend();
    plot_k
        .set_log_x(true)
        .set_log_y(true)
        .grid_and_labels("suction $-\\psi$", "relative conductivity $K/K_s$")
        .legend();

    // save figures
    let path = Path::new(OUT_DIR).join("plot_van_genuchten_theta.svg");
    plot_theta.save(&path)?;
    let path = Path::new(OUT_DIR).join("plot_van_genuchten_conductivity.svg");
    plot_k.save(&path)?;
    Ok(())
}
