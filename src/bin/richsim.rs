use richsim::prelude::*;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "richsim",
    about = "Solves the Richards equation in a soil column and writes the results to a JSON file"
)]
struct Options {
    /// Input JSON file
    input: String,

    /// Output JSON file (default: /tmp/richsim/results/<input stem>.json)
    output: Option<String>,

    /// Prints the timestep data
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    let output = match &options.output {
        Some(path) => path.clone(),
        None => {
            let stem = Path::new(&options.input)
                .file_stem()
                .ok_or("cannot get the stem of the input file")?;
            format!("{}/{}.json", DEFAULT_OUT_DIR, stem.to_string_lossy())
        }
    };

    // load data
    let mut input = SimInput::read_json(&options.input)?;
    if options.verbose {
        input.control.verbose = true;
    }
    let column = input.column()?;
    let psi_ini = input.psi_ini_vector();

    // solve
    let model = ModelVanGenuchten::new();
    let solver = SolverRichards::new(&column, &model, &input.control)?;
    let solution = solver.solve(input.end_time, &psi_ini)?;
    solution.write_json(&output)?;

    // storage
    let storage_ini = column.calc_storage(&model, &psi_ini)?;
    let storage_fin = column.calc_storage(&model, &solution.psi)?;

    // message
    let thin_line = format!("{:─^1$}", "", output.len().max(40));
    println!("\n\n{}", thin_line);
    println!("timesteps       = {}", solution.n_steps);
    println!("final time      = {:?}", solution.t);
    println!("initial storage = {:.6e}", storage_ini);
    println!("final storage   = {:.6e}", storage_fin);
    println!("results written to:");
    println!("{}", output);
    println!("{}\n\n", thin_line);
    Ok(())
}
