use orbmech::{build_scenario, KeplerSolver, PhaseCounts, ScenarioConfig, TransferSpec};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "inner_planets.yaml")]
    file_name: String,

    /// Number of integration steps to run
    #[arg(short, default_value_t = 1000)]
    n_steps: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let transfer_cfg = scenario_cfg.transfer.clone();

    let mut integrator = build_scenario(scenario_cfg)?;

    // Renderer feed: one CSV row per body per step
    println!("step,time_s,body,x_m,y_m,vx_mps,vy_mps");
    for _ in 0..args.n_steps {
        integrator.step()?;
        for state in integrator.snapshot() {
            println!(
                "{},{},{},{:e},{:e},{:e},{:e}",
                integrator.step_count(),
                integrator.time(),
                state.name,
                state.position.x,
                state.position.y,
                state.velocity.x,
                state.velocity.y,
            );
        }
    }

    // Optional Hohmann-transfer planning block
    if let Some(t) = transfer_cfg {
        let spec = TransferSpec::plan(t.r1, t.r2, t.mu)?;
        let counts = PhaseCounts {
            departure: t.samples[0],
            transfer: t.samples[1],
            arrival: t.samples[2],
        };
        let trajectory = spec.sample_trajectory(counts, &KeplerSolver::default())?;

        println!("dv1 = {:.3} km/s", spec.dv1 / 1000.0);
        println!("dv2 = {:.3} km/s", spec.dv2 / 1000.0);
        println!("total dv = {:.3} km/s", spec.dv_total() / 1000.0);
        println!("transfer time = {:.1} s", spec.t_transfer);
        println!("trajectory samples = {}", trajectory.len());
    }

    Ok(())
}
