use nbody2d::{step, Scenario, SimulationConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Number of frames to simulate
    #[arg(short = 'n', default_value_t = 600)]
    frames: u32,

    /// Also run the orbit predictor and report trail endpoints
    #[arg(long)]
    predict: bool,
}

// load here to keep main clean
fn load_config_from_yaml(file_name: &str) -> Result<SimulationConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let cfg: SimulationConfig = serde_yaml::from_reader(reader)?;

    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = load_config_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(cfg);

    for _ in 0..args.frames {
        step(&mut scenario.world, &scenario.gravity, scenario.dt);
    }

    println!("after {} frames:", args.frames);
    for (id, transform, body) in scenario.world.iter() {
        println!(
            "  body {:>3}: speed {:>10.3e} m/s at [{:>11.3e}; {:>11.3e}]",
            id.0,
            body.speed(),
            transform.position.x,
            transform.position.y
        );
    }

    if args.predict {
        let trails = scenario.predictor.predict(
            &scenario.world,
            scenario.prediction_iterations,
            scenario.prediction_dt,
        );

        println!("predicted trails ({} iterations):", scenario.prediction_iterations);
        let mut ids: Vec<_> = trails.keys().copied().collect();
        ids.sort();
        for id in ids {
            let trail = &trails[&id];
            if let Some(end) = trail.last() {
                println!(
                    "  body {:>3}: {} points, ends at [{:>11.3e}; {:>11.3e}]",
                    id.0,
                    trail.len(),
                    end.x,
                    end.y
                );
            }
        }
    }

    Ok(())
}
