use solsim::simulation::units;
use solsim::{bench_gravity, ScenarioConfig, SimulationState};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solsim", about = "Headless solar system simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a scenario and report diagnostics
    Run {
        /// Scenario file; relative names are looked up under `scenarios/`
        #[arg(short, long)]
        file_name: Option<String>,

        /// Number of frames to step
        #[arg(short, long, default_value_t = 3600)]
        steps: usize,

        /// Real seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,

        /// Time scale, clamped into the scenario's bounds
        #[arg(short, long)]
        time_scale: Option<f64>,

        /// Integrate in spatial mode
        #[arg(long, default_value_t = false)]
        spatial: bool,

        /// Log diagnostics every N frames (0 disables)
        #[arg(long, default_value_t = 600)]
        report_every: usize,
    },

    /// Time force accumulation and steps for a range of body counts
    Bench,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };

    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn run(sim: &mut SimulationState, steps: usize, dt: f64, report_every: usize) {
    let e0 = sim.total_energy();
    info!(bodies = sim.body_count(), energy = e0, spatial = sim.is_spatial_mode(), time_scale = sim.time_scale(), "starting run");

    for i in 1..=steps {
        sim.step(dt);

        if report_every > 0 && i % report_every == 0 {
            let com = sim.center_of_mass();
            let energy = sim.total_energy();
            let drift = units::relative_drift(e0, energy);
            info!(
                step = i,
                days = sim.elapsed() / units::SECONDS_PER_DAY,
                energy,
                drift,
                com_x = com.x,
                com_y = com.y,
                com_z = com.z,
                "progress"
            );
        }
    }

    println!("{:<10} {:>12} {:>12} {:>12} {:>14}", "name", "x", "y", "z", "speed (m/s)");
    for b in sim.bodies() {
        let speed = units::display_to_velocity(b.v.norm());
        println!("{:<10} {:>12.4} {:>12.4} {:>12.4} {:>14.1}", b.name(), b.x.x, b.x.y, b.x.z, speed);
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run { file_name, steps, dt, time_scale, spatial, report_every } => {
            let cfg = load_scenario(file_name.as_deref())?;
            let mut sim = SimulationState::from_config(&cfg);
            if let Some(ts) = time_scale {
                sim.set_time_scale(ts);
            }
            if spatial {
                sim.set_spatial_mode(true);
            }
            run(&mut sim, steps, dt, report_every);
        }
        Command::Bench => bench_gravity(),
    }

    Ok(())
}
