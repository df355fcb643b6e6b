//! tokyo: isochrones around nine Tokyo neighbourhoods.
//!
//! Uses the offline speed-model oracle (transit at ~30 km/h with a 1.3 detour
//! factor and 5 minutes of waiting) so it runs without any API key.  Swap in a
//! real `TravelTimeOracle` to fit against a live distance-matrix service.
//!
//! Set `ISOCHRONE_CONFIG=path/to/config.json` to override the solve
//! configuration; missing fields keep their defaults.

mod locations;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use iso_core::{SolveConfig, TravelOptions};
use iso_oracle::{SpeedModelOracle, Throttled};
use iso_solver::{LogObserver, SolverBuilder, solve_locations};

// ── Constants ─────────────────────────────────────────────────────────────────

const ANGLES:            usize    = 20;
const MIN_CALL_INTERVAL: Duration = Duration::from_millis(20);
const WAIT_OVERHEAD_MIN: f64      = 5.0;

fn load_config() -> Result<SolveConfig> {
    match std::env::var_os("ISOCHRONE_CONFIG") {
        None => Ok(SolveConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.to_string_lossy()))?;
            let config: SolveConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.to_string_lossy()))?;
            Ok(config)
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "tolerance ±{} min, up to {} rounds, {} angles per location",
        config.tolerance_min,
        config.max_rounds,
        ANGLES
    );

    let oracle = Throttled::new(
        SpeedModelOracle { overhead_min: WAIT_OVERHEAD_MIN, ..SpeedModelOracle::default() },
        MIN_CALL_INTERVAL,
    );
    let solver = SolverBuilder::new(oracle)
        .config(config)
        .options(TravelOptions::default())
        .build()?;

    let started = Instant::now();
    let outcomes = solve_locations(
        &locations::geocoder(),
        &solver,
        &locations::queries(ANGLES),
        &mut LogObserver::default(),
    );

    println!();
    println!("{:<14} {:<17} {:>6} {:>10}", "Location", "Outcome", "Rounds", "Mean km");
    println!("{}", "-".repeat(50));
    for out in &outcomes {
        match &out.result {
            Ok(sol) => {
                let mean = sol.radii_km.iter().sum::<f64>() / sol.radii_km.len() as f64;
                println!(
                    "{:<14} {:<17} {:>6} {:>10.2}",
                    out.name,
                    sol.termination.to_string(),
                    sol.termination.rounds(),
                    mean
                );
            }
            Err(e) => println!("{:<14} error: {e}", out.name),
        }
    }
    println!();

    for out in &outcomes {
        if let Ok(sol) = &out.result {
            println!("{} around {}:", out.name, sol.polygon.origin());
            for v in sol.polygon.vertices() {
                println!("    {v}");
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    println!();
    println!(
        "{} locations, {} failed, {:.2} s",
        outcomes.len(),
        failed,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
