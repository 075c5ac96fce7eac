//! Control Room Simulator - Main Entry Point
//!
//! Headless runner: drives the physics loop at the configured cadence
//! and logs the gauge readings each tick. `--ticks N` runs a bounded
//! batch and exits, for demos and sanity checks.

use std::sync::Arc;
use std::time::Duration;

use control_room_lib::{PlantSimulator, SimConfig};

fn gauge_line(sim: &PlantSimulator) -> String {
    let state = sim.get_state();
    format!(
        "t={:7.1}s power={:6.2}% temp={:6.1}C pressure={:6.1}kPa dose={:.2}Sv/h rods={:3.0}% {}",
        state.time,
        state.power,
        state.temperature,
        state.pressure,
        state.radiation_dose,
        state.rod_position,
        if state.running { "RUNNING" } else { "stopped" },
    )
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = SimConfig::load_or_default();
    let tick = Duration::from_millis(config.tick_interval_ms);
    let simulator = Arc::new(PlantSimulator::with_config(config));

    log::info!("simulator loaded");
    simulator.start();

    // Bounded batch mode: run N ticks synchronously and exit.
    if let Some(ticks) = parse_ticks_arg() {
        simulator.run(ticks);
        println!("{}", gauge_line(&simulator));
        return;
    }

    let mut interval = tokio::time::interval(tick);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                simulator.step();
                log::info!("{}", gauge_line(&simulator));
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                break;
            }
        }
    }
}

fn parse_ticks_arg() -> Option<usize> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--ticks" {
            return args.next().and_then(|n| n.parse().ok());
        }
    }
    None
}
