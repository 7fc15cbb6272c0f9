//! Shot Simulation Tool - headless batch of random shots
//!
//! Usage:
//!   cargo run --bin simulate -- --help
//!   cargo run --bin simulate -- --shots 500 --seed 42
//!   cargo run --bin simulate -- --spread 25 -o results.json

use std::process::ExitCode;

use minigolf::simulation::{SimConfig, run_simulation};

fn main() -> ExitCode {
    let config = SimConfig::from_args();
    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }
    run_simulation(config);
    ExitCode::SUCCESS
}
