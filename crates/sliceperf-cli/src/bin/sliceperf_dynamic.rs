//! `sliceperf-dynamic` — derive dynamic slice metrics from the static CSVs.
//!
//! Reads the three `<slice>_performance.csv` files written by
//! `sliceperf-static`, scales their per-slice means by the fixed ratio table,
//! and writes `urllc_dynamic.csv`, `embb_dynamic.csv`, and `mmtc_dynamic.csv`
//! into the current directory. Input validation is all-or-nothing: if any
//! static file is missing or unreadable, nothing is written.

use std::path::Path;

use clap::Parser;
use sliceperf_core::{pipeline, wall_clock_rng};

#[derive(Parser)]
#[command(name = "sliceperf-dynamic")]
#[command(about = "Derive dynamic slice performance CSVs from the static baseline")]
#[command(version = sliceperf_core::VERSION)]
struct Cli {}

fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    println!("Generating dynamic slice performance data...");
    println!("Dynamic pattern: lower throughput, better packet loss");
    println!();

    let runs = match pipeline::run_dynamic(Path::new("."), &mut wall_clock_rng()) {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Could not derive dynamic metrics. Run sliceperf-static first.");
            std::process::exit(1);
        }
    };

    println!("Static baselines read successfully:");
    for run in &runs {
        if let Some(b) = run.baseline {
            println!(
                "  {}: {:.2} Mbps, {:.3}%, {:.2}J",
                run.slice, b.throughput, b.packet_loss, b.energy
            );
        }
    }
    println!();

    println!("Static vs dynamic means:");
    for run in &runs {
        let m = run.means();
        if let Some(b) = run.baseline {
            println!(
                "  {}: throughput {:.2} -> {:.2} Mbps, loss {:.3} -> {:.3}%, energy {:.2} -> {:.2}J",
                run.slice, b.throughput, m.throughput, b.packet_loss, m.packet_loss, b.energy, m.energy
            );
        }
    }
    println!();

    println!("Dynamic data saved to CSV files:");
    for run in &runs {
        println!("  {}", run.path.display());
    }
}
