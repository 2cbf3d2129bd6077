//! Command-line entry point for faultsim.

use clap::Parser;

use faultsim::{run_simulation, SimulationConfig};

/// Measure FIFO and LRU page-fault counts over a synthetic locality
/// workload.
#[derive(Debug, Parser)]
#[command(name = "faultsim", version, about)]
struct Args {
    /// Total number of addressable pages (P)
    #[arg(long, default_value_t = 1000)]
    space: u64,

    /// Initial locus position (s)
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Width of the locality window (e)
    #[arg(long, default_value_t = 10)]
    locus_size: u64,

    /// Rate of motion (m); reserved, accepted but unused
    #[arg(long, default_value_t = 200)]
    rate: u64,

    /// Probability in [0, 1] that the locus relocates after a reference (t)
    #[arg(long, default_value_t = 0.1)]
    transition_prob: f64,

    /// Number of references to generate
    #[arg(long, default_value_t = 1000)]
    length: usize,

    /// Frame pool capacity
    #[arg(long, default_value_t = 50)]
    frames: usize,

    /// Seed for the random source; omit to seed from system entropy
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = SimulationConfig {
        space: args.space,
        start: args.start,
        locus_size: args.locus_size,
        rate: args.rate,
        transition_prob: args.transition_prob,
    };

    match run_simulation(&config, args.length, args.frames, args.seed) {
        Ok(report) => {
            println!("FIFO page faults: {}", report.fifo_faults);
            println!("LRU page faults:  {}", report.lru_faults);
            println!(
                "({} references, {} distinct pages, {} frames)",
                report.stream_len, report.distinct_pages, report.frame_count
            );
        }
        Err(err) => {
            eprintln!("faultsim: {err}");
            std::process::exit(1);
        }
    }
}
