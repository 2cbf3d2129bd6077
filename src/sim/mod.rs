//! Simulation harness: one generated stream, both policies, one report.

mod stats;

pub use stats::SimulationReport;

use log::info;

use crate::common::{Error, Result, SimulationConfig};
use crate::generator::ReferenceGenerator;
use crate::policy::{simulate_fifo, simulate_lru};

/// Generate a reference stream and measure both replacement policies
/// against it.
///
/// All parameters are validated before any generation work starts. The
/// stream is generated once; both simulators consume the identical
/// sequence, so the two fault counts are directly comparable.
///
/// Passing a `seed` makes the whole run reproducible; `None` seeds from
/// system entropy.
///
/// # Errors
/// Any configuration error from [`SimulationConfig::validate`], plus
/// [`Error::ZeroStreamLength`] and [`Error::ZeroFrameCount`].
///
/// # Example
/// ```
/// use faultsim::{run_simulation, SimulationConfig};
///
/// let report =
///     run_simulation(&SimulationConfig::default(), 1000, 50, Some(42)).unwrap();
/// assert_eq!(report.stream_len, 1000);
/// ```
pub fn run_simulation(
    config: &SimulationConfig,
    length: usize,
    frame_count: usize,
    seed: Option<u64>,
) -> Result<SimulationReport> {
    config.validate()?;
    if length == 0 {
        return Err(Error::ZeroStreamLength);
    }
    if frame_count == 0 {
        return Err(Error::ZeroFrameCount);
    }

    let stream = match seed {
        Some(seed) => ReferenceGenerator::from_seed(*config, seed)?.generate(length)?,
        None => ReferenceGenerator::from_entropy(*config)?.generate(length)?,
    };

    let fifo_faults = simulate_fifo(&stream, frame_count)?;
    let lru_faults = simulate_lru(&stream, frame_count)?;

    let report = SimulationReport {
        stream_len: stream.len(),
        distinct_pages: stream.distinct_pages(),
        frame_count,
        fifo_faults,
        lru_faults,
    };
    info!("{}", report);

    Ok(report)
}
