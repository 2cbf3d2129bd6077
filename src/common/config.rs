//! Workload configuration for the reference generator.

use crate::common::{Error, Result};

/// Parameters describing the synthetic locality workload.
///
/// The generator draws references from a sliding window (the *locus*) of
/// `locus_size` pages starting at `start`, inside a virtual space of
/// `space` pages. After each reference the locus either drifts forward by
/// one page or, with probability `transition_prob`, relocates to a
/// uniformly random position (a working-set switch).
///
/// All parameters are validated eagerly by [`SimulationConfig::validate`];
/// no generation or simulation work starts on an invalid configuration.
///
/// # Example
/// ```
/// use faultsim::SimulationConfig;
///
/// let config = SimulationConfig {
///     space: 1000,
///     start: 0,
///     locus_size: 10,
///     rate: 200,
///     transition_prob: 0.1,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Total number of addressable pages (`P`). Must be positive.
    pub space: u64,

    /// Initial locus position (`s`). Must be in `[0, space)`.
    pub start: u64,

    /// Width of the locality window (`e`). Must be positive.
    ///
    /// A locus wider than the space is accepted: references still wrap
    /// modulo `space`, the window just stops meaning anything spatially.
    pub locus_size: u64,

    /// Rate of motion (`m`). Reserved.
    ///
    /// Accepted for interface compatibility with existing callers but
    /// ignored by the generator; the locus always drifts by one page per
    /// reference.
    pub rate: u64,

    /// Probability (`t`, in `[0, 1]`) that the locus relocates to a random
    /// position after a reference instead of drifting forward.
    pub transition_prob: f64,
}

impl SimulationConfig {
    /// Check every invariant, reporting the first violation.
    ///
    /// # Errors
    /// - [`Error::ZeroSpaceSize`] if `space == 0`
    /// - [`Error::ZeroLocusSize`] if `locus_size == 0`
    /// - [`Error::StartOutOfRange`] if `start >= space`
    /// - [`Error::ProbabilityOutOfRange`] if `transition_prob` is not in
    ///   `[0, 1]` (NaN included)
    pub fn validate(&self) -> Result<()> {
        if self.space == 0 {
            return Err(Error::ZeroSpaceSize);
        }
        if self.locus_size == 0 {
            return Err(Error::ZeroLocusSize);
        }
        if self.start >= self.space {
            return Err(Error::StartOutOfRange {
                start: self.start,
                space: self.space,
            });
        }
        // NaN fails both comparisons, so it is rejected here too.
        if !(0.0..=1.0).contains(&self.transition_prob) {
            return Err(Error::ProbabilityOutOfRange(self.transition_prob));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// The demo workload: a 1000-page space with a 10-page locus that
    /// relocates 10% of the time.
    fn default() -> Self {
        Self {
            space: 1000,
            start: 0,
            locus_size: 10,
            rate: 200,
            transition_prob: 0.1,
        }
    }
}
