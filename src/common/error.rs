//! Error types for faultsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in faultsim.
///
/// Every variant is a configuration error: the algorithms themselves are
/// total functions over valid inputs, with no I/O and no external
/// resources, so there is nothing transient to fail. All checks run
/// eagerly, before any generation or simulation work begins.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The virtual address space must contain at least one page.
    #[error("invalid configuration: virtual space size must be positive")]
    ZeroSpaceSize,

    /// The locality window must cover at least one page.
    #[error("invalid configuration: locus size must be positive")]
    ZeroLocusSize,

    /// The initial locus position must fall inside the virtual space.
    #[error("invalid configuration: locus start {start} is outside the virtual space of {space} pages")]
    StartOutOfRange { start: u64, space: u64 },

    /// The transition probability is a probability; nothing else is meaningful.
    #[error("invalid configuration: transition probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// An empty reference stream has nothing to simulate.
    #[error("invalid configuration: stream length must be positive")]
    ZeroStreamLength,

    /// A frame pool with no frames cannot hold any resident page.
    #[error("invalid configuration: frame count must be positive")]
    ZeroFrameCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ZeroFrameCount;
        assert_eq!(
            format!("{}", err),
            "invalid configuration: frame count must be positive"
        );

        let err = Error::StartOutOfRange {
            start: 12,
            space: 10,
        };
        assert_eq!(
            format!("{}", err),
            "invalid configuration: locus start 12 is outside the virtual space of 10 pages"
        );
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u64> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(Error::ZeroSpaceSize, Error::ZeroSpaceSize);
        assert_ne!(Error::ZeroSpaceSize, Error::ZeroLocusSize);
    }
}
