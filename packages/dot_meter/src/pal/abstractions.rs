//! Platform abstraction trait definitions.

use std::fmt::Debug;

use crate::Timestamp;

/// Provides access to the wall clock.
///
/// This trait abstracts the underlying time source, allowing for the real
/// implementation (reading the system clock) and a fake implementation
/// (for testing) to be used interchangeably.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Samples the current wall-clock time.
    fn wall_clock(&self) -> Timestamp;
}
