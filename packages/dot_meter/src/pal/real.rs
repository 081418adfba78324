//! Real platform implementation backed by the system clock.

use crate::Timestamp;
use crate::pal::abstractions::Platform;

/// Reads time from the real system clock.
#[derive(Clone, Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn wall_clock(&self) -> Timestamp {
        Timestamp::now()
    }
}
