//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::Timestamp;
use crate::pal::abstractions::Platform;

const ERR_POISONED_LOCK: &str = "FakePlatform state lock should not be poisoned";

/// Fake clock implementation of the platform abstraction for testing.
///
/// This implementation lets tests control the wall-clock reading instead of
/// relying on the real system clock. Multiple clones of the same `FakePlatform`
/// share the same underlying time state, allowing tests to keep a handle to the
/// platform and move the clock while a meter is using it.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    // Offset of the fake "now" from the Unix epoch.
    now: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose clock reads the Unix epoch.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the clock to an absolute offset from the Unix epoch.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn set_wall_clock(&self, since_epoch: Duration) {
        *self.now.lock().expect(ERR_POISONED_LOCK) = since_epoch;
    }

    /// Moves the clock forward by the given amount.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect(ERR_POISONED_LOCK);
        *now = now.saturating_add(delta);
    }
}

impl Platform for FakePlatform {
    fn wall_clock(&self) -> Timestamp {
        Timestamp::from_since_epoch(*self.now.lock().expect(ERR_POISONED_LOCK))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_the_epoch() {
        let platform = FakePlatform::new();

        assert_eq!(platform.wall_clock().since_epoch(), Duration::ZERO);
    }

    #[test]
    fn set_wall_clock_is_absolute() {
        let platform = FakePlatform::new();

        platform.set_wall_clock(Duration::from_secs(42));
        platform.set_wall_clock(Duration::from_secs(7));

        assert_eq!(platform.wall_clock().since_epoch(), Duration::from_secs(7));
    }

    #[test]
    fn advance_is_relative() {
        let platform = FakePlatform::new();

        platform.advance(Duration::from_millis(100));
        platform.advance(Duration::from_millis(250));

        assert_eq!(
            platform.wall_clock().since_epoch(),
            Duration::from_millis(350)
        );
    }

    #[test]
    fn clones_share_the_same_clock() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other.
        platform1.set_wall_clock(Duration::from_secs(100));
        assert_eq!(
            platform2.wall_clock().since_epoch(),
            Duration::from_secs(100)
        );

        platform2.advance(Duration::from_secs(5));
        assert_eq!(
            platform1.wall_clock().since_epoch(),
            Duration::from_secs(105)
        );
    }
}
