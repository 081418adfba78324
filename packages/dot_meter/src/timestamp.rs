use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A wall-clock point in time captured by the meter.
///
/// Stored as the time elapsed since the Unix epoch, with nanosecond resolution.
/// Timestamps from the same process are totally ordered and can be compared
/// directly; the absolute difference between two of them is a [`Duration`].
///
/// The [`Display`](fmt::Display) rendering is a fixed-point decimal with exactly
/// eight digits after the decimal point (no scientific notation, no separators),
/// which preserves sub-microsecond precision in textual output.
///
/// # Examples
///
/// ```
/// use dot_meter::Timestamp;
///
/// let before = Timestamp::now();
/// let after = Timestamp::now();
///
/// assert!(after >= before);
/// let delta = after.abs_diff(before);
/// println!("captured {before} and {after}, {delta:?} apart");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    since_epoch: Duration,
}

impl Timestamp {
    /// Captures the current wall-clock time from the system clock.
    #[cfg_attr(test, mutants::skip)] // Real clock reads cannot be asserted exactly - covered by integration tests.
    #[must_use]
    pub fn now() -> Self {
        Self {
            since_epoch: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock is set before the Unix epoch"),
        }
    }

    pub(crate) fn from_since_epoch(since_epoch: Duration) -> Self {
        Self { since_epoch }
    }

    /// The time elapsed between the Unix epoch and this timestamp.
    #[must_use]
    pub fn since_epoch(&self) -> Duration {
        self.since_epoch
    }

    /// The absolute difference between two timestamps, regardless of their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dot_meter::Timestamp;
    ///
    /// let a = Timestamp::now();
    /// let b = Timestamp::now();
    ///
    /// assert_eq!(a.abs_diff(b), b.abs_diff(a));
    /// ```
    #[must_use]
    pub fn abs_diff(&self, other: Self) -> Duration {
        self.since_epoch.abs_diff(other.since_epoch)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Eight fractional digits means units of 10 nanoseconds, rounded
        // half-up as fixed-point decimal formatting conventionally does.
        #[expect(
            clippy::arithmetic_side_effects,
            clippy::integer_division,
            reason = "subsecond nanoseconds are bounded, so the rounding arithmetic cannot overflow"
        )]
        {
            let mut secs = self.since_epoch.as_secs();
            let mut frac = (self.since_epoch.subsec_nanos() + 5) / 10;
            if frac == 100_000_000 {
                // The rounded fraction carries into the whole seconds.
                secs += 1;
                frac = 0;
            }

            write!(f, "{secs}.{frac:08}")
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn at(since_epoch: Duration) -> Timestamp {
        Timestamp::from_since_epoch(since_epoch)
    }

    #[test]
    fn displays_whole_seconds_with_eight_zeros() {
        assert_eq!(at(Duration::new(5, 0)).to_string(), "5.00000000");
    }

    #[test]
    fn displays_fractional_part_padded_to_eight_digits() {
        assert_eq!(at(Duration::from_micros(1_000_042)).to_string(), "1.00004200");
    }

    #[test]
    fn displays_full_nanosecond_payload_rounded_to_eight_digits() {
        assert_eq!(at(Duration::new(1, 123_456_789)).to_string(), "1.12345679");
    }

    #[test]
    fn display_rounds_half_up_at_the_eighth_digit() {
        // 4 ns rounds down, 5 ns rounds up to one 10 ns unit.
        assert_eq!(at(Duration::new(1, 4)).to_string(), "1.00000000");
        assert_eq!(at(Duration::new(1, 5)).to_string(), "1.00000001");
        assert_eq!(at(Duration::new(1, 123_456_784)).to_string(), "1.12345678");
    }

    #[test]
    fn display_rounding_carries_into_whole_seconds() {
        assert_eq!(at(Duration::new(1, 999_999_999)).to_string(), "2.00000000");
    }

    #[test]
    fn displays_epoch_as_zero() {
        assert_eq!(at(Duration::ZERO).to_string(), "0.00000000");
    }

    #[test]
    fn abs_diff_is_symmetric() {
        let earlier = at(Duration::from_secs(100));
        let later = at(Duration::from_secs(250));

        assert_eq!(earlier.abs_diff(later), Duration::from_secs(150));
        assert_eq!(later.abs_diff(earlier), Duration::from_secs(150));
    }

    #[test]
    fn abs_diff_of_equal_timestamps_is_zero() {
        let instant = at(Duration::from_millis(1234));

        assert_eq!(instant.abs_diff(instant), Duration::ZERO);
    }

    #[test]
    fn ordering_follows_epoch_offset() {
        assert!(at(Duration::from_secs(1)) < at(Duration::from_secs(2)));
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real system clock.
    fn now_is_after_the_epoch() {
        let now = Timestamp::now();

        assert!(now.since_epoch() > Duration::ZERO);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real system clock.
    fn consecutive_now_calls_are_close_together() {
        let first = Timestamp::now();
        let second = Timestamp::now();

        // Wall clocks may be adjusted between samples, so only require that any
        // backwards jump is small.
        assert!(first.abs_diff(second) < Duration::from_secs(60));
    }
}
