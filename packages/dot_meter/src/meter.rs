use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Timestamp};

/// Dot name prefix for the start of the current event.
const START_PREFIX: &str = "start_";

/// Dot name prefix for the end of the current event.
const END_PREFIX: &str = "end_";

/// Records named wall-clock timestamps ("dots") and measures elapsed time
/// between them.
///
/// The meter captures its own creation time when constructed. Every call to
/// [`new_dot()`](Self::new_dot) stamps the current time under a name; duration
/// queries then compare two stamped dots, or a stamped dot against the creation
/// time, or the creation time against "right now".
///
/// On top of the dot store sits an event convenience layer: select an operation
/// name with [`event()`](Self::event), bracket the operation with
/// [`start()`](Self::start) and [`end()`](Self::end), and read the elapsed time
/// with [`time()`](Self::time). The event layer stamps ordinary dots named
/// `start_<event>` and `end_<event>`, so they remain visible to
/// [`dot_exists()`](Self::dot_exists) and [`time_between()`](Self::time_between).
///
/// # Examples
///
/// ```
/// use dot_meter::TimeMeter;
///
/// let mut meter = TimeMeter::new();
///
/// meter.event("render");
/// meter.start().unwrap();
/// // ... the operation being profiled ...
/// meter.end().unwrap();
///
/// let elapsed = meter.time().unwrap();
/// assert!(meter.dot_exists("start_render"));
/// assert!(meter.dot_exists("end_render"));
/// println!("render took {elapsed:?}");
/// ```
///
/// # Threading
///
/// One meter is meant for exclusive single-threaded use; all mutating
/// operations take `&mut self` and there is no internal locking.
#[derive(Debug)]
pub struct TimeMeter {
    /// Captured once at construction, never updated afterwards.
    creation_time: Timestamp,
    dots: HashMap<String, Timestamp>,
    current_event: Option<String>,
    platform: PlatformFacade,
}

impl TimeMeter {
    /// Creates a new meter, capturing the current wall-clock time as its
    /// creation time.
    #[cfg_attr(test, mutants::skip)] // Real clock reads cannot be asserted exactly - covered by integration tests.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    /// Creates a meter backed by a specific platform.
    ///
    /// This is how tests inject a fake clock instead of the real system clock.
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            creation_time: platform.wall_clock(),
            dots: HashMap::new(),
            current_event: None,
            platform,
        }
    }

    /// The wall-clock time at which this meter was constructed.
    #[must_use]
    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }

    /// Stamps the current wall-clock time under `name`.
    ///
    /// Stamping a name that already exists overwrites the previous timestamp;
    /// later queries see only the new value. Returns the meter so stamping
    /// calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use dot_meter::TimeMeter;
    ///
    /// let mut meter = TimeMeter::new();
    /// meter.new_dot("connected").new_dot("authenticated");
    ///
    /// assert!(meter.dot_exists("connected"));
    /// assert!(meter.dot_exists("authenticated"));
    /// ```
    pub fn new_dot(&mut self, name: impl Into<String>) -> &mut Self {
        let now = self.platform.wall_clock();
        self.dots.insert(name.into(), now);
        self
    }

    /// Whether a dot named `name` has been stamped.
    #[must_use]
    pub fn dot_exists(&self, name: &str) -> bool {
        self.dots.contains_key(name)
    }

    /// The timestamp stamped under `name`, if any.
    #[must_use]
    pub fn dot(&self, name: &str) -> Option<Timestamp> {
        self.dots.get(name).copied()
    }

    /// The elapsed time between two points, as selected by the arguments.
    ///
    /// * `time_between(None, _)` measures from the meter's creation time until
    ///   a freshly sampled "now". The second argument is not consulted in this
    ///   case.
    /// * `time_between(Some(a), None)` measures between dot `a` and the
    ///   creation time.
    /// * `time_between(Some(a), Some(b))` measures between the two named dots.
    ///
    /// The result is the absolute difference between the two selected
    /// timestamps, so the argument order does not matter and the duration is
    /// never negative. A zero duration is an ordinary success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DotNotFound`] when a named dot was never stamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dot_meter::TimeMeter;
    ///
    /// let mut meter = TimeMeter::new();
    /// meter.new_dot("a").new_dot("b");
    ///
    /// let between_dots = meter.time_between(Some("a"), Some("b")).unwrap();
    /// let since_creation = meter.time_between(None, None).unwrap();
    /// assert!(since_creation >= between_dots);
    ///
    /// assert!(meter.time_between(Some("never-stamped"), None).is_err());
    /// ```
    pub fn time_between(&self, first: Option<&str>, second: Option<&str>) -> Result<Duration> {
        let Some(first_name) = first else {
            // No first dot: the span runs from creation until right now.
            let now = self.platform.wall_clock();
            return Ok(self.creation_time.abs_diff(now));
        };

        let first_time = self.lookup(first_name)?;

        let second_time = match second {
            Some(second_name) => self.lookup(second_name)?,
            None => self.creation_time,
        };

        Ok(first_time.abs_diff(second_time))
    }

    /// Selects the current event.
    ///
    /// The selection steers subsequent [`start()`](Self::start),
    /// [`end()`](Self::end) and [`time()`](Self::time) calls. Each call
    /// overwrites the previous selection; events do not nest. The name is not
    /// validated.
    pub fn event(&mut self, name: impl Into<String>) -> &mut Self {
        self.current_event = Some(name.into());
        self
    }

    /// The currently selected event, if any.
    #[must_use]
    pub fn current_event(&self) -> Option<&str> {
        self.current_event.as_deref()
    }

    /// Stamps the start dot (`start_<event>`) for the current event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEventSelected`] when no event has been selected; no
    /// dot is stamped in that case.
    pub fn start(&mut self) -> Result<&mut Self> {
        let name = self.event_dot_name(START_PREFIX)?;
        Ok(self.new_dot(name))
    }

    /// Stamps the end dot (`end_<event>`) for the current event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEventSelected`] when no event has been selected; no
    /// dot is stamped in that case.
    pub fn end(&mut self) -> Result<&mut Self> {
        let name = self.event_dot_name(END_PREFIX)?;
        Ok(self.new_dot(name))
    }

    /// The elapsed time of the current event.
    ///
    /// Measures between the event's start and end dots via
    /// [`time_between()`](Self::time_between), substituting the absent marker
    /// for either dot that was never stamped. A missing start dot therefore
    /// means the measurement runs from creation until now (and the end dot is
    /// not consulted); a missing end dot means the start dot is measured
    /// against the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEventSelected`] when no event has been selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use dot_meter::TimeMeter;
    ///
    /// let mut meter = TimeMeter::new();
    ///
    /// meter.event("query");
    /// meter.start().unwrap();
    /// // ... the operation being profiled ...
    /// meter.end().unwrap();
    ///
    /// let elapsed = meter.time().unwrap();
    /// let direct = meter
    ///     .time_between(Some("start_query"), Some("end_query"))
    ///     .unwrap();
    /// assert_eq!(elapsed, direct);
    /// ```
    pub fn time(&self) -> Result<Duration> {
        let event = self.current_event.as_deref().ok_or(Error::NoEventSelected)?;

        let start_name = format!("{START_PREFIX}{event}");
        let end_name = format!("{END_PREFIX}{event}");

        let start = self.dot_exists(&start_name).then_some(start_name);
        let end = self.dot_exists(&end_name).then_some(end_name);

        self.time_between(start.as_deref(), end.as_deref())
    }

    /// The time elapsed since this meter was constructed.
    ///
    /// Infallible convenience for `time_between(None, None)`.
    #[must_use]
    pub fn since_creation(&self) -> Duration {
        self.creation_time.abs_diff(self.platform.wall_clock())
    }

    fn lookup(&self, name: &str) -> Result<Timestamp> {
        self.dots
            .get(name)
            .copied()
            .ok_or_else(|| Error::DotNotFound {
                name: name.to_string(),
            })
    }

    fn event_dot_name(&self, prefix: &str) -> Result<String> {
        let event = self.current_event.as_deref().ok_or(Error::NoEventSelected)?;
        Ok(format!("{prefix}{event}"))
    }
}

impl Default for TimeMeter {
    fn default() -> Self {
        Self::new()
    }
}
