#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Records named wall-clock timestamps ("dots") and measures elapsed time between them.
//!
//! This package provides a small meter for ad-hoc profiling inside application code:
//! mark interesting points in time by name, then ask how much time passed between
//! any two of them.
//!
//! The core functionality includes:
//! - [`TimeMeter`] - Owns the recorded dots and answers elapsed-time queries
//! - [`Timestamp`] - A wall-clock point in time with fixed-point fractional-second formatting
//! - [`Error`] - Reports queries whose preconditions were not met
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # Recording dots
//!
//! A dot is a named timestamp. Stamp one whenever something noteworthy happens,
//! then measure between dots or against the meter's creation time:
//!
//! ```
//! use dot_meter::TimeMeter;
//!
//! let mut meter = TimeMeter::new();
//!
//! meter.new_dot("parsed");
//! // ... more work ...
//! meter.new_dot("rendered");
//!
//! // Time between two named dots.
//! let work = meter.time_between(Some("parsed"), Some("rendered")).unwrap();
//!
//! // Time from meter creation until the "parsed" dot.
//! let setup = meter.time_between(Some("parsed"), None).unwrap();
//!
//! // Time from meter creation until right now.
//! let total = meter.time_between(None, None).unwrap();
//!
//! println!("setup {setup:?}, work {work:?}, total {total:?}");
//! ```
//!
//! # Measuring events
//!
//! For the common "how long did this operation take" case, select an event and
//! bracket the operation with [`start()`](TimeMeter::start) and
//! [`end()`](TimeMeter::end):
//!
//! ```
//! use dot_meter::TimeMeter;
//!
//! let mut meter = TimeMeter::new();
//!
//! meter.event("load");
//! meter.start().unwrap();
//! // ... the operation being profiled ...
//! meter.end().unwrap();
//!
//! let elapsed = meter.time().unwrap();
//! println!("load took {elapsed:?}");
//! ```
//!
//! Selecting an event overwrites the previous selection; events do not nest.
//! Calling `start()`, `end()` or `time()` without a selected event returns
//! [`Error::NoEventSelected`] instead of stamping anything.
//!
//! # Failure semantics
//!
//! Queries that reference an unknown dot name or run without a selected event
//! return an [`Error`]; nothing panics and nothing is logged. A zero-duration
//! result is an ordinary success and is never conflated with failure.
//!
//! # Threading
//!
//! A meter is meant for exclusive single-threaded use; all mutating operations
//! take `&mut self` and there is no internal locking. Wrap the instance in a
//! mutex if it must be shared across threads.

mod error;
mod meter;
mod pal;
mod timestamp;

pub use error::*;
pub use meter::*;
pub use timestamp::*;
