//! Platform abstraction layer for wall-clock access.
//!
//! This module provides a platform abstraction that allows switching between
//! the real system clock and a fake clock whose time is fully controlled by
//! tests, so duration assertions can be exact instead of "within noise".

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
