//! Facade dispatching between the available platform implementations.

use crate::Timestamp;
use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Enum-dispatch wrapper over the available [`Platform`] implementations.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    fn wall_clock(&self) -> Timestamp {
        match self {
            Self::Real(platform) => platform.wall_clock(),
            #[cfg(test)]
            Self::Fake(platform) => platform.wall_clock(),
        }
    }
}
