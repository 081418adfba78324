use thiserror::Error;

/// Errors that can occur when querying a [`TimeMeter`](crate::TimeMeter).
///
/// Every variant is a precondition that was not met. A failed operation leaves
/// the meter unchanged; there is no partially updated state to recover from.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A duration query referenced a dot name that was never stamped.
    #[error("no dot named '{name}' has been stamped")]
    DotNotFound {
        /// The dot name that was looked up.
        name: String,
    },

    /// An event operation was invoked before any event was selected.
    #[error("no current event is selected; call event() first")]
    NoEventSelected,
}

/// A specialized `Result` type for dot meter operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
