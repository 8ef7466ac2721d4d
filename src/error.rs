use crate::compat::collections;
use core::fmt;

/// An error object returned from fallible methods of the container types.
///
/// A hash table insertion that exhausts its displacement limit despite a
/// low load factor is reported the same way as a plain allocation failure:
/// the recovery path is identical either way, so there is no separate
/// variant for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation could not be completed because it failed to allocate
    /// enough memory, or a hash table insertion exhausted its displacement
    /// limit. The container is left exactly as it was before the call.
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::OutOfMemory => "out of memory",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<collections::TryReserveError> for Error {
    fn from(_: collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// The type returned by fallible methods of the container types.
pub type Result<T> = core::result::Result<T, Error>;
