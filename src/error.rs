//! Error types for the raw-stream adapter.
//!
//! Two failure classes exist and must never be confused: an operation the
//! delegate structurally lacks (`Unsupported`), and a failure raised by an
//! operation the delegate does have (`Stream`). The latter is propagated
//! verbatim, never reinterpreted as absence.

use core::fmt;

/// A raw-stream capability the adapter could not provide.
///
/// Carried by [`StreamError::Unsupported`] so callers can match on the exact
/// missing capability instead of parsing a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Capability {
    /// Primitive byte reads (`read`).
    Read,
    /// Primitive byte writes (`write`).
    Write,
    /// Random-access repositioning (`seek`).
    Seek,
    /// Position query (`tell`).
    Tell,
    /// Length adjustment (`truncate`).
    Truncate,
    /// OS-level file descriptor access.
    FileDescriptor,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Stream does not support reading"),
            Self::Write => write!(f, "Stream does not support writing"),
            Self::Seek | Self::Tell | Self::Truncate => {
                write!(f, "Stream is not random-access")
            }
            Self::FileDescriptor => write!(f, "File descriptor not supported"),
        }
    }
}

/// Errors surfaced by [`RawStreamAdapter`](crate::RawStreamAdapter) operations.
///
/// Generic over the delegate's own error type so delegate failures pass
/// through unmodified.
#[derive(Debug)]
pub enum StreamError<E> {
    /// The operation is structurally absent on the delegate and no fallback
    /// can synthesize it.
    Unsupported(Capability),
    /// The delegate has the operation and its execution failed.
    Stream(E),
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(capability) => write!(f, "{}", capability),
            Self::Stream(e) => write!(f, "{}", e),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for StreamError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Unsupported(_) => None,
            Self::Stream(e) => Some(e),
        }
    }
}

#[cfg(feature = "std")]
impl<E> From<StreamError<E>> for std::io::Error
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(err: StreamError<E>) -> Self {
        match err {
            StreamError::Unsupported(capability) => std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                capability.to_string(),
            ),
            StreamError::Stream(e) => std::io::Error::new(std::io::ErrorKind::Other, e),
        }
    }
}
