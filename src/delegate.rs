//! Delegate port - the capability surface of a wrapped stream.
//!
//! This port defines what the adapter can ask of the underlying stream.
//! Every method has a provided body reporting [`Dispatch::Absent`], so a
//! delegate declares a capability by overriding the method and leaves the
//! rest untouched. The adapter probes each call's result and synthesizes the
//! missing operations from the primitives the delegate does provide.

use alloc::vec::Vec;

/// Outcome of probing a delegate for one operation.
///
/// `Absent` means the delegate structurally lacks the operation and the
/// adapter should fall back. `Native(Err(_))` means the delegate has the
/// operation and it failed; that failure belongs to the caller and is never
/// treated as absence.
#[derive(Debug)]
pub enum Dispatch<T, E> {
    /// The delegate handled the call natively.
    Native(Result<T, E>),
    /// The delegate does not implement this operation.
    Absent,
}

impl<T, E> Dispatch<T, E> {
    /// A successful native result.
    pub fn native(value: T) -> Self {
        Self::Native(Ok(value))
    }
}

impl<T, E> From<Result<T, E>> for Dispatch<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::Native(result)
    }
}

/// Position for a seek operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
    /// Offset from the start of the stream.
    Start(u64),
    /// Offset from the end of the stream.
    End(i64),
    /// Offset from the current position.
    Current(i64),
}

/// A stream-like object with an open-ended capability set.
///
/// Implementors override exactly the operations the underlying object
/// natively supports; everything else defaults to [`Dispatch::Absent`] and
/// is synthesized by [`RawStreamAdapter`](crate::RawStreamAdapter). A
/// delegate exposing nothing but [`read`](Delegate::read) and
/// [`write`](Delegate::write) is enough for the adapter to provide the full
/// raw-stream surface.
///
/// Delegates that cannot fail may use `core::convert::Infallible` as the
/// error type.
pub trait Delegate {
    /// The delegate's own error type, propagated verbatim by the adapter.
    type Error: core::error::Error;

    /// Read up to `size` bytes. An empty result signals end-of-stream.
    fn read(&mut self, _size: usize) -> Dispatch<Vec<u8>, Self::Error> {
        Dispatch::Absent
    }

    /// Read everything remaining in one call.
    fn read_all(&mut self) -> Dispatch<Vec<u8>, Self::Error> {
        Dispatch::Absent
    }

    /// Read into the caller's buffer, returning the byte count.
    fn read_into(&mut self, _buf: &mut [u8]) -> Dispatch<usize, Self::Error> {
        Dispatch::Absent
    }

    /// Read one line, up to and including the newline byte.
    fn read_line(&mut self, _limit: Option<usize>) -> Dispatch<Vec<u8>, Self::Error> {
        Dispatch::Absent
    }

    /// Read all remaining lines.
    fn read_lines(&mut self, _hint: Option<usize>) -> Dispatch<Vec<Vec<u8>>, Self::Error> {
        Dispatch::Absent
    }

    /// Write the given bytes, returning the byte count written.
    fn write(&mut self, _buf: &[u8]) -> Dispatch<usize, Self::Error> {
        Dispatch::Absent
    }

    /// Write every element in order, verbatim.
    fn write_lines(&mut self, _lines: &[&[u8]]) -> Dispatch<(), Self::Error> {
        Dispatch::Absent
    }

    /// Reposition the stream, returning the new absolute position.
    fn seek(&mut self, _pos: SeekFrom) -> Dispatch<u64, Self::Error> {
        Dispatch::Absent
    }

    /// Current absolute position.
    fn tell(&mut self) -> Dispatch<u64, Self::Error> {
        Dispatch::Absent
    }

    /// Resize to `size` bytes, or to the current position when `None`.
    /// Returns the new size.
    fn truncate(&mut self, _size: Option<u64>) -> Dispatch<u64, Self::Error> {
        Dispatch::Absent
    }

    /// Flush buffered writes to the underlying stream.
    fn flush(&mut self) -> Dispatch<(), Self::Error> {
        Dispatch::Absent
    }

    /// Release the underlying stream.
    fn close(&mut self) -> Dispatch<(), Self::Error> {
        Dispatch::Absent
    }

    /// Whether the delegate considers itself closed.
    fn closed(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::Absent
    }

    /// OS-level file descriptor.
    fn file_descriptor(&self) -> Dispatch<i32, Self::Error> {
        Dispatch::Absent
    }

    /// Whether the stream is connected to a terminal.
    fn is_interactive(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::Absent
    }

    /// Whether the stream supports reading.
    fn is_readable(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::Absent
    }

    /// Whether the stream supports writing.
    fn is_writable(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::Absent
    }

    /// Whether the stream supports seeking.
    fn is_seekable(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::Absent
    }
}
