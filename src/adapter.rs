//! Raw-stream adapter over a partial delegate.
//!
//! Wraps one [`Delegate`] and exposes the complete raw-stream operation set.
//! Every public method follows the same dispatch pattern: probe the
//! delegate's native operation first, and on structural absence apply a
//! documented fallback built from the delegate's primitives. A delegate's
//! own runtime failure is never a reason to fall back; it propagates
//! verbatim as [`StreamError::Stream`].

use alloc::vec::Vec;

use crate::delegate::{Delegate, Dispatch, SeekFrom};
use crate::error::{Capability, StreamError};

/// Chunk size used when synthesizing `read_all` from primitive reads.
const READ_ALL_CHUNK: usize = 4096;

/// Adapter presenting a total raw-stream interface over a partial one.
///
/// The adapter holds no buffering state between calls; read and write
/// fallbacks advance the delegate's own position by invoking its primitives
/// repeatedly. Access is sequential and single-threaded; sharing an adapter
/// across threads must be serialized by the caller.
///
/// # Example
///
/// ```ignore
/// use rawio_wrap::{FromReader, RawStreamAdapter};
///
/// // `FromReader` exposes only the primitive read; the adapter fills in
/// // the rest of the raw-stream surface.
/// let mut stream = RawStreamAdapter::new(FromReader::new(&b"xx\nxx"[..]));
/// assert_eq!(stream.read_line(None)?, b"xx\n");
/// assert_eq!(stream.read_all()?, b"xx");
/// ```
pub struct RawStreamAdapter<D> {
    delegate: D,
    /// Adapter-local closed state, consulted only when the delegate has no
    /// native notion of being closed.
    closed: bool,
}

impl<D> RawStreamAdapter<D> {
    /// Wrap the given delegate. The adapter starts open.
    pub fn new(delegate: D) -> Self {
        Self {
            delegate,
            closed: false,
        }
    }

    /// A reference to the wrapped delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// A mutable reference to the wrapped delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Consume the adapter and return the wrapped delegate.
    pub fn into_inner(self) -> D {
        self.delegate
    }
}

impl<D: Delegate> RawStreamAdapter<D> {
    /// Whether the stream is closed.
    ///
    /// Falls back to the adapter's own bookkeeping when the delegate has no
    /// native closed state.
    pub fn is_closed(&self) -> Result<bool, StreamError<D::Error>> {
        match self.delegate.closed() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(self.closed),
        }
    }

    /// Close the stream.
    ///
    /// When the delegate has no native close, only the adapter-local flag is
    /// set; calling close again is a no-op.
    pub fn close(&mut self) -> Result<(), StreamError<D::Error>> {
        match self.delegate.close() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                self.closed = true;
                Ok(())
            }
        }
    }

    /// The delegate's OS-level file descriptor.
    pub fn file_descriptor(&self) -> Result<i32, StreamError<D::Error>> {
        match self.delegate.file_descriptor() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::FileDescriptor)),
        }
    }

    /// Flush buffered writes. A no-op when the delegate has no flush.
    pub fn flush(&mut self) -> Result<(), StreamError<D::Error>> {
        match self.delegate.flush() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(()),
        }
    }

    /// Whether the stream is connected to a terminal. Defaults to `false`.
    pub fn is_interactive(&self) -> Result<bool, StreamError<D::Error>> {
        match self.delegate.is_interactive() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(false),
        }
    }

    /// Whether the stream supports reading. Assumed `true` when the delegate
    /// cannot say.
    pub fn is_readable(&self) -> Result<bool, StreamError<D::Error>> {
        match self.delegate.is_readable() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(true),
        }
    }

    /// Whether the stream supports writing. Defaults to `false`.
    pub fn is_writable(&self) -> Result<bool, StreamError<D::Error>> {
        match self.delegate.is_writable() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(false),
        }
    }

    /// Whether the stream supports seeking. Defaults to `false`.
    pub fn is_seekable(&self) -> Result<bool, StreamError<D::Error>> {
        match self.delegate.is_seekable() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Ok(false),
        }
    }

    /// Read up to `size` bytes. An empty result signals end-of-stream.
    pub fn read(&mut self, size: usize) -> Result<Vec<u8>, StreamError<D::Error>> {
        match self.delegate.read(size) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::Read)),
        }
    }

    /// Read everything remaining, concatenated into one buffer.
    ///
    /// The fallback drains the delegate's primitive read in 4096-byte
    /// chunks until it returns empty.
    pub fn read_all(&mut self) -> Result<Vec<u8>, StreamError<D::Error>> {
        match self.delegate.read_all() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                #[cfg(feature = "log")]
                log::trace!("read_all: synthesizing from primitive reads");
                let mut buffer = Vec::new();
                loop {
                    let chunk = match self.delegate.read(READ_ALL_CHUNK) {
                        Dispatch::Native(result) => result.map_err(StreamError::Stream)?,
                        Dispatch::Absent => {
                            return Err(StreamError::Unsupported(Capability::Read));
                        }
                    };
                    if chunk.is_empty() {
                        break;
                    }
                    buffer.extend_from_slice(&chunk);
                }
                Ok(buffer)
            }
        }
    }

    /// Fill `buf` from the stream, returning the count of bytes written.
    ///
    /// The fallback reads one byte at a time; exhausting the source before
    /// the buffer is full is a valid short read, not an error.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, StreamError<D::Error>> {
        match self.delegate.read_into(buf) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                for i in 0..buf.len() {
                    let byte = self.read(1)?;
                    if byte.is_empty() {
                        return Ok(i);
                    }
                    buf[i] = byte[0];
                }
                Ok(buf.len())
            }
        }
    }

    /// Read one line, up to and including the newline byte. An empty result
    /// signals end-of-stream.
    ///
    /// The fallback reads one byte at a time until a newline or
    /// end-of-stream. `limit` is accepted but not enforced on the fallback
    /// path, matching the native contract's signature only.
    pub fn read_line(&mut self, limit: Option<usize>) -> Result<Vec<u8>, StreamError<D::Error>> {
        match self.delegate.read_line(limit) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                // TODO: honour `limit` in the synthesized path as well.
                let mut line = Vec::new();
                loop {
                    let byte = self.read(1)?;
                    if byte.is_empty() {
                        break;
                    }
                    line.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Ok(line)
            }
        }
    }

    /// Read all remaining lines, in order. `hint` is accepted but ignored on
    /// the fallback path.
    pub fn read_lines(
        &mut self,
        hint: Option<usize>,
    ) -> Result<Vec<Vec<u8>>, StreamError<D::Error>> {
        match self.delegate.read_lines(hint) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                let mut lines = Vec::new();
                loop {
                    let line = self.read_line(None)?;
                    if line.is_empty() {
                        break;
                    }
                    lines.push(line);
                }
                Ok(lines)
            }
        }
    }

    /// Write the given bytes, returning the byte count written.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, StreamError<D::Error>> {
        match self.delegate.write(buf) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::Write)),
        }
    }

    /// Write every element in order, verbatim. No line terminator is added
    /// or stripped.
    pub fn write_lines(&mut self, lines: &[&[u8]]) -> Result<(), StreamError<D::Error>> {
        match self.delegate.write_lines(lines) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => {
                #[cfg(feature = "log")]
                log::trace!("write_lines: synthesizing from primitive writes");
                for line in lines {
                    match self.delegate.write(line) {
                        Dispatch::Native(result) => {
                            result.map_err(StreamError::Stream)?;
                        }
                        Dispatch::Absent => {
                            return Err(StreamError::Unsupported(Capability::Write));
                        }
                    }
                }
                Ok(())
            }
        }
    }

    /// Reposition the stream, returning the new absolute position.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, StreamError<D::Error>> {
        match self.delegate.seek(pos) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::Seek)),
        }
    }

    /// Current absolute position.
    pub fn tell(&mut self) -> Result<u64, StreamError<D::Error>> {
        match self.delegate.tell() {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::Tell)),
        }
    }

    /// Resize the stream to `size` bytes, or to the current position when
    /// `None`. Returns the new size.
    pub fn truncate(&mut self, size: Option<u64>) -> Result<u64, StreamError<D::Error>> {
        match self.delegate.truncate(size) {
            Dispatch::Native(result) => result.map_err(StreamError::Stream),
            Dispatch::Absent => Err(StreamError::Unsupported(Capability::Truncate)),
        }
    }
}
