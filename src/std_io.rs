//! Bridges between the delegate port and `std::io`.
//!
//! Three directions: `std::fs::File` as a fully-native delegate, minimal
//! [`FromReader`]/[`FromWriter`] delegates over any `std::io` reader or
//! writer, and `std::io::{Read, Write, Seek}` implementations for the
//! adapter itself so it can be handed to code expecting the std traits.

use std::fs::File;
use std::io::{self, IsTerminal, Read, Seek, Write};

use crate::adapter::RawStreamAdapter;
use crate::delegate::{Delegate, Dispatch, SeekFrom};
use crate::error::StreamError;

fn to_std_seek(pos: SeekFrom) -> io::SeekFrom {
    match pos {
        SeekFrom::Start(n) => io::SeekFrom::Start(n),
        SeekFrom::End(n) => io::SeekFrom::End(n),
        SeekFrom::Current(n) => io::SeekFrom::Current(n),
    }
}

fn read_up_to<R: Read>(reader: &mut R, size: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; size];
    let n = reader.read(&mut buf)?;
    buf.truncate(n);
    Ok(buf)
}

/// `File` supports nearly the whole raw-stream surface natively; only the
/// line-oriented operations and the closed state go through fallbacks.
impl Delegate for File {
    type Error = io::Error;

    fn read(&mut self, size: usize) -> Dispatch<Vec<u8>, Self::Error> {
        read_up_to(self, size).into()
    }

    fn read_all(&mut self) -> Dispatch<Vec<u8>, Self::Error> {
        let mut buffer = Vec::new();
        match Read::read_to_end(self, &mut buffer) {
            Ok(_) => Dispatch::native(buffer),
            Err(e) => Dispatch::Native(Err(e)),
        }
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Dispatch<usize, Self::Error> {
        Read::read(self, buf).into()
    }

    fn write(&mut self, buf: &[u8]) -> Dispatch<usize, Self::Error> {
        Write::write(self, buf).into()
    }

    fn flush(&mut self) -> Dispatch<(), Self::Error> {
        Write::flush(self).into()
    }

    fn seek(&mut self, pos: SeekFrom) -> Dispatch<u64, Self::Error> {
        Seek::seek(self, to_std_seek(pos)).into()
    }

    fn tell(&mut self) -> Dispatch<u64, Self::Error> {
        self.stream_position().into()
    }

    fn truncate(&mut self, size: Option<u64>) -> Dispatch<u64, Self::Error> {
        let new_len = match size {
            Some(n) => n,
            None => match self.stream_position() {
                Ok(pos) => pos,
                Err(e) => return Dispatch::Native(Err(e)),
            },
        };
        match self.set_len(new_len) {
            Ok(()) => Dispatch::native(new_len),
            Err(e) => Dispatch::Native(Err(e)),
        }
    }

    #[cfg(unix)]
    fn file_descriptor(&self) -> Dispatch<i32, Self::Error> {
        use std::os::fd::AsRawFd;
        Dispatch::native(self.as_raw_fd())
    }

    fn is_interactive(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::native(self.is_terminal())
    }

    fn is_seekable(&self) -> Dispatch<bool, Self::Error> {
        Dispatch::native(true)
    }
}

/// Delegate exposing only the primitive read of any `std::io::Read`.
///
/// Everything beyond `read` reports absence, so this is the smallest
/// delegate from which [`RawStreamAdapter`] can still synthesize the full
/// read-side surface.
pub struct FromReader<R>(R);

impl<R> FromReader<R> {
    /// Wrap a `std::io` reader.
    pub fn new(inner: R) -> Self {
        Self(inner)
    }

    /// Consume the wrapper and return the inner reader.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read> Delegate for FromReader<R> {
    type Error = io::Error;

    fn read(&mut self, size: usize) -> Dispatch<Vec<u8>, Self::Error> {
        read_up_to(&mut self.0, size).into()
    }
}

/// Delegate exposing only the primitive write and flush of any
/// `std::io::Write`.
pub struct FromWriter<W>(W);

impl<W> FromWriter<W> {
    /// Wrap a `std::io` writer.
    pub fn new(inner: W) -> Self {
        Self(inner)
    }

    /// Consume the wrapper and return the inner writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Delegate for FromWriter<W> {
    type Error = io::Error;

    fn write(&mut self, buf: &[u8]) -> Dispatch<usize, Self::Error> {
        Write::write(&mut self.0, buf).into()
    }

    fn flush(&mut self) -> Dispatch<(), Self::Error> {
        Write::flush(&mut self.0).into()
    }
}

// Hand the adapter itself to code expecting std traits. Structural absence
// surfaces as io::ErrorKind::Unsupported through the StreamError conversion.

impl<D> Read for RawStreamAdapter<D>
where
    D: Delegate,
    D::Error: Send + Sync + 'static,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf)?)
    }
}

impl<D> Write for RawStreamAdapter<D>
where
    D: Delegate,
    D::Error: Send + Sync + 'static,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RawStreamAdapter::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(RawStreamAdapter::flush(self)?)
    }
}

impl<D> Seek for RawStreamAdapter<D>
where
    D: Delegate,
    D::Error: Send + Sync + 'static,
{
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let pos = match pos {
            io::SeekFrom::Start(n) => SeekFrom::Start(n),
            io::SeekFrom::End(n) => SeekFrom::End(n),
            io::SeekFrom::Current(n) => SeekFrom::Current(n),
        };
        Ok(RawStreamAdapter::seek(self, pos)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Capability;

    #[test]
    fn test_from_reader_exposes_only_read() {
        let mut delegate = FromReader::new(&b"abc"[..]);
        assert!(matches!(delegate.read(2), Dispatch::Native(Ok(ref b)) if b == b"ab"));
        assert!(matches!(delegate.write(b"x"), Dispatch::Absent));
        assert!(matches!(delegate.seek(SeekFrom::Start(0)), Dispatch::Absent));
    }

    #[test]
    fn test_from_writer_collects_writes() {
        let mut adapter = RawStreamAdapter::new(FromWriter::new(Vec::new()));
        RawStreamAdapter::write(&mut adapter, b"xx").unwrap();
        RawStreamAdapter::write(&mut adapter, b"\nyy").unwrap();
        assert_eq!(adapter.into_inner().into_inner(), b"xx\nyy");
    }

    #[test]
    fn test_std_read_through_adapter() {
        let mut adapter = RawStreamAdapter::new(FromReader::new(&b"xx\nxx"[..]));
        let mut buf = [0u8; 3];
        let n = Read::read(&mut adapter, &mut buf).unwrap();
        assert_eq!(n, 3);
        assert_eq!(&buf, b"xx\n");
    }

    #[test]
    fn test_std_seek_through_adapter_reports_unsupported() {
        let mut adapter = RawStreamAdapter::new(FromReader::new(&b"xx"[..]));
        let err = Seek::seek(&mut adapter, io::SeekFrom::Start(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        assert_eq!(
            err.to_string(),
            Capability::Seek.to_string(),
        );
    }
}
