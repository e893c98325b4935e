//! Total raw-stream adapter over partial stream-like delegates.
//!
//! Many byte-stream objects implement only a slice of the canonical
//! raw-stream surface: a socket-like source may offer nothing but a
//! primitive read, a sink nothing but a primitive write. This crate wraps
//! any such partial object in a [`RawStreamAdapter`] that makes the whole
//! operation set callable, synthesizing the missing operations from the
//! primitives the object does have.
//!
//! # Architecture
//!
//! The crate is a port-and-adapter pair:
//!
//! - **[`Delegate`]** is the port: one trait method per raw-stream
//!   operation, every method defaulting to [`Dispatch::Absent`]. A delegate
//!   overrides exactly what its underlying object natively supports.
//! - **[`RawStreamAdapter`]** is the adapter: for each call it probes the
//!   delegate first and, on structural absence, applies a documented
//!   fallback (byte-at-a-time line reads, chunked read-all, per-line
//!   writes, fixed answers for the capability queries, an error for
//!   operations that cannot be synthesized).
//!
//! Structural absence and runtime failure are distinct: a delegate that has
//! an operation and fails in it gets its error propagated verbatim as
//! [`StreamError::Stream`]; the fallback engages only for operations the
//! delegate never declared.
//!
//! # Quick Start
//!
//! ```ignore
//! use rawio_wrap::{FromReader, RawStreamAdapter};
//!
//! let mut stream = RawStreamAdapter::new(FromReader::new(&b"xx\nxx"[..]));
//!
//! // FromReader only exposes the primitive read; the adapter provides the
//! // rest of the raw-stream surface on top of it.
//! assert_eq!(stream.read_lines(None)?, vec![b"xx\n".to_vec(), b"xx".to_vec()]);
//! assert!(!stream.is_seekable()?);
//! stream.close()?;
//! assert!(stream.is_closed()?);
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::io` bridges - `Delegate` for `std::fs::File`,
//!   the [`FromReader`]/[`FromWriter`] delegates, and
//!   `std::io::{Read, Write, Seek}` for the adapter.
//! - `log`: trace-level records when a fallback path engages.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod adapter;
mod delegate;
mod error;

#[cfg(feature = "std")]
mod std_io;

pub use adapter::RawStreamAdapter;
pub use delegate::{Delegate, Dispatch, SeekFrom};
pub use error::{Capability, StreamError};

#[cfg(feature = "std")]
pub use std_io::{FromReader, FromWriter};
