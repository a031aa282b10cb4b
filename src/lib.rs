//! Seekable byte streams over temporary storage.
//!
//! This crate provides [`Stream`], a byte-stream abstraction wrapping an
//! underlying temporary storage resource behind a uniform contract:
//! attach/detach lifecycle, capability introspection, positional access,
//! bulk transfer and structured metadata retrieval. It is meant to back
//! higher-level message objects, responses and request bodies, that need a
//! lazily-materialized, seekable body without committing to a specific
//! backing store.
//!
//! Raw byte content is promoted into an internal temporary resource, a
//! [`tempfile`](https://docs.rs/tempfile)-managed file by default or an
//! in-memory buffer when the `tempfile` feature is disabled:
//!
//! ```
//! use tempbody::Stream;
//!
//! let mut body = Stream::from_contents("hello world").unwrap();
//! assert!(body.is_readable() && body.is_writable() && body.is_seekable());
//! assert_eq!(body.to_text(), "hello world");
//! ```
//!
//! Alternatively, a stream adopts any already-open [`Resource`] handle and
//! negotiates its capabilities from the handle's reported open mode and
//! metadata. Ownership is exclusive: the handle leaves the stream through
//! [`Stream::detach()`] (handed to the caller) or [`Stream::close()`]
//! (disposed in place), after which the stream is permanently inert.

mod error;
pub use error::{StreamError, StreamResult};

mod metadata;
pub use metadata::{MetaValue, Metadata};

mod resource;
pub use resource::Resource;

mod stream;
pub use stream::Stream;

mod memory;
pub use memory::MemoryResource;

#[cfg(feature = "tempfile")]
mod temp_file;
#[cfg(feature = "tempfile")]
pub use temp_file::TempFileResource;

/// Production of JSON stream bodies.
#[cfg(feature = "json")]
mod json;

/// Module to instantiate a stream from a configuration string or file.
#[cfg(feature = "config")]
pub mod config;
