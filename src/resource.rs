use crate::metadata::Metadata;

/// Combination of traits describing an open backing resource.
///
/// A [`Stream`](crate::Stream) owns exactly one `Box<dyn Resource>` at a
/// time. The trait composes the [`std::io`] traits the way the backing
/// resources implement them and adds the introspection the stream contract
/// needs. Disposal is `Drop`: dropping the box releases whatever the backend
/// holds (deletes the temporary file, frees the buffer), so every exit path
/// that owns a resource disposes of it.
pub trait Resource: std::io::Read + std::io::Write + std::io::Seek {
    /// Snapshot of the resource's reported metadata.
    ///
    /// Returns `None` when the metadata cannot be read, e.g. the resource
    /// died externally. Capability negotiation treats `None` conservatively:
    /// a stream attached to such a resource is neither readable, writable,
    /// nor seekable.
    fn metadata(&self) -> Option<Metadata>;

    /// Total length of the resource in bytes, `None` when unavailable.
    fn len(&self) -> Option<u64>;

    /// End-of-data indicator.
    ///
    /// Set only once a read attempt has observed the end of available data;
    /// a fresh position at the end does not register. Cleared by a
    /// successful seek.
    fn eof(&self) -> bool;
}

/// Whether an fopen-style mode grants reading: an `r` or extended (`+`)
/// indicator.
pub(crate) fn mode_reads(mode: &str) -> bool {
    mode.contains('r') || mode.contains('+')
}

/// Whether an fopen-style mode grants writing: any of the write, append,
/// create or extended indicators.
pub(crate) fn mode_writes(mode: &str) -> bool {
    mode.chars().any(|c| matches!(c, 'w' | 'a' | 'x' | 'c' | '+'))
}
