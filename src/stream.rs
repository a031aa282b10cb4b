use crate::error::{StreamError, StreamResult};
#[cfg(not(feature = "tempfile"))]
use crate::memory::MemoryResource;
use crate::metadata::{MetaValue, Metadata};
use crate::resource::{mode_reads, mode_writes, Resource};
#[cfg(feature = "tempfile")]
use crate::temp_file::TempFileResource;
use std::io::{Read, Seek, SeekFrom, Write};

/// A seekable byte stream over an owned backing resource.
///
/// A `Stream` owns at most one open [`Resource`] handle. Its capability
/// flags are negotiated once, when the resource is attached, from the
/// resource's reported open mode and metadata; they never change while the
/// resource stays attached and all read false once it is gone.
///
/// The resource leaves the stream in one of two ways: [`detach()`] hands the
/// live handle to the caller, who becomes responsible for it, while
/// [`close()`] disposes of it in place. Either way the stream is permanently
/// inert afterwards: every operation that needs an open resource fails with
/// [`StreamError::NotOpen`].
///
/// ```
/// use tempbody::Stream;
///
/// let mut body = Stream::from_contents("hello").unwrap();
/// assert_eq!(body.tell().unwrap(), 0);
/// assert_eq!(body.to_text(), "hello");
/// ```
///
/// [`detach()`]: Stream::detach
/// [`close()`]: Stream::close
pub struct Stream {
    resource: Option<Box<dyn Resource>>,
    readable: bool,
    writable: bool,
    seekable: bool,
}

impl Stream {
    /// Adopt an already-open resource handle as-is.
    ///
    /// The handle's current position is preserved. Capabilities are derived
    /// here, once: writable if the reported mode contains any of the write,
    /// append, create or extended indicators; readable if it contains a read
    /// or extended indicator; seekable if the metadata says so. A resource
    /// whose metadata cannot be read yields a stream that is neither
    /// readable, writable nor seekable.
    pub fn new(resource: Box<dyn Resource>) -> Self {
        let (readable, writable, seekable) = match resource.metadata() {
            Some(meta) => (
                mode_reads(&meta.mode),
                mode_writes(&meta.mode),
                meta.seekable,
            ),
            None => (false, false, false),
        };
        Stream {
            resource: Some(resource),
            readable,
            writable,
            seekable,
        }
    }

    /// Promote raw byte content into a stream.
    ///
    /// Opens a writable, seekable temporary resource, copies `contents` into
    /// it and rewinds the position to the start. The content may be empty.
    pub fn from_contents<C: AsRef<[u8]>>(contents: C) -> StreamResult<Self> {
        let mut resource = Self::temp_resource()?;
        resource.write_all(contents.as_ref())?;
        resource.seek(SeekFrom::Start(0))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = contents.as_ref().len(),
            "promoted contents into a temporary resource"
        );
        Ok(Self::new(resource))
    }

    fn temp_resource() -> StreamResult<Box<dyn Resource>> {
        #[cfg(feature = "tempfile")]
        {
            Ok(Box::new(TempFileResource::open("w+b")?))
        }
        #[cfg(not(feature = "tempfile"))]
        {
            Ok(Box::new(MemoryResource::open("w+b")))
        }
    }

    /// Whether the attached resource was opened readable.
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Whether the attached resource was opened writable.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Whether the attached resource supports repositioning.
    pub fn is_seekable(&self) -> bool {
        self.seekable
    }

    /// Current offset into the resource.
    pub fn tell(&mut self) -> StreamResult<u64> {
        self.resource
            .as_mut()
            .ok_or(StreamError::NotOpen)?
            .stream_position()
            .map_err(StreamError::Position)
    }

    /// Move the position to `pos` and return the new offset.
    ///
    /// Fails when the underlying seek is refused, notably when seeking past
    /// the end of a resource that disallows it.
    pub fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        let resource =
            self.resource.as_mut().ok_or(StreamError::NotOpen)?;
        resource.seek(pos).map_err(|source| StreamError::Seek {
            offset: seek_offset(pos),
            source,
        })
    }

    /// Reset the position to the start of the resource.
    pub fn rewind(&mut self) -> StreamResult<()> {
        let resource =
            self.resource.as_mut().ok_or(StreamError::NotOpen)?;
        resource
            .seek(SeekFrom::Start(0))
            .map(|_| ())
            .map_err(StreamError::Rewind)
    }

    /// End-of-data indicator.
    ///
    /// True once detached. While attached, reflects the resource's own
    /// indicator: it registers only after a read attempt has observed the
    /// end of available data, not on a bare position check.
    pub fn eof(&self) -> bool {
        match self.resource.as_ref() {
            None => true,
            Some(resource) => resource.eof(),
        }
    }

    /// Write `data` at the current position, advancing it.
    ///
    /// Returns the number of bytes written.
    pub fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        let writable = self.writable;
        let resource =
            self.resource.as_mut().ok_or(StreamError::NotOpen)?;
        if !writable {
            return Err(StreamError::NotWritable);
        }
        resource.write_all(data).map_err(StreamError::Write)?;
        Ok(data.len())
    }

    /// Read up to `length` bytes from the current position, advancing it.
    ///
    /// Returns fewer bytes, or none, at the end of available data.
    pub fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        let readable = self.readable;
        let resource =
            self.resource.as_mut().ok_or(StreamError::NotOpen)?;
        if !readable {
            return Err(StreamError::NotReadable);
        }

        let mut buf = vec![0u8; length];
        let mut len = 0usize;
        while len < length {
            match resource.read(&mut buf[len..]).map_err(StreamError::Read)? {
                0 => break,
                n => len += n,
            }
        }
        buf.truncate(len);
        Ok(buf)
    }

    /// All bytes from the current position to the end, advancing the
    /// position to the end.
    pub fn get_contents(&mut self) -> StreamResult<Vec<u8>> {
        let resource =
            self.resource.as_mut().ok_or(StreamError::NotOpen)?;
        let mut buf = Vec::new();
        resource
            .read_to_end(&mut buf)
            .map_err(StreamError::Contents)?;
        Ok(buf)
    }

    /// The full contents as text, best effort.
    ///
    /// Rewinds to the start and returns everything as a lossy UTF-8 string.
    /// This conversion has no failure channel: any failure, and a detached
    /// stream, yield an empty string.
    pub fn to_text(&mut self) -> String {
        if self.resource.is_none() {
            return String::new();
        }
        match self.rewind().and_then(|_| self.get_contents()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }

    /// Total length of the resource in bytes.
    ///
    /// `None` once detached, or when the backing cannot report it. Does not
    /// move the position.
    pub fn size(&self) -> Option<u64> {
        self.resource.as_ref()?.len()
    }

    /// Hand the owned resource to the caller.
    ///
    /// The caller becomes responsible for its disposal. The stream clears
    /// all of its state and behaves exactly as closed afterwards. Calling
    /// again returns `None` and disposes of nothing.
    pub fn detach(&mut self) -> Option<Box<dyn Resource>> {
        self.readable = false;
        self.writable = false;
        self.seekable = false;
        #[cfg(feature = "tracing")]
        if self.resource.is_some() {
            tracing::debug!("resource detached from stream");
        }
        self.resource.take()
    }

    /// Dispose of the owned resource.
    ///
    /// Goes through the same path as [`detach()`](Stream::detach) and drops
    /// the result. A no-op on an already-detached stream; never fails.
    pub fn close(&mut self) {
        drop(self.detach());
    }

    /// The full metadata mapping reported by the resource.
    ///
    /// `None` once detached.
    pub fn metadata(&self) -> Option<Metadata> {
        self.resource.as_ref()?.metadata()
    }

    /// A single metadata entry by key.
    ///
    /// `None` once detached, and for keys outside the recognized set.
    pub fn metadata_value(&self, key: &str) -> Option<MetaValue> {
        self.metadata()?.get(key)
    }
}

/// The offset an application asked for, for failure reporting.
fn seek_offset(pos: SeekFrom) -> i64 {
    match pos {
        SeekFrom::Start(offset) => offset as i64,
        SeekFrom::End(offset) | SeekFrom::Current(offset) => offset,
    }
}

impl From<Box<dyn Resource>> for Stream {
    fn from(resource: Box<dyn Resource>) -> Self {
        Stream::new(resource)
    }
}

impl TryFrom<&str> for Stream {
    type Error = StreamError;

    fn try_from(contents: &str) -> StreamResult<Self> {
        Stream::from_contents(contents)
    }
}

impl TryFrom<&[u8]> for Stream {
    type Error = StreamError;

    fn try_from(contents: &[u8]) -> StreamResult<Self> {
        Stream::from_contents(contents)
    }
}
