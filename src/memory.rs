use crate::metadata::Metadata;
use crate::resource::{mode_reads, mode_writes, Resource};
use std::io::{Error, ErrorKind, Read, Result, Seek, SeekFrom, Write};

/// A [`Resource`] implementation in a `Vec<u8>`.
///
/// This is the backing used to promote raw byte content into a stream when
/// the `tempfile` feature is disabled. The position is kept within
/// `[0, len]`: seeking past the end of the buffer is refused, matching the
/// temporary-storage backing this stands in for.
pub struct MemoryResource {
    vec: Vec<u8>,
    pos: usize,
    eof: bool,
    mode: String,
}

impl MemoryResource {
    /// Open an empty in-memory resource with an fopen-style `mode`.
    pub fn open(mode: &str) -> Self {
        MemoryResource {
            vec: Vec::new(),
            pos: 0usize,
            eof: false,
            mode: String::from(mode),
        }
    }
}

impl Read for MemoryResource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if !mode_reads(&self.mode) {
            return Err(Error::new(
                ErrorKind::PermissionDenied,
                "resource opened without read mode",
            ));
        }

        let buf_len = buf.len();
        let vec_len = self.vec.len();
        let available = vec_len - self.pos;

        if buf_len > available {
            // The read attempt observed the end of available data.
            self.eof = true;
        }
        let len = buf_len.min(available);

        let range = self.pos..(self.pos + len);
        buf[0..len].copy_from_slice(&self.vec[range]);
        self.pos += len;
        Ok(len)
    }
}

impl Write for MemoryResource {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if !mode_writes(&self.mode) {
            return Err(Error::new(
                ErrorKind::PermissionDenied,
                "resource opened without write mode",
            ));
        }

        let buf_len = buf.len();
        if (self.vec.len() - self.pos) < buf_len {
            self.vec.resize(self.pos + buf_len, 0u8);
        }

        let range = self.pos..(self.pos + buf_len);
        self.vec[range].copy_from_slice(buf);
        self.pos += buf_len;
        Ok(buf_len)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Seek for MemoryResource {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let max = self.vec.len() as i64;
        let pos = match pos {
            SeekFrom::Start(pos) => pos as i64,
            SeekFrom::End(pos) => max + pos,
            SeekFrom::Current(pos) => self.pos as i64 + pos,
        };
        if pos < 0 || pos > max {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "position outside of resource bounds",
            ));
        }

        self.pos = pos as usize;
        self.eof = false;
        Ok(pos as u64)
    }
}

impl Resource for MemoryResource {
    fn metadata(&self) -> Option<Metadata> {
        Some(Metadata {
            wrapper_type: String::from("memory"),
            stream_type: String::from("temp"),
            mode: self.mode.clone(),
            unread_bytes: 0,
            seekable: true,
            uri: String::from("memory://temp"),
        })
    }

    fn len(&self) -> Option<u64> {
        Some(self.vec.len() as u64)
    }

    fn eof(&self) -> bool {
        self.eof
    }
}
