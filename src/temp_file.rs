use crate::metadata::Metadata;
use crate::resource::Resource;
use std::fs::{File, OpenOptions};
use std::io::{Error, ErrorKind, Read, Result, Seek, SeekFrom, Write};
use tempfile::{NamedTempFile, TempPath};

/// A [`Resource`] implementation backed by a temporary file.
///
/// The file is created by [`tempfile`] and deleted when the resource is
/// dropped. The position is kept within `[0, len]`: seeking past the end is
/// refused so the resource behaves like the in-memory backing it replaces,
/// not like a sparse file.
pub struct TempFileResource {
    file: File,
    path: TempPath,
    mode: String,
    eof: bool,
}

impl TempFileResource {
    /// Open a fresh temporary file with an fopen-style `mode`.
    ///
    /// The file itself is created read-write by the OS; `mode` governs the
    /// handle reopened on it and the capabilities the resource reports.
    pub fn open(mode: &str) -> Result<Self> {
        let path = NamedTempFile::new()?.into_temp_path();
        let file = open_options(mode)?.open(&path)?;
        Ok(TempFileResource {
            file,
            path,
            mode: String::from(mode),
            eof: false,
        })
    }

    fn end(&self) -> Result<i64> {
        Ok(self.file.metadata()?.len() as i64)
    }
}

/// Translate an fopen-style mode string into [`OpenOptions`].
fn open_options(mode: &str) -> Result<OpenOptions> {
    let mut options = OpenOptions::new();
    match mode.chars().next() {
        Some('r') => {
            options.read(true);
        }
        Some('w') => {
            options.write(true).truncate(true);
        }
        Some('a') => {
            options.append(true);
        }
        // The temporary file always exists already, so exclusive and
        // cautious creation collapse into plain writing.
        Some('x') | Some('c') => {
            options.write(true);
        }
        _ => {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("unsupported open mode: {:?}", mode),
            ));
        }
    }
    if mode.contains('+') {
        options.read(true).write(true);
    }
    Ok(options)
}

impl Read for TempFileResource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let len = self.file.read(buf)?;
        if len < buf.len() {
            // A short read on a regular file means the end was observed.
            self.eof = true;
        }
        Ok(len)
    }
}

impl Write for TempFileResource {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()
    }
}

impl Seek for TempFileResource {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let max = self.end()?;
        let pos = match pos {
            SeekFrom::Start(pos) => pos as i64,
            SeekFrom::End(pos) => max + pos,
            SeekFrom::Current(pos) => {
                self.file.stream_position()? as i64 + pos
            }
        };
        if pos < 0 || pos > max {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "position outside of resource bounds",
            ));
        }

        let pos = self.file.seek(SeekFrom::Start(pos as u64))?;
        self.eof = false;
        Ok(pos)
    }
}

impl Resource for TempFileResource {
    fn metadata(&self) -> Option<Metadata> {
        // Metadata is unavailable once the file cannot be stat'ed anymore.
        self.file.metadata().ok()?;
        Some(Metadata {
            wrapper_type: String::from("os"),
            stream_type: String::from("temp"),
            mode: self.mode.clone(),
            unread_bytes: 0,
            seekable: true,
            uri: self.path.display().to_string(),
        })
    }

    fn len(&self) -> Option<u64> {
        self.file.metadata().ok().map(|m| m.len())
    }

    fn eof(&self) -> bool {
        self.eof
    }
}

#[cfg(test)]
mod tests {
    use super::TempFileResource;
    use crate::resource::Resource;
    use std::io::{Read, Seek, SeekFrom, Write};

    #[test]
    fn test_write_read_round() {
        let mut t = TempFileResource::open("w+b").unwrap();
        assert_eq!(t.write(b"abcdef").unwrap(), 6);
        assert_eq!(t.len(), Some(6));

        t.seek(SeekFrom::Start(0)).unwrap();
        let mut buf = [0u8; 6];
        assert_eq!(t.read(&mut buf).unwrap(), 6);
        assert_eq!(&buf, b"abcdef");
        assert!(!t.eof());
    }

    #[test]
    fn test_eof_set_by_read_only() {
        let mut t = TempFileResource::open("w+b").unwrap();
        t.write(b"ab").unwrap();
        t.seek(SeekFrom::End(0)).unwrap();
        assert!(!t.eof());

        let mut buf = [0u8; 1];
        assert_eq!(t.read(&mut buf).unwrap(), 0);
        assert!(t.eof());

        t.seek(SeekFrom::Start(0)).unwrap();
        assert!(!t.eof());
    }

    #[test]
    fn test_seek_out_of_bounds() {
        let mut t = TempFileResource::open("w+b").unwrap();
        t.write(b"ab").unwrap();
        assert!(t.seek(SeekFrom::End(1)).is_err());
        assert!(t.seek(SeekFrom::Current(-8)).is_err());
        assert_eq!(t.seek(SeekFrom::Current(0)).unwrap(), 2);
    }

    #[test]
    fn test_read_only_mode() {
        let mut t = TempFileResource::open("r").unwrap();
        assert!(t.write(b"x").is_err());
        assert_eq!(t.metadata().unwrap().mode, "r");
    }

    #[test]
    fn test_file_removed_on_drop() {
        let t = TempFileResource::open("w+b").unwrap();
        let path = t.path.to_path_buf();
        assert!(path.exists());
        drop(t);
        assert!(!path.exists());
    }
}
