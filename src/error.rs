use thiserror::Error;

/// Failures surfaced by [`Stream`](crate::Stream) operations.
///
/// Every failure is a hard stop surfaced at the failing call; there are no
/// internal retries. The only operation absorbing failures instead of
/// returning them is [`Stream::to_text()`](crate::Stream::to_text), which has
/// no failure channel in its contract.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Construction was given a value that is neither byte content nor a
    /// resource handle. Carries the name of the offending type.
    #[error("stream must be constructed with byte content or a resource; {0} given")]
    InvalidInput(String),

    /// A resource-dependent operation was invoked after detach or close.
    #[error("stream is not open")]
    NotOpen,

    /// Read attempted on a resource that was not opened readable.
    #[error("stream is not readable")]
    NotReadable,

    /// Write attempted on a resource that was not opened writable.
    #[error("stream is not writable")]
    NotWritable,

    /// The underlying position query failed.
    #[error("unable to get position of stream")]
    Position(#[source] std::io::Error),

    /// The underlying seek failed, e.g. seeking past the end of a resource
    /// that disallows it.
    #[error("failed to seek to offset {offset}")]
    Seek {
        offset: i64,
        #[source]
        source: std::io::Error,
    },

    /// The underlying seek back to the start failed.
    #[error("failed to rewind stream")]
    Rewind(#[source] std::io::Error),

    /// The underlying full read failed, e.g. the resource was closed
    /// externally out from under the stream.
    #[error("failed to get contents of stream")]
    Contents(#[source] std::io::Error),

    /// The underlying read failed on a readable resource.
    #[error("failed to read from stream")]
    Read(#[source] std::io::Error),

    /// The underlying write failed on a writable resource.
    #[error("failed to write to stream")]
    Write(#[source] std::io::Error),

    /// I/O failure outside of an attached resource, e.g. opening or filling
    /// the internal temporary resource at construction time.
    #[error("i/o failure")]
    Io(#[from] std::io::Error),

    /// Error returned by `serde_json` while producing a JSON body.
    #[cfg(feature = "json")]
    #[error("failed to serialize stream contents")]
    Json(#[from] serde_json::Error),

    /// Error returned by the toml parser on a malformed configuration.
    #[cfg(feature = "config")]
    #[error("invalid stream configuration")]
    Toml(#[from] toml::de::Error),
}

/// Result type of [`tempbody`](crate) operations.
/// See [`StreamError`].
pub type StreamResult<T> = Result<T, StreamError>;
