use crate::error::{StreamError, StreamResult};
use crate::stream::Stream;
use std::io::Read;
use toml;

/// Configuration describing a stream to instantiate.
///
/// Configuration strings describe the stream contents using the
/// [`toml`](https://toml.io/en/) format:
///
/// ```
/// use tempbody::config::StreamConfig;
///
/// let mut stream = StreamConfig::from_str("content = 'hello'")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(stream.to_text(), "hello");
/// ```
///
/// This is the dynamically-typed construction path: a `content` entry
/// holding anything but a string is rejected with
/// [`StreamError::InvalidInput`] naming the offending type.
#[derive(Debug)]
pub struct StreamConfig {
    contents: String,
}

impl StreamConfig {
    /// Parse a stream configuration from a toml string.
    pub fn from_str(s: &str) -> StreamResult<Self> {
        match toml::from_str::<toml::Value>(s) {
            Ok(value) => Self::from_toml(value),
            Err(e) => Err(StreamError::Toml(e)),
        }
    }

    /// Parse a stream configuration from a toml file.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> StreamResult<Self> {
        let mut file = std::fs::File::open(&path)?;
        let mut s = String::from("");
        file.read_to_string(&mut s)?;
        Self::from_str(s.as_str())
    }

    /// Parse a stream configuration from a toml value object.
    ///
    /// The value must be a table with a `content` entry holding a string.
    pub fn from_toml(value: toml::Value) -> StreamResult<Self> {
        let table = match &value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(StreamError::InvalidInput(String::from(
                    value.type_str(),
                )))
            }
        };

        match table.get("content") {
            Some(toml::Value::String(s)) => Ok(StreamConfig {
                contents: s.clone(),
            }),
            Some(other) => Err(StreamError::InvalidInput(String::from(
                other.type_str(),
            ))),
            None => {
                Err(StreamError::InvalidInput(String::from("nothing")))
            }
        }
    }

    /// Build the configured stream.
    pub fn build(self) -> StreamResult<Stream> {
        Stream::from_contents(self.contents)
    }
}
