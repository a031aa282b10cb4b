use crate::error::StreamResult;
use crate::stream::Stream;
use serde::Serialize;

impl Stream {
    /// Serialize `value` to JSON and promote the result into a stream.
    ///
    /// This is the write-once body producer path: the payload is written at
    /// construction time and the stream comes back rewound to the start,
    /// ready for a consumer to materialize.
    pub fn from_json<T: Serialize>(value: &T) -> StreamResult<Self> {
        let contents = serde_json::to_vec(value)?;
        Stream::from_contents(contents)
    }
}

#[cfg(test)]
mod tests {
    use crate::Stream;
    use serde_json::json;

    #[test]
    fn test_body_is_json_encoded() {
        let data = json!({ "a": "alpha", "b": [1, 2] });

        let mut stream = Stream::from_json(&data).unwrap();

        assert_eq!(stream.tell().unwrap(), 0);
        assert_eq!(stream.to_text(), serde_json::to_string(&data).unwrap());
    }

    #[test]
    fn test_json_stream_is_seekable() {
        let stream = Stream::from_json(&json!({ "k": "v" })).unwrap();

        assert!(stream.is_readable());
        assert!(stream.is_seekable());
    }
}
