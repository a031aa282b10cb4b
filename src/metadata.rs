/// Metadata snapshot reported by a [`Resource`](crate::Resource).
///
/// The six fields below are the recognized entries of the metadata mapping;
/// callers may rely on exactly these being present for a freshly-constructed
/// content-backed [`Stream`](crate::Stream).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metadata {
    /// Kind of backing the resource lives on, e.g. `"os"` or `"memory"`.
    pub wrapper_type: String,
    /// Kind of stream the backing exposes, e.g. `"temp"`.
    pub stream_type: String,
    /// The fopen-style mode the resource was opened with, e.g. `"w+b"`.
    pub mode: String,
    /// Bytes buffered by the resource but not yet consumed.
    pub unread_bytes: u64,
    /// Whether the resource supports repositioning.
    pub seekable: bool,
    /// Identifier of the backing resource, e.g. a temporary file path.
    pub uri: String,
}

/// A single metadata entry value, as returned by keyed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetaValue {
    Str(String),
    Uint(u64),
    Bool(bool),
}

impl std::fmt::Display for MetaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaValue::Str(s) => write!(f, "{}", s),
            MetaValue::Uint(n) => write!(f, "{}", n),
            MetaValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Metadata {
    /// Look up a single entry by key.
    ///
    /// Returns `None` for keys outside the recognized set.
    pub fn get(&self, key: &str) -> Option<MetaValue> {
        match key {
            "wrapper_type" => Some(MetaValue::Str(self.wrapper_type.clone())),
            "stream_type" => Some(MetaValue::Str(self.stream_type.clone())),
            "mode" => Some(MetaValue::Str(self.mode.clone())),
            "unread_bytes" => Some(MetaValue::Uint(self.unread_bytes)),
            "seekable" => Some(MetaValue::Bool(self.seekable)),
            "uri" => Some(MetaValue::Str(self.uri.clone())),
            _ => None,
        }
    }

    /// The recognized keys, in reporting order.
    pub fn keys() -> [&'static str; 6] {
        [
            "wrapper_type",
            "stream_type",
            "mode",
            "unread_bytes",
            "seekable",
            "uri",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{MetaValue, Metadata};

    fn metadata() -> Metadata {
        Metadata {
            wrapper_type: String::from("memory"),
            stream_type: String::from("temp"),
            mode: String::from("w+b"),
            unread_bytes: 0,
            seekable: true,
            uri: String::from("memory://temp"),
        }
    }

    #[test]
    fn test_known_keys() {
        let meta = metadata();
        for key in Metadata::keys() {
            assert!(meta.get(key).is_some());
        }
        assert_eq!(meta.get("mode"), Some(MetaValue::Str("w+b".into())));
        assert_eq!(meta.get("seekable"), Some(MetaValue::Bool(true)));
        assert_eq!(meta.get("unread_bytes"), Some(MetaValue::Uint(0)));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(metadata().get("blocked"), None);
    }
}
