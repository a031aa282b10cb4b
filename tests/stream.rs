use std::io::SeekFrom;
use tempbody::{MemoryResource, Stream, StreamError};

#[test]
fn produce_then_consume_repeatedly() {
    let mut body = Stream::from_contents("status=ok").unwrap();

    // A consumer materializes the payload, then a second consumer rewinds
    // and reads it again: the body is a seekable byte source, not a pipe.
    assert_eq!(body.get_contents().unwrap(), b"status=ok");
    body.rewind().unwrap();
    assert_eq!(body.get_contents().unwrap(), b"status=ok");
}

#[test]
fn write_in_chunks_then_consume() {
    let mut body = Stream::from_contents("").unwrap();

    assert_eq!(body.write(b"hello ").unwrap(), 6);
    assert_eq!(body.write(b"world").unwrap(), 5);
    assert_eq!(body.to_text(), "hello world");
    assert_eq!(body.size(), Some(11));
}

#[test]
fn whence_semantics() {
    let mut body = Stream::from_contents("abcdefgh").unwrap();

    assert_eq!(body.seek(SeekFrom::Start(4)).unwrap(), 4);
    assert_eq!(body.seek(SeekFrom::Current(-2)).unwrap(), 2);
    assert_eq!(body.seek(SeekFrom::End(-3)).unwrap(), 5);
    assert_eq!(body.tell().unwrap(), 5);
    assert_eq!(body.read(8).unwrap(), b"fgh");
}

#[test]
fn detached_handle_keeps_its_position() {
    let mut first = Stream::from_contents("abcdef").unwrap();
    first.seek(SeekFrom::Start(2)).unwrap();

    // The handle moves to a new owner as-is: position preserved.
    let handle = first.detach().unwrap();
    let mut second = Stream::new(handle);

    assert_eq!(second.tell().unwrap(), 2);
    assert_eq!(second.get_contents().unwrap(), b"cdef");
    assert!(second.is_readable());
    assert!(second.is_writable());
    assert!(second.is_seekable());
}

#[test]
fn detached_stream_behaves_as_closed() {
    let mut body = Stream::from_contents("abcdef").unwrap();
    drop(body.detach());

    assert!(!body.is_readable());
    assert!(!body.is_writable());
    assert!(!body.is_seekable());
    assert!(body.eof());
    assert_eq!(body.to_text(), "");
    assert!(body.metadata().is_none());
    assert!(matches!(body.read(1), Err(StreamError::NotOpen)));
}

#[test]
fn adopted_read_only_handle() {
    let mut body = Stream::new(Box::new(MemoryResource::open("r")));

    assert!(body.is_readable());
    assert!(!body.is_writable());
    assert!(matches!(
        body.write(b"x"),
        Err(StreamError::NotWritable)
    ));
}

#[test]
fn try_from_byte_content() {
    let mut from_str = Stream::try_from("payload").unwrap();
    let mut from_bytes = Stream::try_from(&b"payload"[..]).unwrap();

    assert_eq!(from_str.to_text(), from_bytes.to_text());
}

#[test]
fn metadata_of_fresh_body() {
    let body = Stream::from_contents("x").unwrap();
    let meta = body.metadata().unwrap();

    assert_eq!(meta.mode, "w+b");
    assert!(meta.seekable);
    assert_eq!(body.metadata_value("uri").unwrap().to_string(), meta.uri);
}
