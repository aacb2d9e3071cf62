//! Storage capability used by file-backed generators and consumers.
//!
//! The pipeline core never talks to a filesystem or object store directly. It
//! goes through [`ContentStore`], which addresses objects by `(key, namespace)`.
//!
//! Implementations:
//! - [`FsStore`]: local filesystem, one folder per namespace
//! - [`MemoryStore`]: in-memory map, for tests and small pipelines

use std::{
    io::{self, Read},
    string::FromUtf8Error,
};

use crate::{
    error::{Error, Result},
    source::BoxSource,
};

mod fs;
mod memory;
mod reader;

pub use fs::FsStore;
pub use memory::MemoryStore;
pub use reader::ChunkReader;

/// Default chunk size for streamed writes.
pub const DEFAULT_CHUNK_SIZE: usize = 16384;

/// A keyed text/bytes store.
pub trait ContentStore {
    /// Keys stored under `namespace`, in ascending order.
    fn list(&self, namespace: &str) -> Result<Vec<String>>;

    fn read_bytes(&self, key: &str, namespace: &str) -> Result<Vec<u8>>;

    fn write_bytes(&self, key: &str, bytes: &[u8], namespace: &str) -> Result<()>;

    /// Read an object as UTF-8 text.
    fn read_text(&self, key: &str, namespace: &str) -> Result<String> {
        Ok(String::from_utf8(self.read_bytes(key, namespace)?)?)
    }

    fn write_text(&self, key: &str, text: &str, namespace: &str) -> Result<()> {
        self.write_bytes(key, text.as_bytes(), namespace)
    }

    /// Lazily iterate over the lines of an object, without line terminators.
    ///
    /// Each call starts a new pass from the first line.
    fn iterate_lines(&self, key: &str, namespace: &str) -> Result<BoxSource<String>>;

    /// Copy everything `reader` produces into an object, in fixed-size chunks.
    ///
    /// Returns the number of bytes written.
    fn write_stream(&self, reader: &mut dyn Read, key: &str, namespace: &str) -> Result<u64>;

    /// Store name for logging
    fn name(&self) -> &str;
}

/// Join a base prefix and a prefix, inserting `/` only when neither side
/// provides one.
pub fn join_prefix(base: &str, prefix: &str) -> String {
    let sep = if !base.is_empty() && !prefix.is_empty() && !base.ends_with('/') && !prefix.starts_with('/')
    {
        "/"
    } else {
        ""
    };
    format!("{base}{sep}{prefix}")
}

pub(crate) fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "object key must not be empty",
        )));
    }
    Ok(())
}

/// Strip the line terminator from a raw line and decode it.
pub(crate) fn decode_line(mut buf: Vec<u8>) -> std::result::Result<String, FromUtf8Error> {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    String::from_utf8(buf)
}

/// Copy `reader` into `sink` in chunks of `chunk_size` bytes.
pub(crate) fn copy_chunks(
    reader: &mut dyn Read,
    sink: &mut dyn io::Write,
    chunk_size: usize,
) -> Result<u64> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        sink.write_all(&buf[..n])?;
        total += n as u64;
    }
    sink.flush()?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "", "")]
    #[case("base", "", "base")]
    #[case("", "news", "news")]
    #[case("base", "news", "base/news")]
    #[case("base/", "news", "base/news")]
    #[case("base", "/news", "base/news")]
    fn test_join_prefix(#[case] base: &str, #[case] prefix: &str, #[case] expected: &str) {
        assert_eq!(join_prefix(base, prefix), expected);
    }

    #[test]
    fn test_copy_chunks_counts_bytes() {
        let data = vec![7u8; 10_000];
        let mut sink = Vec::new();
        let n = copy_chunks(&mut data.as_slice(), &mut sink, 3000).unwrap();
        assert_eq!(n, 10_000);
        assert_eq!(sink, data);
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"ab\r\n".to_vec()).unwrap(), "ab");
        assert_eq!(decode_line(b"ab".to_vec()).unwrap(), "ab");
        assert!(decode_line(vec![0xff, b'\n']).is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(check_key("").is_err());
        assert!(check_key("a").is_ok());
    }
}
