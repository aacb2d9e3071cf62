use std::io::{self, Read};

use crate::{pull::Pull, source::PullSource};

/// A [`Read`] over a source of byte chunks.
///
/// Chunks are pulled only when the caller asks for more bytes than are
/// buffered, so wrapping a lazy sequence keeps it lazy.
pub struct ChunkReader<S> {
    source: Option<S>,
    leftover: Vec<u8>,
    offset: usize,
}

impl<S> ChunkReader<S>
where
    S: PullSource<Vec<u8>>,
{
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            leftover: Vec::new(),
            offset: 0,
        }
    }
}

impl<S> Read for ChunkReader<S>
where
    S: PullSource<Vec<u8>>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.offset >= self.leftover.len() {
            let Some(source) = self.source.as_mut() else {
                return Ok(0);
            };
            match source.pull() {
                Pull::Item(chunk) => {
                    self.leftover = chunk;
                    self.offset = 0;
                }
                Pull::End => {
                    self.source = None;
                    return Ok(0);
                }
            }
        }
        let available = &self.leftover[self.offset..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.offset += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_iter;

    #[test]
    fn test_reads_across_chunks() {
        let chunks = vec![b"ab".to_vec(), Vec::new(), b"cde".to_vec()];
        let mut reader = ChunkReader::new(from_iter(chunks));
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "abcde");
    }

    #[test]
    fn test_small_buffer() {
        let mut reader = ChunkReader::new(from_iter(vec![b"hello".to_vec()]));
        let mut buf = [0u8; 2];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"he");
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }
}
