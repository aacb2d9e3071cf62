use std::{
    cell::RefCell,
    collections::BTreeMap,
    io::{self, Read},
};

use crate::{
    error::Result,
    source::{from_iter, BoxSource, PullSource},
};

use super::{check_key, copy_chunks, decode_line, join_prefix, ContentStore, DEFAULT_CHUNK_SIZE};

/// Ordered in-memory store.
///
/// Objects are keyed by `(namespace, key)`. Listing a namespace yields its
/// keys in ascending order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RefCell<BTreeMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }

    fn not_found(key: &str, namespace: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no object {}", join_prefix(namespace, key)),
        )
    }
}

impl ContentStore for MemoryStore {
    fn list(&self, namespace: &str) -> Result<Vec<String>> {
        Ok(self
            .objects
            .borrow()
            .keys()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, key)| key.clone())
            .collect())
    }

    fn read_bytes(&self, key: &str, namespace: &str) -> Result<Vec<u8>> {
        check_key(key)?;
        self.objects
            .borrow()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| Self::not_found(key, namespace).into())
    }

    fn write_bytes(&self, key: &str, bytes: &[u8], namespace: &str) -> Result<()> {
        check_key(key)?;
        self.objects
            .borrow_mut()
            .insert((namespace.to_string(), key.to_string()), bytes.to_vec());
        Ok(())
    }

    fn iterate_lines(&self, key: &str, namespace: &str) -> Result<BoxSource<String>> {
        let bytes = self.read_bytes(key, namespace)?;
        let lines: Vec<String> = bytes
            .split_inclusive(|b| *b == b'\n')
            .enumerate()
            .filter_map(|(i, line)| match decode_line(line.to_vec()) {
                Ok(line) => Some(line),
                Err(e) => {
                    log::warn!("{key}:{}: {e}, skipping line", i + 1);
                    None
                }
            })
            .collect();
        Ok(from_iter(lines).boxed())
    }

    fn write_stream(&self, reader: &mut dyn Read, key: &str, namespace: &str) -> Result<u64> {
        check_key(key)?;
        let mut buf = Vec::new();
        let written = copy_chunks(reader, &mut buf, DEFAULT_CHUNK_SIZE)?;
        self.write_bytes(key, &buf, namespace)?;
        Ok(written)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
