use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Read},
    path::{Path, PathBuf},
};

use crate::{
    config::StoreConfig,
    error::Result,
    pull::Pull,
    source::{BoxSource, PullSource},
};

use super::{check_key, copy_chunks, decode_line, ContentStore};

/// Filesystem store rooted at a base folder.
///
/// A namespace is a sub-folder of the base folder, created on first use.
#[derive(Debug, Clone)]
pub struct FsStore {
    base_folder: PathBuf,
    chunk_size: usize,
    name: String,
}

impl FsStore {
    pub fn new(base_folder: impl Into<PathBuf>) -> Self {
        Self::from_config(&StoreConfig {
            base_folder: base_folder.into(),
            ..StoreConfig::default()
        })
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            name: format!("fs:{}", config.base_folder.display()),
            base_folder: config.base_folder.clone(),
            chunk_size: config.chunk_size,
        }
    }

    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    fn folder(&self, namespace: &str) -> PathBuf {
        if namespace.is_empty() {
            self.base_folder.clone()
        } else {
            self.base_folder.join(namespace)
        }
    }

    fn path(&self, key: &str, namespace: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.folder(namespace).join(key))
    }

    /// Like `path`, creating the namespace folder first.
    fn write_path(&self, key: &str, namespace: &str) -> Result<PathBuf> {
        check_key(key)?;
        let folder = self.folder(namespace);
        fs::create_dir_all(&folder)?;
        Ok(folder.join(key))
    }
}

impl ContentStore for FsStore {
    fn list(&self, namespace: &str) -> Result<Vec<String>> {
        let folder = self.folder(namespace);
        if !folder.is_dir() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(folder)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            keys.push(entry.file_name().to_string_lossy().into_owned());
        }
        keys.sort();
        Ok(keys)
    }

    fn read_bytes(&self, key: &str, namespace: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.path(key, namespace)?)?)
    }

    fn write_bytes(&self, key: &str, bytes: &[u8], namespace: &str) -> Result<()> {
        Ok(fs::write(self.write_path(key, namespace)?, bytes)?)
    }

    fn iterate_lines(&self, key: &str, namespace: &str) -> Result<BoxSource<String>> {
        let file = File::open(self.path(key, namespace)?)?;
        Ok(FileLines {
            reader: Some(BufReader::new(file)),
            key: key.to_string(),
            line_number: 0,
        }
        .boxed())
    }

    fn write_stream(&self, reader: &mut dyn Read, key: &str, namespace: &str) -> Result<u64> {
        let mut file = BufWriter::new(File::create(self.write_path(key, namespace)?)?);
        let written = copy_chunks(reader, &mut file, self.chunk_size)?;
        log::debug!("{}: wrote {written} bytes to {namespace}/{key}", self.name);
        Ok(written)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lines of an open file. The handle is released at end of file, on a read
/// error, or when the source is dropped. A line that is not valid UTF-8 is
/// logged and skipped.
struct FileLines {
    reader: Option<BufReader<File>>,
    key: String,
    line_number: usize,
}

impl PullSource<String> for FileLines {
    fn pull(&mut self) -> Pull<String> {
        loop {
            let Some(reader) = self.reader.as_mut() else {
                return Pull::End;
            };
            let mut buf = Vec::new();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.reader = None;
                    return Pull::End;
                }
                Ok(_) => {
                    self.line_number += 1;
                    match decode_line(buf) {
                        Ok(line) => return Pull::Item(line),
                        Err(e) => {
                            log::warn!("{}:{}: {e}, skipping line", self.key, self.line_number);
                        }
                    }
                }
                Err(e) => {
                    log::error!("failed reading lines of {}: {e}", self.key);
                    self.reader = None;
                    return Pull::End;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, store) = store();
        store.write_text("a.txt", "hello", "news").unwrap();
        assert_eq!(store.read_text("a.txt", "news").unwrap(), "hello");
        assert!(store.base_folder().join("news").join("a.txt").is_file());
    }

    #[test]
    fn test_list_sorted_files_only() {
        let (dir, store) = store();
        store.write_text("b", "", "ns").unwrap();
        store.write_text("a", "", "ns").unwrap();
        fs::create_dir(dir.path().join("ns").join("sub")).unwrap();
        assert_eq!(store.list("ns").unwrap(), vec!["a", "b"]);
        assert!(store.list("other").unwrap().is_empty());
    }

    #[test]
    fn test_reads_do_not_create_folders() {
        let (dir, store) = store();
        assert!(store.list("ghost").unwrap().is_empty());
        assert!(store.read_bytes("k", "ghost").is_err());
        assert!(store.iterate_lines("k", "ghost").is_err());
        assert!(!dir.path().join("ghost").exists());
    }

    #[test]
    fn test_undecodable_line_is_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let (_dir, store) = store();
        store.write_bytes("f", b"a\n\xff\nc\n", "").unwrap();
        let lines: Vec<_> = store.iterate_lines("f", "").unwrap().into_items().collect();
        assert_eq!(lines, vec!["a", "c"]);
    }

    #[test]
    fn test_iterate_lines_restarts() {
        let (_dir, store) = store();
        store.write_text("l", "one\r\ntwo\nthree", "").unwrap();
        for _ in 0..2 {
            let lines: Vec<_> = store.iterate_lines("l", "").unwrap().into_items().collect();
            assert_eq!(lines, vec!["one", "two", "three"]);
        }
    }

    #[test]
    fn test_write_stream_small_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::from_config(&StoreConfig {
            base_folder: dir.path().to_path_buf(),
            chunk_size: 4,
        });
        let data = b"0123456789".to_vec();
        let n = store.write_stream(&mut data.as_slice(), "out", "ns").unwrap();
        assert_eq!(n, 10);
        assert_eq!(store.read_bytes("out", "ns").unwrap(), data);
    }

    #[test]
    fn test_missing_key_is_error() {
        let (_dir, store) = store();
        assert!(store.read_text("missing", "").is_err());
        assert!(store.iterate_lines("missing", "").is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let (_dir, store) = store();
        store.write_bytes("bin", &[0xff, 0xfe], "").unwrap();
        assert!(matches!(
            store.read_text("bin", ""),
            Err(crate::error::Error::Encoding(_))
        ));
    }
}
