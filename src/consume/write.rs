use std::rc::Rc;

use crate::{
    config::SinkConfig,
    error::Result,
    sequence::Sequence,
    source::PullSource,
    store::{ChunkReader, ContentStore},
    tag::Item,
};

use super::Consumer;

/// How a value is written on a persisted line.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

/// Token lists are written space-joined.
impl<S: AsRef<str>> Render for Vec<S> {
    fn render(&self) -> String {
        self.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
    }
}

/// Persists a sequence as one line per item.
///
/// Lines are streamed into the store in chunks; the sequence is never held in
/// memory as a whole. A tagged item is written as
/// `<value><separator><tag>` when tag output is enabled. An item whose
/// rendered value contains a line break cannot be read back as one line, so
/// it is logged and skipped.
#[derive(Clone)]
pub struct WriteLines {
    store: Rc<dyn ContentStore>,
    key: String,
    namespace: String,
    config: SinkConfig,
}

impl WriteLines {
    pub fn new(store: Rc<dyn ContentStore>, key: &str, namespace: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            namespace: namespace.to_string(),
            config: SinkConfig::default(),
        }
    }

    pub fn config(mut self, config: SinkConfig) -> Self {
        self.config = config;
        self
    }

    fn line<T: Render>(&self, item: &Item<T>) -> Option<String> {
        let mut line = item.value.render();
        if line.contains(['\n', '\r']) {
            return None;
        }
        if self.config.output_tag {
            if let Some(tag) = &item.tag {
                line.push_str(&self.config.separator);
                line.push_str(&tag.to_string());
            }
        }
        line.push('\n');
        Some(line)
    }
}

impl<T: Render + 'static> Consumer<T> for WriteLines {
    /// Lines written.
    type Summary = usize;

    fn drain(&mut self, sequence: &Sequence<T>) -> Result<usize> {
        let mut lines = 0;
        let mut skipped = 0;
        let chunks = sequence
            .restart()
            .map_items(|item: Item<T>| match self.line(&item) {
                Some(line) => {
                    lines += 1;
                    line.into_bytes()
                }
                None => {
                    skipped += 1;
                    log::warn!("skipping item with a line break in its value, tag {:?}", item.tag);
                    Vec::new()
                }
            });
        let mut reader = ChunkReader::new(chunks);
        let bytes = self
            .store
            .write_stream(&mut reader, &self.key, &self.namespace)?;
        drop(reader);
        if skipped > 0 {
            log::warn!("{skipped} items were not written");
        }
        log::info!(
            "{}: wrote {lines} lines ({bytes} bytes) to {}",
            self.store.name(),
            crate::store::join_prefix(&self.namespace, &self.key)
        );
        Ok(lines)
    }
}
