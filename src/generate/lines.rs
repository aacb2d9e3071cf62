use std::rc::Rc;

use crate::{
    config::STANDARD_SEPARATOR,
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    store::ContentStore,
    tag::{Item, TagPath},
};

/// Reads a persisted line file back, one item per line.
///
/// In tagged mode every line must end with `<separator><tag>`; the line is
/// split at the last separator and the tag parsed. Lines without a parseable
/// tag are logged and skipped. A file that cannot be opened yields an empty
/// pass.
#[derive(Clone)]
pub struct LineGenerator {
    store: Rc<dyn ContentStore>,
    key: String,
    namespace: String,
    separator: String,
    tagged: bool,
}

impl LineGenerator {
    pub fn new(store: Rc<dyn ContentStore>, key: &str, namespace: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            namespace: namespace.to_string(),
            separator: STANDARD_SEPARATOR.to_string(),
            tagged: false,
        }
    }

    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn lines(self) -> Sequence<String> {
        let tagged = self.tagged;
        let generator = Rc::new(self);
        Sequence::from_factory(tagged, move || {
            let lines = match generator.store.iterate_lines(&generator.key, &generator.namespace) {
                Ok(lines) => Some(lines),
                Err(e) => {
                    log::error!(
                        "cannot open '{}' in namespace '{}': {e}",
                        generator.key,
                        generator.namespace
                    );
                    None
                }
            };
            LineSource {
                lines,
                generator: Rc::clone(&generator),
                line_number: 0,
            }
        })
    }
}

struct LineSource {
    lines: Option<BoxSource<String>>,
    generator: Rc<LineGenerator>,
    line_number: usize,
}

impl LineSource {
    fn parse(&self, line: String) -> Option<Item<String>> {
        if !self.generator.tagged {
            return Some(Item::new(line));
        }
        let Some((value, tag)) = line.rsplit_once(self.generator.separator.as_str()) else {
            log::warn!(
                "{}:{}: no tag separator, skipping line",
                self.generator.key,
                self.line_number
            );
            return None;
        };
        match TagPath::parse(tag) {
            Ok(tag) => Some(Item::tagged(value.to_string(), tag)),
            Err(e) => {
                log::warn!("{}:{}: {e}, skipping line", self.generator.key, self.line_number);
                None
            }
        }
    }
}

impl PullSource<Item<String>> for LineSource {
    fn pull(&mut self) -> Pull<Item<String>> {
        loop {
            let line = match self.lines.pull() {
                Pull::Item(line) => line,
                Pull::End => {
                    self.lines = None;
                    return Pull::End;
                }
            };
            self.line_number += 1;
            if let Some(item) = self.parse(line) {
                return Pull::Item(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FsStore, MemoryStore};

    fn store_with(text: &str) -> Rc<MemoryStore> {
        let store = Rc::new(MemoryStore::new());
        store.write_text("out.txt", text, "runs").unwrap();
        store
    }

    #[test]
    fn test_untagged_lines() {
        let seq = LineGenerator::new(store_with("a b\nc\n"), "out.txt", "runs").lines();
        assert!(!seq.is_tagged());
        assert_eq!(seq.values(), vec!["a b", "c"]);
    }

    #[test]
    fn test_tagged_lines_split_at_last_separator() {
        let text = "a\tb\t[\"x\",0]\nc\t[1]\n";
        let seq = LineGenerator::new(store_with(text), "out.txt", "runs")
            .tagged(true)
            .lines();
        let items: Vec<_> = seq.iter().collect();
        assert_eq!(
            items,
            vec![
                Item::tagged("a\tb".to_string(), TagPath::new().with("x").with(0usize)),
                Item::tagged("c".to_string(), TagPath::index(1)),
            ]
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let text = "no separator\nbad\t[oops\ngood\t[2]\n";
        let seq = LineGenerator::new(store_with(text), "out.txt", "runs")
            .tagged(true)
            .lines();
        assert_eq!(seq.values(), vec!["good"]);
    }

    #[test]
    fn test_custom_separator() {
        let seq = LineGenerator::new(store_with("v | [0]\n"), "out.txt", "runs")
            .separator(" | ")
            .tagged(true)
            .lines();
        assert_eq!(seq.values(), vec!["v"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let seq = LineGenerator::new(Rc::new(MemoryStore::new()), "nope", "").lines();
        assert!(seq.values().is_empty());
    }

    #[test]
    fn test_undecodable_line_does_not_end_the_file() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let store = Rc::new(FsStore::new(dir.path()));
        store.write_bytes("f", b"a\n\xff\nc\n", "").unwrap();
        let seq = LineGenerator::new(store, "f", "").lines();
        assert_eq!(seq.values(), vec!["a", "c"]);
    }
}
