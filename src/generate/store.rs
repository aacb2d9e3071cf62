use std::rc::Rc;

use crate::{
    config::{SourceConfig, TagRule},
    error::{Error, Result},
    pull::Pull,
    sequence::Sequence,
    source::PullSource,
    store::ContentStore,
    tag::{Item, TagPath},
};

/// Address of one stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub namespace: String,
    pub key: String,
}

impl ObjectRef {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

/// A bare key lives in the root namespace.
impl From<&str> for ObjectRef {
    fn from(key: &str) -> Self {
        Self::new("", key)
    }
}

impl From<String> for ObjectRef {
    fn from(key: String) -> Self {
        Self::new("", key)
    }
}

impl From<(&str, &str)> for ObjectRef {
    fn from((namespace, key): (&str, &str)) -> Self {
        Self::new(namespace, key)
    }
}

type ReadFn<T> = fn(&dyn ContentStore, &str, &str) -> Result<T>;

/// Generates one item per stored object, in the order the objects were given.
///
/// Objects that cannot be read are logged and skipped.
///
/// ```rust
/// use std::rc::Rc;
/// use restream::prelude::*;
/// use restream::store::{ContentStore, MemoryStore};
///
/// let store = Rc::new(MemoryStore::new());
/// store.write_text("a", "alpha", "docs").unwrap();
/// store.write_text("b", "beta", "docs").unwrap();
///
/// let seq = StoreGenerator::from_namespace(store, "docs").unwrap().texts();
/// assert_eq!(seq.values(), vec!["alpha", "beta"]);
/// ```
#[derive(Clone)]
pub struct StoreGenerator {
    store: Rc<dyn ContentStore>,
    refs: Rc<[ObjectRef]>,
    config: SourceConfig,
    tagged: bool,
}

impl StoreGenerator {
    pub fn new<I, R>(store: Rc<dyn ContentStore>, refs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ObjectRef>,
    {
        Self {
            store,
            refs: refs.into_iter().map(Into::into).collect(),
            config: SourceConfig::default(),
            tagged: false,
        }
    }

    /// Every object currently stored under `namespace`.
    pub fn from_namespace(store: Rc<dyn ContentStore>, namespace: &str) -> Result<Self> {
        let keys = store.list(namespace)?;
        log::info!(
            "{}: {} objects in namespace '{namespace}'",
            store.name(),
            keys.len()
        );
        let refs: Vec<_> = keys
            .into_iter()
            .map(|key| ObjectRef::new(namespace, key))
            .collect();
        Ok(Self::new(store, refs))
    }

    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    pub fn config(mut self, config: SourceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Objects decoded as UTF-8 text.
    pub fn texts(self) -> Sequence<String> {
        self.sequence(|store, key, namespace| store.read_text(key, namespace))
    }

    /// Objects as raw bytes.
    pub fn bytes(self) -> Sequence<Vec<u8>> {
        self.sequence(|store, key, namespace| store.read_bytes(key, namespace))
    }

    fn sequence<T: 'static>(self, read: ReadFn<T>) -> Sequence<T> {
        let tagged = self.tagged;
        Sequence::from_factory(tagged, move || StoreSource {
            generator: self.clone(),
            read,
            next: 0,
            ordinal: 0,
        })
    }
}

struct StoreSource<T> {
    generator: StoreGenerator,
    read: ReadFn<T>,
    next: usize,
    ordinal: usize,
}

impl<T> StoreSource<T> {
    fn tag(&self, object: &ObjectRef) -> TagPath {
        match self.generator.config.tag_rule {
            TagRule::Source => TagPath::source(&object.namespace, &object.key),
            TagRule::Ordinal => TagPath::index(self.ordinal),
        }
    }

    /// Called before the object at position `next` is read.
    fn log_progress(&self) {
        if progress_due(self.next, self.generator.config.log_every) {
            log::info!(
                "{}: {} of {} objects processed",
                self.generator.store.name(),
                self.next,
                self.generator.len()
            );
        }
    }
}

/// Progress is reported at position 0 and every `every` objects after that.
fn progress_due(position: usize, every: usize) -> bool {
    every > 0 && position % every == 0
}

impl<T> PullSource<Item<T>> for StoreSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        while let Some(object) = self.generator.refs.get(self.next).cloned() {
            self.log_progress();
            self.next += 1;
            match (self.read)(&*self.generator.store, &object.key, &object.namespace) {
                Ok(value) => {
                    let item = if self.generator.tagged {
                        Item::tagged(value, self.tag(&object))
                    } else {
                        Item::new(value)
                    };
                    self.ordinal += 1;
                    return Pull::Item(item);
                }
                Err(e) => {
                    log::error!("skipping: {}", Error::read(&object.namespace, &object.key, e));
                }
            }
        }
        Pull::End
    }
}
