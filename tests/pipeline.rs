use std::rc::Rc;

use restream::{
    config::{Config, TagRule},
    modifier::text::{Lower, Remove, Whitespace},
    prelude::*,
    store::{ContentStore, FsStore, MemoryStore},
    Error,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tokens(store: Rc<dyn ContentStore>, namespace: &str) -> Sequence<Vec<String>> {
    let texts = StoreGenerator::from_namespace(store, namespace)
        .unwrap()
        .tagged(true)
        .texts();
    SplitText::new()
        .apply(texts)
        .apply(Whitespace.then(Lower).then(Remove::new(["the"])))
        .apply_bounds(TokenCount::default())
}

#[test]
fn store_to_counter_round_trip() {
    init_logger();
    let store = Rc::new(MemoryStore::new());
    store
        .write_text("a.txt", "The Hello World\n\n  second Para", "news")
        .unwrap();
    store.write_text("b.txt", "One the two", "blogs").unwrap();
    store.write_text("c.txt", "the", "blogs").unwrap();

    let merged = Merge::new()
        .append_index_to_tag(true)
        .apply(vec![
            (tokens(store.clone(), "news"), 1.0),
            (tokens(store.clone(), "blogs"), 1.0),
        ])
        .unwrap();
    assert!(merged.is_tagged());

    let mut writer = WriteLines::new(store.clone(), "merged.txt", "out");
    assert_eq!(writer.drain(&merged).unwrap(), 3);
    assert_eq!(
        store.read_text("merged.txt", "out").unwrap(),
        concat!(
            "hello world\t[\"news\",\"a.txt\",0,0]\n",
            "one two\t[\"blogs\",\"b.txt\",0,1]\n",
            "second para\t[\"news\",\"a.txt\",1,0]\n",
        )
    );

    let reread = LineGenerator::new(store.clone(), "merged.txt", "out")
        .tagged(true)
        .lines()
        .apply(Whitespace);
    let mut counter = CountTokens::new();
    assert_eq!(counter.drain(&reread).unwrap(), 6);
    assert_eq!(counter.count("hello"), 1);
    assert_eq!(counter.count("the"), 0);
    assert_eq!(counter.count_tagged("one", "blogs;b.txt;0;1"), 1);
    assert_eq!(counter.count_tagged("para", "news;a.txt;1;0"), 1);
}

#[test]
fn filesystem_pipeline_with_windowing() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_json_str(&format!(
        r#"{{ "store": {{ "base_folder": {:?}, "chunk_size": 8 }}, "source": {{ "tag_rule": "ordinal", "log_every": 1 }} }}"#,
        dir.path().display().to_string()
    ))
    .unwrap();
    assert_eq!(config.source.tag_rule, TagRule::Ordinal);

    let store = Rc::new(FsStore::from_config(&config.store));
    for (key, text) in [("1", "a"), ("2", "b"), ("3", "c")] {
        store.write_text(key, text, "docs").unwrap();
    }

    let texts = StoreGenerator::from_namespace(store.clone(), "docs")
        .unwrap()
        .config(config.source.clone())
        .tagged(true)
        .texts();
    let replayed = texts
        .repeat(Repeat::items(7))
        .subset(Subset::new().start(1).stride(2))
        .unwrap();

    let mut collect = Collect::new();
    collect.drain(&replayed).unwrap();
    let tags: Vec<_> = collect.items().iter().map(|item| item.tag.clone()).collect();
    assert_eq!(
        tags,
        vec![
            Some(TagPath::index(2)),
            Some(TagPath::index(1)),
            Some(TagPath::index(0)),
        ]
    );

    let untagged = replayed.untag().unwrap();
    let mut writer = WriteLines::new(store.clone(), "out.txt", "");
    writer.drain(&untagged).unwrap();
    assert_eq!(store.read_text("out.txt", "").unwrap(), "c\nb\na\n");

    let lines = LineGenerator::new(store, "out.txt", "").lines();
    assert_eq!(lines.values(), vec!["c", "b", "a"]);
}

#[test]
fn composition_errors_surface_before_pulling() {
    let tagged = list_tagged(vec![1]);
    let untagged = list(vec![2]);

    let err = merge(vec![(tagged.clone(), 1.0), (untagged.clone(), 1.0)]).unwrap_err();
    assert!(matches!(err, Error::TagMismatch { .. }));
    assert!(err.is_config());

    assert!(matches!(
        merge(vec![(untagged.clone(), 1.0)]),
        Err(Error::TooFewInputs(1))
    ));
    assert!(matches!(
        untagged.clone().untag(),
        Err(Error::NotTagged { .. })
    ));
    assert!(matches!(
        Repeat::new(None, None),
        Err(Error::RepeatModeMissing)
    ));
    assert!(untagged.subset(Subset::new().stride(0)).is_err());
}
