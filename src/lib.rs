//! # Restream: lazy, restartable sequence pipelines
//!
//! Build text-processing pipelines out of sequences that can be iterated any
//! number of times, transformed item by item, merged, windowed and replayed,
//! while each item keeps a record of where it came from.
//!
//! ## Core Types
//!
//! - **[`Sequence<T>`]**: a restartable producer of items
//! - **[`PullSource<T>`]**: one pass over a sequence, advanced by `pull()`
//! - **[`Modifier<A>`]**: a per-item transform that may drop items
//! - **[`TagPath`]**: provenance trail carried by items of tagged sequences
//!
//! ## Example
//!
//! ```
//! use restream::prelude::*;
//!
//! let words = list_tagged(vec!["The", "Quick", "fox"])
//!     .apply(map(|w: &str| w.to_lowercase()))
//!     .apply(filter(|w: &String| w.len() > 3));
//!
//! let items: Vec<_> = words.iter().collect();
//! assert_eq!(items, vec![Item::tagged("quick".to_string(), TagPath::index(1))]);
//! ```
//!
//! ## Building Blocks
//!
//! **Generators** ([`generate`]): [`list`](generate::list),
//! [`StoreGenerator`](generate::StoreGenerator),
//! [`LineGenerator`](generate::LineGenerator),
//! [`RandomStrings`](generate::RandomStrings).
//!
//! **Sequence modifiers** ([`ops`]): [`Merge`](ops::Merge),
//! [`Subset`](ops::Subset), [`Repeat`](ops::Repeat), [`untag`](ops::untag),
//! [`SplitText`](ops::SplitText), [`TokenCount`](ops::TokenCount).
//!
//! **Consumers** ([`consume`]): [`CountTokens`](consume::CountTokens),
//! [`WriteLines`](consume::WriteLines), [`Collect`](consume::Collect).

pub mod config;
pub mod consume;
pub mod error;
pub mod generate;
pub mod iter;
pub mod modifier;
pub mod ops;
pub mod prelude;
pub mod pull;
pub mod sequence;
pub mod source;
pub mod store;
pub mod tag;

pub use error::{Error, Result};
pub use modifier::{apply_to, compose, Modifier};
pub use pull::Pull;
pub use sequence::Sequence;
pub use source::{BoxSource, PullSource};
pub use tag::{Item, TagPath, TagSegment};
