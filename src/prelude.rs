//! Commonly used imports
//!
//! Use `use restream::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Item, Pull, PullSource, Sequence, TagPath};

// Sources
pub use crate::source::{from_iter, source_fn};

// Elementwise modifiers
pub use crate::modifier::{apply_to, compose, filter, from_fn, identity, map, Modifier};

// Generators
pub use crate::generate::{list, list_tagged, LineGenerator, RandomStrings, StoreGenerator};

// Sequence modifiers
pub use crate::ops::{merge, untag, Merge, Repeat, SplitText, Subset, TokenCount};

// Consumers
pub use crate::consume::{Collect, Consumer, CountTokens, WriteLines};
