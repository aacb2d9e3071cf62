//! Whole-sequence modifiers
//!
//! These transform a sequence as a whole rather than item by item: merging
//! several inputs, windowing, replaying, splitting texts and removing tags.

mod length;
mod merge;
mod repeat;
mod split;
mod subset;
mod untag;

pub use length::TokenCount;
pub use merge::{merge, Merge};
pub use repeat::Repeat;
pub use split::{SplitText, PARAGRAPH_SEPARATOR};
pub use subset::Subset;
pub use untag::untag;
