//! Generators: where sequences start.
//!
//! Every generator returns a [`Sequence`](crate::Sequence) whose restarts
//! begin again from the first item. Tagged generators stamp each item with
//! its origin, either a position or a `[namespace, key]` pair.

mod lines;
mod list;
mod random;
mod store;

pub use lines::LineGenerator;
pub use list::{list, list_tagged};
pub use random::RandomStrings;
pub use store::{ObjectRef, StoreGenerator};
