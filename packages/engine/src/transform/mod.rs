//! Tree transformer
//!
//! Walks a decoded [`Value`](serde_json::Value) and a [`PatternTrie`] in
//! lockstep. Objects consume one segment per level; arrays are transparent
//! and apply the same trie to every element.
//!
//! The two walks deliberately differ in ownership:
//! - [`select`] borrows the tree and builds a new one, collapsing containers
//!   that end up with nothing in them
//! - [`exclude`] mutates the tree in place and never removes a container,
//!   only the named fields inside it
//!
//! [`PatternTrie`]: crate::pattern::PatternTrie

mod exclude;
mod select;

pub use exclude::{exclude, exclude_counted};
pub use select::select;
