//! Path pattern compilation
//!
//! Turns a list of slash-delimited path strings into a [`PatternTrie`], a
//! prefix tree of segment names. A branch with no children is a leaf: the
//! field reached through it is taken (or removed) in full.

mod checked;
mod trie;

pub use trie::{PatternTrie, SEGMENT_DELIMITER};

/// Compile path strings into a pattern trie
///
/// Shorthand for [`PatternTrie::compile`].
#[inline]
pub fn compile<I, S>(paths: I) -> PatternTrie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PatternTrie::compile(paths)
}
