//! # jsonsift engine
//!
//! Projects or strips fields from decoded JSON trees, driven by a list of
//! slash-delimited path patterns such as `parts/color`.
//!
//! - [`select_fields`] keeps only the named fields and returns a new tree.
//!   Objects or arrays left with nothing in them disappear; if nothing at all
//!   matches, the result is `null`.
//! - [`exclude_fields`] removes the named fields from the caller's tree in
//!   place. Containers are never removed, only the fields inside them.
//!
//! Arrays never consume a path segment: a pattern applies to every element of
//! an array, at any nesting depth.
//!
//! ```
//! use jsonsift_engine::{exclude_fields, select_fields};
//! use serde_json::json;
//!
//! let data = json!({"id": 123, "parts": [{"id": 1, "color": "red"}]});
//!
//! assert_eq!(
//!     select_fields(["parts/color"], &data),
//!     json!({"parts": [{"color": "red"}]})
//! );
//!
//! let mut data = data;
//! exclude_fields(["parts/color"], &mut data);
//! assert_eq!(data, json!({"id": 123, "parts": [{"id": 1}]}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod telemetry;
pub mod transform;

use serde_json::Value;

pub use crate::config::{FilterConfig, OutputFormat, PathPolicy, Validator};
pub use crate::error::{ErrorKind, FieldsError, FieldsResult};
pub use crate::filter::{FieldFilter, FilterMode};
pub use crate::pattern::PatternTrie;
pub use crate::telemetry::{FilterStats, StatsSnapshot};

/// Keep only the fields named by `paths`
///
/// The input is only borrowed; the returned tree shares nothing with it. An
/// empty path list or a `null` input returns a copy of `data` unchanged.
/// Otherwise the result is the projected tree, or `null` when nothing matched.
#[must_use]
pub fn select_fields<I, S>(paths: I, data: &Value) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trie = PatternTrie::compile(paths);
    if trie.is_empty() || data.is_null() {
        return data.clone();
    }
    tracing::debug!(branches = trie.len(), depth = trie.depth(), "selecting fields");
    transform::select(&trie, data).unwrap_or(Value::Null)
}

/// Remove the fields named by `paths` from `data`, in place
///
/// Returns the same reference that was passed in, now modified. An empty
/// path list or a `null` input leaves `data` untouched.
pub fn exclude_fields<I, S>(paths: I, data: &mut Value) -> &mut Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trie = PatternTrie::compile(paths);
    if trie.is_empty() || data.is_null() {
        return data;
    }
    tracing::debug!(branches = trie.len(), depth = trie.depth(), "excluding fields");
    transform::exclude(&trie, data);
    data
}
