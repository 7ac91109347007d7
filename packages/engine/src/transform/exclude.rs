//! In-place field removal

use serde_json::Value;

use crate::pattern::PatternTrie;

/// Remove the fields named by `trie` from `node`, in place
///
/// Fields reached through a leaf are deleted. Fields reached through an inner
/// node are descended into and only their named descendants are deleted.
/// Objects and arrays are never removed themselves, even when they end up
/// empty.
pub fn exclude(trie: &PatternTrie, node: &mut Value) {
    exclude_counted(trie, node);
}

/// Same walk as [`exclude`], returning the number of fields removed
pub fn exclude_counted(trie: &PatternTrie, node: &mut Value) -> usize {
    if trie.is_empty() {
        return 0;
    }

    match node {
        Value::Object(object) => {
            let mut removed = 0;
            for (segment, child) in trie.branches() {
                if child.is_leaf() {
                    if object.remove(segment.as_str()).is_some() {
                        removed += 1;
                    }
                } else if let Some(value) = object.get_mut(segment.as_str()) {
                    removed += exclude_counted(child, value);
                }
            }
            removed
        }
        Value::Array(items) => items
            .iter_mut()
            .map(|item| exclude_counted(trie, item))
            .sum(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => 0,
    }
}
