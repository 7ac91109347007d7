//! Keep-only projection

use serde_json::{Map, Value};

use crate::pattern::PatternTrie;

/// Project `node` onto the paths in `trie`
///
/// Returns `None` when nothing survives the projection. Surviving objects
/// contain only the matched keys; surviving arrays contain only the elements
/// that produced something, in their original order.
///
/// A leaf trie takes the node whole, except that a `null` node counts as
/// nothing so a `null` field is never emitted.
#[must_use]
pub fn select(trie: &PatternTrie, node: &Value) -> Option<Value> {
    if trie.is_leaf() {
        return match node {
            Value::Null => None,
            other => Some(other.clone()),
        };
    }

    match node {
        Value::Object(object) => {
            let mut projected = Map::new();
            for (segment, child) in trie.branches() {
                let Some(value) = object.get(segment.as_str()) else {
                    continue;
                };
                if let Some(kept) = select(child, value) {
                    projected.insert(segment.clone(), kept);
                }
            }
            (!projected.is_empty()).then_some(Value::Object(projected))
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items.iter().filter_map(|item| select(trie, item)).collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        // Scalars cannot satisfy a trie that still expects structure
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}
