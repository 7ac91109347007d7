//! Pattern compilation tests

use jsonsift_engine::config::{ConfigurationError, FilterConfig, PathPolicy, Validator};
use jsonsift_engine::error::ErrorKind;
use jsonsift_engine::{FieldsError, PatternTrie, pattern};

#[test]
fn test_empty_list_compiles_to_empty_trie() {
    let trie = pattern::compile(Vec::<String>::new());
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
}

#[test]
fn test_segments_nest() {
    let trie = pattern::compile(["parts/color"]);
    let parts = trie.child("parts").expect("parts branch");
    assert!(!parts.is_leaf());
    let color = parts.child("color").expect("color branch");
    assert!(color.is_leaf());
    assert_eq!(trie.depth(), 2);
}

#[test]
fn test_shared_prefixes_merge() {
    let trie = pattern::compile(["parts/color", "parts/id", "weight"]);
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.child("parts").map(PatternTrie::len), Some(2));
    assert!(trie.child("weight").is_some_and(PatternTrie::is_leaf));
}

#[test]
fn test_shallow_then_deep_is_not_leaf() {
    let trie = pattern::compile(["parts", "parts/color"]);
    let parts = trie.child("parts").expect("parts branch");
    assert!(!parts.is_leaf());
    assert_eq!(parts.len(), 1);
}

#[test]
fn test_deep_then_shallow_is_not_leaf() {
    let trie = pattern::compile(["parts/color", "parts"]);
    assert_eq!(trie, pattern::compile(["parts", "parts/color"]));
}

#[test]
fn test_duplicates_are_idempotent() {
    assert_eq!(
        pattern::compile(["a/b", "a/b", "a/b"]),
        pattern::compile(["a/b"])
    );
}

#[test]
fn test_lenient_keeps_empty_segments_literally() {
    let trie = pattern::compile(["", "a//b"]);
    assert!(trie.child("").is_some_and(PatternTrie::is_leaf));
    let inner = trie
        .child("a")
        .and_then(|a| a.child(""))
        .expect("empty middle segment");
    assert!(inner.child("b").is_some());
}

#[test]
fn test_collect_into_trie() {
    let trie: PatternTrie = ["x/y", "z"].into_iter().collect();
    assert_eq!(trie, pattern::compile(["z", "x/y"]));
}

#[test]
fn test_checked_lenient_matches_compile() {
    let paths = ["", "a//b", "c"];
    let checked = PatternTrie::compile_checked(paths, &FilterConfig::default())
        .expect("lenient compile never rejects paths");
    assert_eq!(checked, pattern::compile(paths));
}

#[test]
fn test_strict_rejects_empty_path() {
    let err = PatternTrie::compile_checked(["ok", ""], &FilterConfig::strict()).unwrap_err();
    assert!(matches!(err, FieldsError::InvalidPath { ref path, .. } if path.is_empty()));
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
}

#[test]
fn test_strict_rejects_empty_segments() {
    for path in ["/a", "a/", "a//b"] {
        let err = PatternTrie::compile_checked([path], &FilterConfig::strict()).unwrap_err();
        assert!(
            matches!(err, FieldsError::InvalidPath { path: ref p, .. } if p == path),
            "expected rejection of {path:?}"
        );
    }
}

#[test]
fn test_strict_enforces_limits() {
    let config = FilterConfig::strict().with_max_paths(2).with_max_segments(2);

    let err = PatternTrie::compile_checked(["a", "b", "c"], &config).unwrap_err();
    assert!(matches!(err, FieldsError::TooManyPaths { count: 3, limit: 2 }));

    let err = PatternTrie::compile_checked(["a/b/c"], &config).unwrap_err();
    assert!(matches!(err, FieldsError::InvalidPath { .. }));

    let trie = PatternTrie::compile_checked(["a/b", "c"], &config).expect("within limits");
    assert_eq!(trie.depth(), 2);
}

#[test]
fn test_invalid_config_is_rejected_before_paths() {
    let config = FilterConfig::default()
        .with_path_policy(PathPolicy::Strict)
        .with_max_segments(0);
    let err = PatternTrie::compile_checked(["a"], &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_config_limits_are_bounded_above() {
    let at_bound = FilterConfig::default().with_max_paths(1 << 20).with_max_segments(1 << 20);
    assert!(at_bound.validate().is_ok());

    let over = FilterConfig::default().with_max_paths((1 << 20) + 1);
    assert!(matches!(
        over.validate(),
        Err(ConfigurationError::InvalidParameter(ref msg)) if msg.starts_with("max_paths")
    ));

    let err = PatternTrie::compile_checked(["a"], &over).unwrap_err();
    assert!(matches!(
        err,
        FieldsError::Config(ConfigurationError::InvalidParameter(_))
    ));
}
