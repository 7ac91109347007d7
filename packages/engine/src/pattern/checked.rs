//! Policy-checked compilation

use super::trie::{PatternTrie, SEGMENT_DELIMITER};
use crate::config::{FilterConfig, Validator};
use crate::error::{FieldsError, FieldsResult};

impl PatternTrie {
    /// Compile path strings after checking them against a configuration
    ///
    /// Under [`PathPolicy::Lenient`](crate::config::PathPolicy::Lenient) this
    /// is [`compile`](Self::compile). Under
    /// [`PathPolicy::Strict`](crate::config::PathPolicy::Strict) every path
    /// must be non-empty, contain no empty segment, and stay within the
    /// configured limits.
    ///
    /// # Errors
    ///
    /// - `FieldsError::Config` if the configuration itself is invalid
    /// - `FieldsError::TooManyPaths` if the list exceeds `max_paths`
    /// - `FieldsError::InvalidPath` for an empty path, an empty segment, or a
    ///   path longer than `max_segments`
    pub fn compile_checked<I, S>(paths: I, config: &FilterConfig) -> FieldsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        if !config.is_strict() {
            return Ok(Self::compile(paths));
        }

        let mut trie = Self::new();
        let mut count = 0usize;
        for path in paths {
            count += 1;
            if count > config.max_paths {
                return Err(FieldsError::TooManyPaths {
                    count,
                    limit: config.max_paths,
                });
            }
            let path = path.as_ref();
            check_path(path, config.max_segments)?;
            trie.insert(path);
        }
        Ok(trie)
    }
}

fn check_path(path: &str, max_segments: usize) -> FieldsResult<()> {
    if path.is_empty() {
        return Err(FieldsError::invalid_path(path, "path is empty"));
    }

    let mut segments = 0usize;
    for (index, segment) in path.split(SEGMENT_DELIMITER).enumerate() {
        if segment.is_empty() {
            return Err(FieldsError::invalid_path(
                path,
                format!("segment {index} is empty"),
            ));
        }
        segments += 1;
    }

    if segments > max_segments {
        return Err(FieldsError::invalid_path(
            path,
            format!("{segments} segments exceeds limit of {max_segments}"),
        ));
    }

    Ok(())
}
