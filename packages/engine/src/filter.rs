//! Reusable compiled filter
//!
//! [`FieldFilter`] compiles its path list once and applies it to any number
//! of trees or documents, recording [`FilterStats`] as it goes.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FilterConfig;
use crate::document;
use crate::error::FieldsResult;
use crate::pattern::PatternTrie;
use crate::telemetry::FilterStats;
use crate::transform;

/// Which walk a filter applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Keep only the named fields
    Select,
    /// Remove the named fields
    Exclude,
}

impl FilterMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Select => "select",
            FilterMode::Exclude => "exclude",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled select or exclude filter
#[derive(Debug, Clone)]
pub struct FieldFilter {
    mode: FilterMode,
    trie: PatternTrie,
    config: FilterConfig,
    stats: Arc<FilterStats>,
}

impl FieldFilter {
    /// Compile a filter
    ///
    /// # Errors
    ///
    /// Returns `FieldsError::Config` for an invalid configuration, and under a
    /// strict path policy `FieldsError::InvalidPath` or
    /// `FieldsError::TooManyPaths` for rejected paths.
    pub fn new<I, S>(mode: FilterMode, paths: I, config: FilterConfig) -> FieldsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = PatternTrie::compile_checked(paths, &config)?;
        tracing::debug!(
            mode = %mode,
            branches = trie.len(),
            depth = trie.depth(),
            policy = ?config.path_policy,
            "compiled field filter"
        );
        Ok(Self {
            mode,
            trie,
            config,
            stats: Arc::new(FilterStats::new()),
        })
    }

    /// Select filter with default configuration
    ///
    /// # Errors
    ///
    /// Never fails with the default lenient policy; the `Result` mirrors
    /// [`FieldFilter::new`].
    pub fn select<I, S>(paths: I) -> FieldsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(FilterMode::Select, paths, FilterConfig::default())
    }

    /// Exclude filter with default configuration
    ///
    /// # Errors
    ///
    /// Never fails with the default lenient policy; the `Result` mirrors
    /// [`FieldFilter::new`].
    pub fn exclude<I, S>(paths: I) -> FieldsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(FilterMode::Exclude, paths, FilterConfig::default())
    }

    /// Apply the filter to an owned tree
    ///
    /// Select builds and returns a new tree, dropping the input. Exclude
    /// edits the input in place and hands it back. Follows the same identity
    /// rules as the entry points: an empty path list or a `null` input comes
    /// back unchanged.
    #[must_use]
    pub fn apply(&self, mut data: Value) -> Value {
        match self.mode {
            FilterMode::Select => {
                if self.trie.is_empty() || data.is_null() {
                    self.stats.record_selection(false);
                    return data;
                }
                let selected = transform::select(&self.trie, &data);
                self.stats.record_selection(selected.is_none());
                selected.unwrap_or(Value::Null)
            }
            FilterMode::Exclude => {
                let removed = if data.is_null() {
                    0
                } else {
                    transform::exclude_counted(&self.trie, &mut data)
                };
                self.stats.record_exclusion(removed);
                data
            }
        }
    }

    /// Apply the filter to an encoded document
    ///
    /// # Errors
    ///
    /// Returns `FieldsError::Parse` for invalid input and `FieldsError::Render`
    /// if the result cannot be encoded.
    pub fn apply_document(&self, input: impl AsRef<[u8]>) -> FieldsResult<Bytes> {
        let input = input.as_ref();
        let data = document::decode(input).inspect_err(|e| {
            self.stats.record_error();
            tracing::warn!(mode = %self.mode, bytes = input.len(), "document decode failed: {e}");
        })?;
        self.stats.record_document(input.len());

        let filtered = self.apply(data);
        document::encode(&filtered, self.config.output).inspect_err(|e| {
            self.stats.record_error();
            tracing::warn!(mode = %self.mode, "document encode failed: {e}");
        })
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Compiled pattern trie
    #[inline]
    #[must_use]
    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Shared statistics for every application of this filter and its clones
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &Arc<FilterStats> {
        &self.stats
    }
}
