//! Filter configuration
//!
//! Settings for the validating front door ([`PatternTrie::compile_checked`],
//! [`FieldFilter`]) and for document output. The plain entry points
//! [`select_fields`] and [`exclude_fields`] take no configuration.
//!
//! [`PatternTrie::compile_checked`]: crate::pattern::PatternTrie::compile_checked
//! [`FieldFilter`]: crate::filter::FieldFilter
//! [`select_fields`]: crate::select_fields
//! [`exclude_fields`]: crate::exclude_fields

mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{ConfigResult, ConfigurationError, Validator};

/// Default upper bound on the number of paths accepted in strict mode
pub const DEFAULT_MAX_PATHS: usize = 1024;

/// Default upper bound on segments per path accepted in strict mode
pub const DEFAULT_MAX_SEGMENTS: usize = 64;

/// How path strings are checked before compilation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPolicy {
    /// Every string is accepted and split literally, empty segments included
    #[default]
    Lenient,
    /// Empty paths, empty segments and oversized lists are rejected
    Strict,
}

/// Encoding used when a filtered tree is written back out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}

/// Configuration for compiled field filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Path checking policy
    pub path_policy: PathPolicy,
    /// Maximum number of paths (strict mode only)
    pub max_paths: usize,
    /// Maximum number of segments in one path (strict mode only)
    pub max_segments: usize,
    /// Output encoding for document-level operations
    pub output: OutputFormat,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            path_policy: PathPolicy::Lenient,
            max_paths: DEFAULT_MAX_PATHS,
            max_segments: DEFAULT_MAX_SEGMENTS,
            output: OutputFormat::Compact,
        }
    }
}

impl FilterConfig {
    /// Strict path checking with default limits
    #[must_use]
    pub fn strict() -> Self {
        Self {
            path_policy: PathPolicy::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Whether strict path checking is enabled
    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.path_policy == PathPolicy::Strict
    }
}

impl Validator for FilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::ConfigValidator::validate_limit(self.max_paths, "max_paths")?;
        validation::ConfigValidator::validate_limit(self.max_segments, "max_segments")?;
        Ok(())
    }
}
