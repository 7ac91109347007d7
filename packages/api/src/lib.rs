//! jsonsift public API
//!
//! Shrink JSON payloads by path: keep only the fields a caller asked for, or
//! strip the ones it must not see.
//!
//! ```
//! use jsonsift::Sift;
//! use serde_json::json;
//!
//! let data = json!({"id": 123, "weight": 100, "parts": [{"id": 1, "color": "red"}]});
//!
//! let kept = Sift::select(["parts/color"]).apply(data.clone()).unwrap();
//! assert_eq!(kept, json!({"parts": [{"color": "red"}]}));
//!
//! let stripped = Sift::exclude(["weight", "parts/id"]).apply(data).unwrap();
//! assert_eq!(stripped, json!({"id": 123, "parts": [{"color": "red"}]}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::*;

// Re-export the engine's canonical types and entry points
pub use jsonsift_engine::document::{exclude_document, select_document};
pub use jsonsift_engine::{
    ErrorKind, FieldFilter, FieldsError, FieldsResult, FilterConfig, FilterMode, FilterStats,
    OutputFormat, PathPolicy, PatternTrie, StatsSnapshot, exclude_fields, select_fields,
};

/// Main entry point providing static builder methods
pub struct Sift;

impl Sift {
    /// Start a builder with no mode chosen
    #[must_use]
    pub fn builder() -> SiftBuilder {
        SiftBuilder::new()
    }

    /// Builder that keeps only `paths`
    #[must_use]
    pub fn select<I, S>(paths: I) -> SiftBuilder<Selecting>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SiftBuilder::new().select().paths(paths)
    }

    /// Builder that removes `paths`
    #[must_use]
    pub fn exclude<I, S>(paths: I) -> SiftBuilder<Excluding>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SiftBuilder::new().exclude().paths(paths)
    }
}

/// Builder that keeps only `paths`
///
/// Shorthand for `Sift::select(paths)`
#[must_use]
pub fn select<I, S>(paths: I) -> SiftBuilder<Selecting>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Sift::select(paths)
}

/// Builder that removes `paths`
///
/// Shorthand for `Sift::exclude(paths)`
#[must_use]
pub fn exclude<I, S>(paths: I) -> SiftBuilder<Excluding>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Sift::exclude(paths)
}
