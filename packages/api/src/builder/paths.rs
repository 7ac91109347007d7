//! Path pattern accumulation
//!
//! Paths use `/` between segments (`parts/color`). Arrays in the data never
//! consume a segment.

use crate::builder::core::SiftBuilder;

impl<M> SiftBuilder<M> {
    /// Add one path pattern
    ///
    /// # Arguments
    /// * `path` - Slash-delimited field path, e.g. `"parts/color"`
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Add several path patterns
    #[must_use]
    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Path patterns added so far
    #[must_use]
    pub fn path_list(&self) -> &[String] {
        &self.paths
    }
}
