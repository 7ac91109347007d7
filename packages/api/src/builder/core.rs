//! Core `SiftBuilder` structures and base functionality
//!
//! Contains the builder struct, its mode state types, and the configuration
//! methods shared by every state.

use jsonsift_engine::{FilterConfig, FilterMode, OutputFormat, PathPolicy};

/// State marker indicating no filter mode has been chosen
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeNotSet;

/// State marker for a keep-only filter
#[derive(Debug, Clone, Copy, Default)]
pub struct Selecting;

/// State marker for a field-removal filter
#[derive(Debug, Clone, Copy, Default)]
pub struct Excluding;

/// Builder states that name a concrete filter mode
pub trait ModeState: private::Sealed {
    /// Mode applied by terminal methods in this state
    const MODE: FilterMode;
}

impl ModeState for Selecting {
    const MODE: FilterMode = FilterMode::Select;
}

impl ModeState for Excluding {
    const MODE: FilterMode = FilterMode::Exclude;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Selecting {}
    impl Sealed for super::Excluding {}
}

/// Main builder for field filters
///
/// Type parameter `M` tracks the filter mode:
/// - `ModeNotSet`: Default state, paths and configuration can be set
/// - `Selecting`: Terminal methods keep only the named fields
/// - `Excluding`: Terminal methods remove the named fields
#[derive(Debug, Clone)]
pub struct SiftBuilder<M = ModeNotSet> {
    /// Path patterns in insertion order
    pub(crate) paths: Vec<String>,
    /// Filter configuration
    pub(crate) config: FilterConfig,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
    /// Mode state marker
    pub(crate) state: M,
}

impl Default for SiftBuilder<ModeNotSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl SiftBuilder<ModeNotSet> {
    /// Start building a filter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            config: FilterConfig::default(),
            debug_enabled: false,
            state: ModeNotSet,
        }
    }

    /// Keep only the named fields
    #[must_use]
    pub fn select(self) -> SiftBuilder<Selecting> {
        self.with_state(Selecting)
    }

    /// Remove the named fields
    #[must_use]
    pub fn exclude(self) -> SiftBuilder<Excluding> {
        self.with_state(Excluding)
    }
}

impl<M> SiftBuilder<M> {
    fn with_state<N>(self, state: N) -> SiftBuilder<N> {
        SiftBuilder {
            paths: self.paths,
            config: self.config,
            debug_enabled: self.debug_enabled,
            state,
        }
    }

    /// Replace the whole filter configuration
    #[must_use]
    pub fn config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject empty paths and empty segments at build time
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.config.path_policy = PathPolicy::Strict;
        self
    }

    /// Encode documents as indented JSON
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.config.output = OutputFormat::Pretty;
        self
    }

    /// Enable debug logging for terminal operations
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Current configuration
    #[must_use]
    pub fn filter_config(&self) -> &FilterConfig {
        &self.config
    }
}
