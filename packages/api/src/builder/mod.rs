//! Sift builder API modules
//!
//! Fluent construction of select and exclude filters, with the filter mode
//! tracked in the builder's type.

pub mod core;
pub mod paths;
pub mod terminal;

pub use self::core::*;
