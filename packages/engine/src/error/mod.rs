//! Field filtering error handling module
//!
//! The select/exclude walk itself never fails. Errors only come from the
//! layers around it: decoding and encoding documents, strict path
//! compilation, and configuration validation.

mod types;

pub use types::{ErrorKind, FieldsError, FieldsResult};
