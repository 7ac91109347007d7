//! Terminal methods
//!
//! Available only once a mode has been chosen. Each terminal method compiles
//! the accumulated paths against the configuration and applies the result.

use bytes::Bytes;
use jsonsift_engine::{FieldFilter, FieldsError, FieldsResult};
use serde::Serialize;
use serde_json::Value;

use crate::builder::core::{ModeState, SiftBuilder};

impl<M: ModeState> SiftBuilder<M> {
    /// Compile into a reusable filter
    ///
    /// # Errors
    ///
    /// Returns `FieldsError::Config` for an invalid configuration, and under
    /// strict mode `FieldsError::InvalidPath` or `FieldsError::TooManyPaths`.
    pub fn build(self) -> FieldsResult<FieldFilter> {
        if self.debug_enabled {
            log::debug!(
                "building {} filter over {} paths: {:?}",
                M::MODE,
                self.paths.len(),
                self.paths
            );
        }
        FieldFilter::new(M::MODE, &self.paths, self.config).inspect_err(|e| {
            log::warn!("{} filter rejected: {e}", M::MODE);
        })
    }

    /// Filter a decoded tree
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn apply(self, data: Value) -> FieldsResult<Value> {
        let debug = self.debug_enabled;
        let filtered = self.build()?.apply(data);
        if debug {
            log::debug!("{} produced null: {}", M::MODE, filtered.is_null());
        }
        Ok(filtered)
    }

    /// Filter an encoded JSON document
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), plus `FieldsError::Parse` for invalid
    /// input and `FieldsError::Render` if the result cannot be encoded.
    pub fn apply_document(self, input: impl AsRef<[u8]>) -> FieldsResult<Bytes> {
        self.build()?.apply_document(input)
    }

    /// Serialize a typed payload and filter the resulting tree
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), plus `FieldsError::Render` if the
    /// payload cannot be represented as JSON.
    pub fn apply_serialize<T: Serialize>(self, payload: &T) -> FieldsResult<Value> {
        let data = serde_json::to_value(payload).map_err(FieldsError::render)?;
        self.apply(data)
    }
}
