//! # Error Types
//!
//! Structured error types for shelf_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Placement and lookup failures are ordinary, recoverable outcomes. The
//! boolean grid operations (`add`, `remove`, `replace`) collapse them to
//! `false`; the `try_*` variants surface the reason as a [`ShelfError`].
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::errors::{ShelfError, ShelfResult};
//!
//! fn validate_budget(budget_kg: f64) -> ShelfResult<()> {
//!     if !(budget_kg >= 0.0) {
//!         return Err(ShelfError::InvalidInput {
//!             field: "max_budget_weight_kg".to_string(),
//!             value: budget_kg.to_string(),
//!             reason: "Budget must be a non-negative number".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shelf_core operations
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Structured error type for shelf operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShelfError {
    /// An input value is invalid (out of range, non-finite, empty, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An item id is already present where ids must be unique
    #[error("Duplicate item: '{id}' is already present")]
    DuplicateItem { id: String },

    /// No item with this id exists in the grid or inventory
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// The item cannot be placed without breaking a row weight cap or
    /// there is no free slot
    #[error("Placement failed for '{item_id}': {reason}")]
    PlacementFailed { item_id: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ShelfError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ShelfError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DuplicateItem error
    pub fn duplicate_item(id: impl Into<String>) -> Self {
        ShelfError::DuplicateItem { id: id.into() }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        ShelfError::ItemNotFound { id: id.into() }
    }

    /// Create a PlacementFailed error
    pub fn placement_failed(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        ShelfError::PlacementFailed {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ShelfError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ShelfError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if the caller can recover by trying another item, another
    /// shelf, or another id
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShelfError::PlacementFailed { .. }
                | ShelfError::ItemNotFound { .. }
                | ShelfError::DuplicateItem { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShelfError::InvalidInput { .. } => "INVALID_INPUT",
            ShelfError::DuplicateItem { .. } => "DUPLICATE_ITEM",
            ShelfError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            ShelfError::PlacementFailed { .. } => "PLACEMENT_FAILED",
            ShelfError::FileError { .. } => "FILE_ERROR",
            ShelfError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(e: serde_json::Error) -> Self {
        ShelfError::serialization(e.to_string())
    }
}
