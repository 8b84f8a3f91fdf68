//! # Item Records
//!
//! The minimal `(id, weight, value)` unit that the grid places and the
//! selectors choose from. Records are immutable once built and are only ever
//! constructed through [`ItemRecord::new`], so every record in the system
//! satisfies `weight_kg > 0`.
//!
//! ## JSON Example
//!
//! ```json
//! { "id": "978-0-13-110362-7", "weight_kg": 1.2, "value": 45 }
//! ```
//!
//! Deserialization runs the same validation as the constructor:
//!
//! ```rust
//! use shelf_core::item::ItemRecord;
//!
//! let ok: Result<ItemRecord, _> = serde_json::from_str(r#"{"id":"A","weight_kg":2.0,"value":10}"#);
//! assert!(ok.is_ok());
//!
//! let bad: Result<ItemRecord, _> = serde_json::from_str(r#"{"id":"A","weight_kg":0.0,"value":10}"#);
//! assert!(bad.is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ShelfError, ShelfResult};

/// A single inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItemRecord")]
pub struct ItemRecord {
    id: String,
    weight_kg: f64,
    value: u64,
}

/// Unvalidated wire form of [`ItemRecord`].
#[derive(Deserialize)]
struct RawItemRecord {
    id: String,
    weight_kg: f64,
    value: u64,
}

impl TryFrom<RawItemRecord> for ItemRecord {
    type Error = ShelfError;

    fn try_from(raw: RawItemRecord) -> ShelfResult<Self> {
        ItemRecord::new(raw.id, raw.weight_kg, raw.value)
    }
}

impl ItemRecord {
    /// Create a validated item record.
    ///
    /// # Errors
    ///
    /// * `ShelfError::InvalidInput` if `id` is blank or `weight_kg` is not a
    ///   finite, strictly positive number
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_core::item::ItemRecord;
    ///
    /// let item = ItemRecord::new("A", 2.0, 10)?;
    /// assert_eq!(item.weight_kg(), 2.0);
    /// assert!(ItemRecord::new("B", -1.0, 10).is_err());
    /// # Ok::<(), shelf_core::errors::ShelfError>(())
    /// ```
    pub fn new(id: impl Into<String>, weight_kg: f64, value: u64) -> ShelfResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShelfError::invalid_input("id", id, "Item id must not be empty"));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ShelfError::invalid_input(
                "weight_kg",
                weight_kg.to_string(),
                "Weight must be a finite positive number",
            ));
        }
        Ok(ItemRecord { id, weight_kg, value })
    }

    /// Unique identifier (ISBN-like key)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight in kilograms, always `> 0`
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} kg, value {})", self.id, self.weight_kg, self.value)
    }
}

/// Sum of weights, left to right.
pub fn total_weight_kg<'a>(items: impl IntoIterator<Item = &'a ItemRecord>) -> f64 {
    items.into_iter().map(ItemRecord::weight_kg).sum()
}

/// Sum of values, saturating at `u64::MAX`.
pub fn total_value<'a>(items: impl IntoIterator<Item = &'a ItemRecord>) -> u64 {
    items
        .into_iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.value()))
}
