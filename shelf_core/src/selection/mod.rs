//! # Weight-Budgeted Selection
//!
//! Two searches over a flat item list, both bounded by a total weight
//! budget:
//!
//! - [`enumerate`] - every combination of exactly `k` items that fits
//! - [`optimal`] - the maximum-value subset of any size that fits
//!
//! Both follow the stratify calculation pattern: a `*Config` input
//! (JSON-serializable, validated) and a result value owned by the caller.
//! Neither keeps state between calls.
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::item::ItemRecord;
//! use shelf_core::selection::{OptimalSelector, SelectorConfig};
//!
//! let items = vec![
//!     ItemRecord::new("A", 3.0, 10)?,
//!     ItemRecord::new("B", 5.0, 15)?,
//!     ItemRecord::new("C", 2.0, 8)?,
//!     ItemRecord::new("D", 4.0, 12)?,
//! ];
//! let report = OptimalSelector::new(SelectorConfig::default())?.select(&items);
//! assert_eq!(report.best.total_value, 25);
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

pub mod enumerate;
pub mod optimal;

use serde::{Deserialize, Serialize};

use crate::errors::{ShelfError, ShelfResult};
use crate::item::{self, ItemRecord};

pub use enumerate::{Combination, EnumerationResult, EnumeratorConfig, ExhaustiveEnumerator};
pub use optimal::{OptimalSelector, SearchStats, SelectionReport, SelectorConfig};

/// Default total weight budget for a selection (kg)
pub const DEFAULT_MAX_BUDGET_WEIGHT_KG: f64 = 8.0;

/// A chosen set of items with its totals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "items": [
///     { "id": "A", "weight_kg": 3.0, "value": 10 },
///     { "id": "B", "weight_kg": 5.0, "value": 15 }
///   ],
///   "total_weight_kg": 8.0,
///   "total_value": 25
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Chosen items, in input order
    pub items: Vec<ItemRecord>,

    /// Sum of item weights (kg)
    pub total_weight_kg: f64,

    /// Sum of item values
    pub total_value: u64,
}

impl SelectionResult {
    /// Build a result, computing both totals from the items.
    pub fn from_items(items: Vec<ItemRecord>) -> Self {
        let total_weight_kg = item::total_weight_kg(&items);
        let total_value = item::total_value(&items);
        SelectionResult {
            items,
            total_weight_kg,
            total_value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Ids of the chosen items, in order
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(ItemRecord::id).collect()
    }
}

/// Check that a weight budget is a finite non-negative number.
pub(crate) fn validate_budget(field: &str, budget_kg: f64) -> ShelfResult<()> {
    if !budget_kg.is_finite() || budget_kg < 0.0 {
        return Err(ShelfError::invalid_input(
            field,
            budget_kg.to_string(),
            "Budget must be a finite non-negative number",
        ));
    }
    Ok(())
}
