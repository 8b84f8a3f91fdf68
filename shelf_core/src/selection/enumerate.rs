//! # Exhaustive Enumeration
//!
//! Brute-force generation of every combination of exactly `k` distinct
//! items whose total weight fits the budget.
//!
//! Combinations are index tuples `i1 < i2 < … < ik`, visited in
//! lexicographic order, so each subset is produced once regardless of how the
//! input is ordered. Callers that need value or weight ordering must re-sort.
//!
//! Weights are strictly positive, so once a prefix exceeds the budget every
//! extension of it does too. The walk skips those candidates early; the set
//! and order of admitted combinations match the unpruned C(n, k) loop.
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::item::ItemRecord;
//! use shelf_core::selection::{EnumeratorConfig, ExhaustiveEnumerator};
//!
//! let items = vec![
//!     ItemRecord::new("A", 1.0, 1)?,
//!     ItemRecord::new("B", 2.0, 1)?,
//!     ItemRecord::new("C", 7.0, 1)?,
//! ];
//! let enumerator = ExhaustiveEnumerator::new(EnumeratorConfig {
//!     combination_size: 2,
//!     max_budget_weight_kg: 8.0,
//! })?;
//! let result = enumerator.enumerate(&items);
//! // {A,B} = 3 kg and {A,C} = 8 kg fit; {B,C} = 9 kg does not
//! assert_eq!(result.len(), 2);
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{validate_budget, DEFAULT_MAX_BUDGET_WEIGHT_KG};
use crate::errors::{ShelfError, ShelfResult};
use crate::item::{self, ItemRecord};

/// Default number of items per combination
pub const DEFAULT_COMBINATION_SIZE: usize = 4;

/// Enumeration parameters.
///
/// ## JSON Example
///
/// ```json
/// { "combination_size": 4, "max_budget_weight_kg": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumeratorConfig {
    /// Exact number of items in every combination (k)
    pub combination_size: usize,

    /// Maximum total weight of a combination (kg)
    pub max_budget_weight_kg: f64,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        EnumeratorConfig {
            combination_size: DEFAULT_COMBINATION_SIZE,
            max_budget_weight_kg: DEFAULT_MAX_BUDGET_WEIGHT_KG,
        }
    }
}

impl EnumeratorConfig {
    pub fn validate(&self) -> ShelfResult<()> {
        if self.combination_size == 0 {
            return Err(ShelfError::invalid_input(
                "combination_size",
                "0",
                "Combination size must be at least 1",
            ));
        }
        validate_budget("max_budget_weight_kg", self.max_budget_weight_kg)
    }
}

/// One admitted combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    /// Items in input order
    pub items: Vec<ItemRecord>,

    /// Sum of item weights (kg), always within the budget
    pub total_weight_kg: f64,

    /// Sum of item values
    pub total_value: u64,
}

impl Combination {
    /// Ids of the items, in order
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(ItemRecord::id).collect()
    }
}

/// Every admitted combination, in discovery order.
///
/// This is a plain value handed to the caller, who decides how long to keep
/// it (e.g. to let a user pick one to shelve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationResult {
    pub combination_size: usize,
    pub max_budget_weight_kg: f64,
    pub combinations: Vec<Combination>,
}

impl EnumerationResult {
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Combination> {
        self.combinations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }
}

/// Fixed-size combination generator.
#[derive(Debug, Clone)]
pub struct ExhaustiveEnumerator {
    config: EnumeratorConfig,
}

impl ExhaustiveEnumerator {
    /// Create an enumerator after validating its config.
    pub fn new(config: EnumeratorConfig) -> ShelfResult<Self> {
        config.validate()?;
        Ok(ExhaustiveEnumerator { config })
    }

    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    /// Enumerate every `k`-item combination whose weight fits the budget.
    ///
    /// Returns an empty result when there are fewer than `k` items.
    pub fn enumerate(&self, items: &[ItemRecord]) -> EnumerationResult {
        let k = self.config.combination_size;
        let budget = self.config.max_budget_weight_kg;
        let n = items.len();
        let mut combinations = Vec::new();

        if n >= k {
            // indices[d] is the item chosen at depth d; prefix[d] the weight
            // of indices[..=d].
            let mut indices: Vec<usize> = Vec::with_capacity(k);
            let mut prefix: Vec<f64> = Vec::with_capacity(k);
            let mut next = 0usize;

            loop {
                if indices.len() == k {
                    let chosen: Vec<ItemRecord> = indices.iter().map(|&i| items[i].clone()).collect();
                    combinations.push(Combination {
                        total_weight_kg: prefix[k - 1],
                        total_value: item::total_value(&chosen),
                        items: chosen,
                    });
                } else {
                    let remaining = k - indices.len();
                    if next + remaining <= n {
                        let base = prefix.last().copied().unwrap_or(0.0);
                        let weight = base + items[next].weight_kg();
                        if weight <= budget {
                            indices.push(next);
                            prefix.push(weight);
                        }
                        next += 1;
                        continue;
                    }
                }

                // Backtrack: advance the deepest index
                match indices.pop() {
                    Some(last) => {
                        prefix.pop();
                        next = last + 1;
                    }
                    None => break,
                }
            }
        }

        debug!(
            items = n,
            k,
            budget_kg = budget,
            admitted = combinations.len(),
            "enumerated combinations"
        );

        EnumerationResult {
            combination_size: k,
            max_budget_weight_kg: budget,
            combinations,
        }
    }
}
