//! # Optimal Selection
//!
//! Maximum-value subset under a weight budget (0/1 knapsack), solved by
//! exhaustive include/exclude backtracking rather than dynamic programming:
//! weights are real numbers and values are unbounded, so there is no small
//! integer table to index.
//!
//! ## Search
//!
//! - Only the first `input_cap` items (default 10) are considered. The cap
//!   bounds the `2^n` worst case; raise it with care.
//! - Depth first, the "include item i" branch before the "exclude item i"
//!   branch, on an explicit stack so deep inputs cannot overflow the call
//!   stack.
//! - A state whose running weight exceeds the budget is dropped with its
//!   whole subtree. Weights only grow along a branch, so nothing feasible is
//!   lost.
//! - At a leaf, a non-empty combination is feasible. It becomes the best
//!   only if its value is strictly greater than the best so far: the first
//!   combination found at the top value wins ties.
//! - With `value_bound` on, a state is also dropped when its value plus the
//!   value of every remaining item cannot beat the best. The best result is
//!   the same; fewer feasible combinations are visited and recorded.
//!
//! If no non-empty combination fits (or every fitting one has value 0) the
//! best selection is empty with value 0. That is a normal outcome.
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::item::ItemRecord;
//! use shelf_core::selection::{OptimalSelector, SelectorConfig};
//!
//! let items = vec![ItemRecord::new("A", 9.0, 100)?];
//! let report = OptimalSelector::new(SelectorConfig::default())?.select(&items);
//! assert!(report.best.is_empty());
//! assert_eq!(report.best.total_value, 0);
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{validate_budget, SelectionResult, DEFAULT_MAX_BUDGET_WEIGHT_KG};
use crate::errors::ShelfResult;
use crate::item::ItemRecord;

/// Default number of leading items the search considers
pub const DEFAULT_INPUT_CAP: usize = 10;

/// Search parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_budget_weight_kg": 8.0,
///   "input_cap": 10,
///   "record_feasible": true,
///   "value_bound": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Maximum total weight of the selection (kg)
    pub max_budget_weight_kg: f64,

    /// Only the first `input_cap` items are searched
    pub input_cap: usize,

    /// Keep every feasible combination in the report for auditing
    pub record_feasible: bool,

    /// Prune states that cannot beat the best value found so far
    pub value_bound: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            max_budget_weight_kg: DEFAULT_MAX_BUDGET_WEIGHT_KG,
            input_cap: DEFAULT_INPUT_CAP,
            record_feasible: true,
            value_bound: false,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> ShelfResult<()> {
        validate_budget("max_budget_weight_kg", self.max_budget_weight_kg)
    }
}

/// Counters describing one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States taken off the stack
    pub nodes_explored: u64,

    /// States dropped because their weight exceeded the budget
    pub pruned_overweight: u64,

    /// States dropped by the value bound
    pub pruned_by_bound: u64,

    /// States that decided every considered item
    pub leaves_reached: u64,
}

/// Outcome of [`OptimalSelector::select`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    /// How many leading items were searched
    pub considered: usize,

    /// Maximum-value feasible selection (empty if none)
    pub best: SelectionResult,

    /// Every feasible non-empty combination in discovery order; empty when
    /// `record_feasible` is off
    pub feasible: Vec<SelectionResult>,

    pub stats: SearchStats,
}

/// One frame of the backtracking search.
struct SearchState {
    index: usize,
    chosen: Vec<usize>,
    weight_kg: f64,
    value: u64,
}

/// Backtracking 0/1 knapsack solver.
#[derive(Debug, Clone)]
pub struct OptimalSelector {
    config: SelectorConfig,
}

impl OptimalSelector {
    /// Create a selector after validating its config.
    pub fn new(config: SelectorConfig) -> ShelfResult<Self> {
        config.validate()?;
        Ok(OptimalSelector { config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Find the maximum-value subset of the first `input_cap` items whose
    /// total weight fits the budget.
    #[instrument(skip_all, fields(items = items.len(), budget_kg = self.config.max_budget_weight_kg))]
    pub fn select(&self, items: &[ItemRecord]) -> SelectionReport {
        let budget = self.config.max_budget_weight_kg;
        let considered = &items[..items.len().min(self.config.input_cap)];
        let n = considered.len();

        // remaining_value[i] = value of considered[i..]
        let mut remaining_value = vec![0u64; n + 1];
        for i in (0..n).rev() {
            remaining_value[i] = remaining_value[i + 1].saturating_add(considered[i].value());
        }

        let mut stats = SearchStats::default();
        let mut feasible = Vec::new();
        let mut best_value = 0u64;
        let mut best: Vec<usize> = Vec::new();

        let mut stack = vec![SearchState {
            index: 0,
            chosen: Vec::new(),
            weight_kg: 0.0,
            value: 0,
        }];

        while let Some(state) = stack.pop() {
            stats.nodes_explored += 1;

            if state.weight_kg > budget {
                stats.pruned_overweight += 1;
                continue;
            }

            if self.config.value_bound
                && state.value.saturating_add(remaining_value[state.index]) <= best_value
            {
                stats.pruned_by_bound += 1;
                continue;
            }

            if state.index == n {
                stats.leaves_reached += 1;
                if !state.chosen.is_empty() {
                    if self.config.record_feasible {
                        feasible.push(collect(considered, &state.chosen));
                    }
                    if state.value > best_value {
                        best_value = state.value;
                        best = state.chosen;
                    }
                }
                continue;
            }

            let item = &considered[state.index];

            // Pushed first, popped second
            stack.push(SearchState {
                index: state.index + 1,
                chosen: state.chosen.clone(),
                weight_kg: state.weight_kg,
                value: state.value,
            });

            let mut chosen = state.chosen;
            chosen.push(state.index);
            stack.push(SearchState {
                index: state.index + 1,
                chosen,
                weight_kg: state.weight_kg + item.weight_kg(),
                value: state.value.saturating_add(item.value()),
            });
        }

        let best = collect(considered, &best);
        debug!(
            considered = n,
            best_value = best.total_value,
            best_items = best.len(),
            feasible = feasible.len(),
            nodes = stats.nodes_explored,
            "optimal selection finished"
        );

        SelectionReport {
            considered: n,
            best,
            feasible,
            stats,
        }
    }
}

fn collect(items: &[ItemRecord], indices: &[usize]) -> SelectionResult {
    SelectionResult::from_items(indices.iter().map(|&i| items[i].clone()).collect())
}
