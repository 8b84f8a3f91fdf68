//! # shelf_core - Shelf Placement and Selection Engine
//!
//! `shelf_core` is the computational heart of Shelfwise. It decides which
//! items to shelve under a weight budget and where each one goes on a shelf
//! whose rows share a weight cap. All inputs and outputs are
//! JSON-serializable, making it easy to drive from a service layer or an AI
//! assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless searches**: Selectors take a slice and return a value
//! - **JSON-First**: All boundary types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Validated at the edge**: Invalid items and configs never get in
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_core::grid::CapacityGrid;
//! use shelf_core::item::ItemRecord;
//! use shelf_core::reports::materialize;
//! use shelf_core::selection::{OptimalSelector, SelectorConfig};
//!
//! let items = vec![
//!     ItemRecord::new("A", 3.0, 10)?,
//!     ItemRecord::new("B", 5.0, 15)?,
//!     ItemRecord::new("C", 2.0, 8)?,
//! ];
//!
//! let report = OptimalSelector::new(SelectorConfig::default())?.select(&items);
//! let mut shelf = CapacityGrid::with_default_config("S-1")?;
//! let placement = materialize(&mut shelf, &report.best.items);
//! assert!(placement.all_placed());
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&shelf)?;
//! # let _ = json;
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```
//!
//! ## Modules
//!
//! - [`item`] - Item records (id, weight, value)
//! - [`grid`] - Shelves with per-row weight caps
//! - [`selection`] - Fixed-size enumeration and optimal selection
//! - [`ranking`] - Stable merge sort and binary lookup
//! - [`inventory`] - Canonical id-keyed item store
//! - [`reports`] - Multi-shelf statistics and materialization
//! - [`settings`] - Engine parameters
//! - [`errors`] - Structured error types
//! - [`logging`] - Subscriber setup for binaries and tests

pub mod errors;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod ranking;
pub mod reports;
pub mod selection;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use errors::{ShelfError, ShelfResult};
pub use grid::{CapacityGrid, GridConfig, GridSummary, Slot};
pub use inventory::Inventory;
pub use item::ItemRecord;
pub use selection::{
    Combination, EnumerationResult, EnumeratorConfig, ExhaustiveEnumerator, OptimalSelector,
    SelectionReport, SelectionResult, SelectorConfig,
};
pub use settings::{load_settings, ShelfSettings};
