//! # Capacity Grid
//!
//! A shelf modeled as `rows × columns` slots where every row shares a weight
//! budget. Placement is greedy first-fit: rows are scanned from row 0, a row
//! whose residual budget cannot take the item is skipped entirely, and the
//! item lands in the first empty column of the first row that can.
//!
//! ## Invariants
//!
//! - For every row, the summed weight of its occupied slots is
//!   `≤ max_row_weight_kg`, after every `add`, `remove` and `replace`.
//! - An item id occupies at most one slot.
//! - A failed operation leaves the grid unchanged.
//!
//! Slots hold owned copies of [`ItemRecord`]; the canonical record lives in
//! the caller's [`Inventory`](crate::inventory::Inventory).
//!
//! ## Example
//!
//! ```rust
//! use shelf_core::grid::{CapacityGrid, GridConfig, Slot};
//! use shelf_core::item::ItemRecord;
//!
//! let mut shelf = CapacityGrid::new("S-1", GridConfig::default())?;
//! assert!(shelf.add(ItemRecord::new("A", 5.0, 10)?));
//! assert!(shelf.add(ItemRecord::new("B", 5.0, 12)?)); // row 0 has 3 kg left, goes to row 1
//! assert_eq!(shelf.find("B"), Some(Slot { row: 1, column: 0 }));
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ShelfError, ShelfResult};
use crate::item::ItemRecord;

/// Default number of rows per shelf
pub const DEFAULT_ROWS: usize = 5;

/// Default number of slots per row
pub const DEFAULT_COLUMNS: usize = 4;

/// Default weight cap per row in kilograms
pub const DEFAULT_MAX_ROW_WEIGHT_KG: f64 = 8.0;

/// Largest `rows × columns` a shelf may have
pub const MAX_GRID_SLOTS: usize = 10_000;

/// Shape and weight cap of a shelf.
///
/// ## JSON Example
///
/// ```json
/// { "rows": 5, "columns": 4, "max_row_weight_kg": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows
    pub rows: usize,

    /// Number of slots in each row
    pub columns: usize,

    /// Weight cap shared by all slots of one row (kg)
    pub max_row_weight_kg: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            max_row_weight_kg: DEFAULT_MAX_ROW_WEIGHT_KG,
        }
    }
}

impl GridConfig {
    /// Validate the shape and cap.
    pub fn validate(&self) -> ShelfResult<()> {
        if self.rows == 0 {
            return Err(ShelfError::invalid_input("rows", "0", "A shelf needs at least one row"));
        }
        if self.columns == 0 {
            return Err(ShelfError::invalid_input("columns", "0", "A row needs at least one slot"));
        }
        match self.rows.checked_mul(self.columns) {
            Some(slots) if slots <= MAX_GRID_SLOTS => {}
            _ => {
                return Err(ShelfError::invalid_input(
                    "columns",
                    format!("{} x {}", self.rows, self.columns),
                    format!("A shelf holds at most {} slots", MAX_GRID_SLOTS),
                ))
            }
        }
        if !self.max_row_weight_kg.is_finite() || self.max_row_weight_kg < 0.0 {
            return Err(ShelfError::invalid_input(
                "max_row_weight_kg",
                self.max_row_weight_kg.to_string(),
                "Row weight cap must be a finite non-negative number",
            ));
        }
        Ok(())
    }

    /// Total number of slots, saturating for configs that fail [`validate`](Self::validate)
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

/// Zero-based position of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-based for people reading reports
        write!(f, "row {}, column {}", self.row + 1, self.column + 1)
    }
}

/// Occupancy snapshot of one grid.
///
/// ## JSON Example
///
/// ```json
/// {
///   "grid_id": "S-1",
///   "capacity": 20,
///   "occupied": 3,
///   "free": 17,
///   "total_weight_kg": 9.5,
///   "is_full": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub grid_id: String,
    pub capacity: usize,
    pub occupied: usize,
    pub free: usize,
    pub total_weight_kg: f64,
    pub is_full: bool,
}

/// A shelf with per-row weight caps.
///
/// Mutation takes `&mut self`, so at most one mutation is in flight per grid.
/// Callers sharing a grid across threads must wrap it in their own lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCapacityGrid")]
pub struct CapacityGrid {
    id: String,
    config: GridConfig,
    slots: Vec<Vec<Option<ItemRecord>>>,
}

/// Unvalidated wire form of [`CapacityGrid`].
#[derive(Deserialize)]
struct RawCapacityGrid {
    id: String,
    config: GridConfig,
    slots: Vec<Vec<Option<ItemRecord>>>,
}

impl TryFrom<RawCapacityGrid> for CapacityGrid {
    type Error = ShelfError;

    fn try_from(raw: RawCapacityGrid) -> ShelfResult<Self> {
        validate_id(&raw.id)?;
        let config = raw.config;
        config.validate()?;

        if raw.slots.len() != config.rows || raw.slots.iter().any(|row| row.len() != config.columns) {
            return Err(ShelfError::invalid_input(
                "slots",
                format!("{} rows", raw.slots.len()),
                format!("Slot matrix must be {} x {}", config.rows, config.columns),
            ));
        }

        let mut seen = HashSet::new();
        for (row_index, row) in raw.slots.iter().enumerate() {
            let weight: f64 = row.iter().flatten().map(ItemRecord::weight_kg).sum();
            if weight > config.max_row_weight_kg {
                return Err(ShelfError::invalid_input(
                    "slots",
                    format!("row {} weighs {:.2} kg", row_index, weight),
                    format!("Row weight exceeds cap of {:.2} kg", config.max_row_weight_kg),
                ));
            }
            for item in row.iter().flatten() {
                if !seen.insert(item.id()) {
                    return Err(ShelfError::duplicate_item(item.id()));
                }
            }
        }

        Ok(CapacityGrid {
            id: raw.id,
            config,
            slots: raw.slots,
        })
    }
}

impl CapacityGrid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// * `ShelfError::InvalidInput` for a blank id or an invalid [`GridConfig`]
    pub fn new(id: impl Into<String>, config: GridConfig) -> ShelfResult<Self> {
        let id = id.into();
        validate_id(&id)?;
        config.validate()?;
        Ok(CapacityGrid {
            id,
            config,
            slots: vec![vec![None; config.columns]; config.rows],
        })
    }

    /// Create an empty 5 × 4 grid capped at 8 kg per row.
    pub fn with_default_config(id: impl Into<String>) -> ShelfResult<Self> {
        CapacityGrid::new(id, GridConfig::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current weight of a row, or `None` if the row does not exist.
    pub fn row_weight(&self, row: usize) -> Option<f64> {
        self.slots.get(row).map(|slots| row_weight_of(slots))
    }

    /// Slots of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Option<ItemRecord>]> {
        self.slots.get(row).map(Vec::as_slice)
    }

    /// Item stored at `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&ItemRecord> {
        self.slots.get(slot.row)?.get(slot.column)?.as_ref()
    }

    /// All placed items with their slots, in row-major order.
    pub fn items(&self) -> impl Iterator<Item = (Slot, &ItemRecord)> + '_ {
        self.slots.iter().enumerate().flat_map(|(row, slots)| {
            slots.iter().enumerate().filter_map(move |(column, cell)| {
                cell.as_ref().map(|item| (Slot { row, column }, item))
            })
        })
    }

    /// Place an item with first-fit, reporting why it failed.
    ///
    /// # Returns
    ///
    /// * `Ok(Slot)` - Where the item was placed
    /// * `Err(ShelfError::DuplicateItem)` - The id already occupies a slot
    /// * `Err(ShelfError::PlacementFailed)` - No row has both a free slot and
    ///   enough residual weight
    pub fn try_add(&mut self, item: ItemRecord) -> ShelfResult<Slot> {
        if self.find(item.id()).is_some() {
            return Err(ShelfError::duplicate_item(item.id()));
        }

        let cap = self.config.max_row_weight_kg;
        for (row, slots) in self.slots.iter_mut().enumerate() {
            let current = row_weight_of(slots);
            if current + item.weight_kg() > cap {
                continue;
            }
            if let Some(column) = slots.iter().position(Option::is_none) {
                debug!(
                    grid = %self.id,
                    item = %item.id(),
                    row,
                    column,
                    row_weight_kg = current + item.weight_kg(),
                    "placed item"
                );
                slots[column] = Some(item);
                return Ok(Slot { row, column });
            }
        }

        let reason = if self.is_full() {
            "every slot is occupied".to_string()
        } else {
            format!(
                "no row with a free slot has {:.2} kg of its {:.2} kg cap remaining",
                item.weight_kg(),
                cap
            )
        };
        Err(ShelfError::placement_failed(item.id(), reason))
    }

    /// Place an item with first-fit. Returns `false` when it does not fit;
    /// the grid is unchanged in that case.
    pub fn add(&mut self, item: ItemRecord) -> bool {
        self.try_add(item).is_ok()
    }

    /// Locate an item by id. Read-only.
    pub fn find(&self, id: &str) -> Option<Slot> {
        self.items()
            .find(|(_, item)| item.id() == id)
            .map(|(slot, _)| slot)
    }

    /// Remove an item by id and hand it back.
    pub fn take(&mut self, id: &str) -> Option<ItemRecord> {
        let slot = self.find(id)?;
        let item = self.slots[slot.row][slot.column].take();
        if item.is_some() {
            debug!(grid = %self.id, item = id, row = slot.row, column = slot.column, "removed item");
        }
        item
    }

    /// Remove an item by id. Returns whether it was on the shelf.
    pub fn remove(&mut self, id: &str) -> bool {
        self.take(id).is_some()
    }

    /// Swap the item `old_id` for `new_item` in the same slot.
    ///
    /// The new item must fit in the old item's row once the old weight is
    /// taken out. It is never moved to another row, even if one has room.
    ///
    /// # Returns
    ///
    /// * `Ok(Slot)` - The slot now holding `new_item`
    /// * `Err(ShelfError::ItemNotFound)` - `old_id` is not on the shelf
    /// * `Err(ShelfError::DuplicateItem)` - `new_item`'s id sits in another slot
    /// * `Err(ShelfError::PlacementFailed)` - The row cap would be exceeded
    pub fn try_replace(&mut self, old_id: &str, new_item: ItemRecord) -> ShelfResult<Slot> {
        let slot = self
            .find(old_id)
            .ok_or_else(|| ShelfError::item_not_found(old_id))?;

        if new_item.id() != old_id && self.find(new_item.id()).is_some() {
            return Err(ShelfError::duplicate_item(new_item.id()));
        }

        let cap = self.config.max_row_weight_kg;
        let row = &mut self.slots[slot.row];
        let old_weight = row[slot.column]
            .as_ref()
            .map(ItemRecord::weight_kg)
            .unwrap_or(0.0);
        let without_old = row_weight_of(row) - old_weight;

        if without_old + new_item.weight_kg() > cap {
            return Err(ShelfError::placement_failed(
                new_item.id(),
                format!(
                    "row {} would weigh {:.2} kg, cap is {:.2} kg",
                    slot.row + 1,
                    without_old + new_item.weight_kg(),
                    cap
                ),
            ));
        }

        debug!(grid = %self.id, old = old_id, new = %new_item.id(), row = slot.row, column = slot.column, "replaced item");
        row[slot.column] = Some(new_item);
        Ok(slot)
    }

    /// Swap `old_id` for `new_item` in place. Returns `false` if `old_id` is
    /// absent or the row cannot carry the new weight.
    pub fn replace(&mut self, old_id: &str, new_item: ItemRecord) -> bool {
        self.try_replace(old_id, new_item).is_ok()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.items().count()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity() - self.occupied()
    }

    /// Weight of every placed item (kg)
    pub fn total_weight_kg(&self) -> f64 {
        self.slots.iter().map(|row| row_weight_of(row)).sum()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().flatten().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(Option::is_none)
    }

    /// Occupancy snapshot. Pure function of the current state.
    pub fn summary(&self) -> GridSummary {
        let occupied = self.occupied();
        let capacity = self.capacity();
        GridSummary {
            grid_id: self.id.clone(),
            capacity,
            occupied,
            free: capacity - occupied,
            total_weight_kg: self.total_weight_kg(),
            is_full: occupied == capacity,
        }
    }
}

fn validate_id(id: &str) -> ShelfResult<()> {
    if id.trim().is_empty() {
        return Err(ShelfError::invalid_input("id", id, "Grid id must not be empty"));
    }
    Ok(())
}

fn row_weight_of(slots: &[Option<ItemRecord>]) -> f64 {
    slots.iter().flatten().map(ItemRecord::weight_kg).sum()
}

impl fmt::Display for CapacityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        writeln!(
            f,
            "Shelf {} ({}/{} items, {:.2} kg)",
            self.id, summary.occupied, summary.capacity, summary.total_weight_kg
        )?;
        for (row, slots) in self.slots.iter().enumerate() {
            writeln!(
                f,
                "Row {} ({:.2}/{:.2} kg):",
                row + 1,
                row_weight_of(slots),
                self.config.max_row_weight_kg
            )?;
            for (column, cell) in slots.iter().enumerate() {
                match cell {
                    Some(item) => writeln!(
                        f,
                        "  [{}] {} | {:.2} kg | value {}",
                        column + 1,
                        item.id(),
                        item.weight_kg(),
                        item.value()
                    )?,
                    None => writeln!(f, "  [{}] [empty]", column + 1)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, weight_kg: f64) -> ItemRecord {
        ItemRecord::new(id, weight_kg, 1).unwrap()
    }

    fn small_grid() -> CapacityGrid {
        CapacityGrid::new(
            "T-1",
            GridConfig {
                rows: 2,
                columns: 2,
                max_row_weight_kg: 8.0,
            },
        )
        .unwrap()
    }

    fn assert_rows_within_cap(grid: &CapacityGrid) {
        for row in 0..grid.config().rows {
            let weight = grid.row_weight(row).unwrap();
            assert!(
                weight <= grid.config().max_row_weight_kg,
                "row {} weighs {} kg",
                row,
                weight
            );
        }
    }

    #[test]
    fn test_default_config() {
        let grid = CapacityGrid::with_default_config("S-1").unwrap();
        assert_eq!(grid.capacity(), 20);
        assert_eq!(grid.config().rows, 5);
        assert_eq!(grid.config().columns, 4);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let zero_rows = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert!(CapacityGrid::new("S-1", zero_rows).is_err());

        let nan_cap = GridConfig {
            max_row_weight_kg: f64::NAN,
            ..GridConfig::default()
        };
        assert!(CapacityGrid::new("S-1", nan_cap).is_err());
        assert!(CapacityGrid::new("", GridConfig::default()).is_err());
    }

    #[test]
    fn test_oversized_config_rejected() {
        let wide = GridConfig {
            rows: 1,
            columns: usize::MAX / 2,
            ..GridConfig::default()
        };
        assert_eq!(wide.validate().unwrap_err().error_code(), "INVALID_INPUT");
        assert!(CapacityGrid::new("X", wide).is_err());

        let overflowing = GridConfig {
            rows: usize::MAX,
            columns: 2,
            ..GridConfig::default()
        };
        assert!(overflowing.validate().is_err());
        assert_eq!(overflowing.capacity(), usize::MAX);

        let largest = GridConfig {
            rows: 100,
            columns: MAX_GRID_SLOTS / 100,
            ..GridConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_deserialization_rejects_oversized_config() {
        let json = r#"{
            "id": "X",
            "config": { "rows": 1, "columns": 1152921504606846976, "max_row_weight_kg": 8.0 },
            "slots": []
        }"#;
        assert!(serde_json::from_str::<CapacityGrid>(json).is_err());

        let json = r#"{
            "id": "X",
            "config": { "rows": 4294967296, "columns": 4294967296, "max_row_weight_kg": 8.0 },
            "slots": []
        }"#;
        assert!(serde_json::from_str::<CapacityGrid>(json).is_err());
    }

    #[test]
    fn test_first_fit_fills_row_left_to_right() {
        let mut grid = small_grid();
        assert_eq!(grid.try_add(item("A", 1.0)).unwrap(), Slot { row: 0, column: 0 });
        assert_eq!(grid.try_add(item("B", 1.0)).unwrap(), Slot { row: 0, column: 1 });
        // Row 0 has weight room but no slot left
        assert_eq!(grid.try_add(item("C", 1.0)).unwrap(), Slot { row: 1, column: 0 });
    }

    #[test]
    fn test_overweight_row_is_skipped() {
        let mut grid = small_grid();
        assert!(grid.add(item("A", 6.0)));
        // 6 + 3 > 8, so row 0 is skipped even though column 1 is free
        assert_eq!(grid.try_add(item("B", 3.0)).unwrap(), Slot { row: 1, column: 0 });
        // 6 + 2 = 8 is allowed
        assert_eq!(grid.try_add(item("C", 2.0)).unwrap(), Slot { row: 0, column: 1 });
        assert_rows_within_cap(&grid);
    }

    #[test]
    fn test_failed_add_leaves_grid_unchanged() {
        let mut grid = small_grid();
        grid.add(item("A", 7.0));
        grid.add(item("B", 7.0));
        let before = grid.clone();

        let err = grid.try_add(item("C", 2.0)).unwrap_err();
        assert_eq!(err.error_code(), "PLACEMENT_FAILED");
        assert_eq!(grid, before);
        assert!(!grid.add(item("C", 2.0)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_add_to_full_grid() {
        let mut grid = small_grid();
        for id in ["A", "B", "C", "D"] {
            assert!(grid.add(item(id, 1.0)));
        }
        assert!(grid.is_full());
        match grid.try_add(item("E", 0.5)) {
            Err(ShelfError::PlacementFailed { reason, .. }) => {
                assert_eq!(reason, "every slot is occupied")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_item_heavier_than_cap_never_fits() {
        let mut grid = small_grid();
        assert!(!grid.add(item("HEAVY", 8.5)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut grid = small_grid();
        assert!(grid.add(item("A", 1.0)));
        let err = grid.try_add(item("A", 1.0)).unwrap_err();
        assert_eq!(err, ShelfError::duplicate_item("A"));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_remove_then_find() {
        let mut grid = small_grid();
        grid.add(item("A", 1.0));
        grid.add(item("B", 1.0));
        assert!(grid.remove("A"));
        assert_eq!(grid.find("A"), None);
        assert_eq!(grid.find("B"), Some(Slot { row: 0, column: 1 }));
        assert!(!grid.remove("A"));
    }

    #[test]
    fn test_take_returns_item() {
        let mut grid = small_grid();
        grid.add(item("A", 1.5));
        grid.add(item("B", 2.0));
        let taken = grid.take("B").unwrap();
        assert_eq!(taken, item("B", 2.0));
        assert_eq!(grid.row_weight(0), Some(1.5));
        assert!(grid.get(Slot { row: 0, column: 1 }).is_none());
        assert!(grid.take("B").is_none());
    }

    #[test]
    fn test_row_contents() {
        let mut grid = small_grid();
        grid.add(item("A", 1.0));
        grid.add(item("B", 1.0));
        grid.add(item("C", 1.0));

        let row0 = grid.row(0).unwrap();
        assert_eq!(row0.len(), 2);
        assert_eq!(row0[0].as_ref().map(ItemRecord::id), Some("A"));
        assert_eq!(row0[1].as_ref().map(ItemRecord::id), Some("B"));

        let row1 = grid.row(1).unwrap();
        assert_eq!(row1[0].as_ref().map(ItemRecord::id), Some("C"));
        assert!(row1[1].is_none());
    }

    #[test]
    fn test_removed_slot_is_reused() {
        let mut grid = small_grid();
        grid.add(item("A", 1.0));
        grid.add(item("B", 1.0));
        grid.remove("A");
        assert_eq!(grid.try_add(item("C", 1.0)).unwrap(), Slot { row: 0, column: 0 });
    }

    #[test]
    fn test_find_has_no_side_effects() {
        let mut grid = small_grid();
        grid.add(item("A", 2.0));
        let before = grid.clone();
        for _ in 0..3 {
            assert_eq!(grid.find("A"), Some(Slot { row: 0, column: 0 }));
            assert_eq!(grid.find("missing"), None);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut grid = small_grid();
        grid.add(item("A", 3.0));
        grid.add(item("B", 4.0));
        // Row 0: 7 kg. Without B: 3 kg, so a 5 kg item fits exactly
        let slot = grid.try_replace("B", item("N", 5.0)).unwrap();
        assert_eq!(slot, Slot { row: 0, column: 1 });
        assert_eq!(grid.find("N"), Some(slot));
        assert_eq!(grid.find("B"), None);
        assert_rows_within_cap(&grid);
    }

    #[test]
    fn test_replace_does_not_relocate() {
        let mut grid = small_grid();
        grid.add(item("A", 4.0));
        grid.add(item("B", 4.0));
        // Row 1 is empty, but the replacement must stay in row 0
        let before = grid.clone();
        let err = grid.try_replace("B", item("N", 4.5)).unwrap_err();
        assert_eq!(err.error_code(), "PLACEMENT_FAILED");
        assert_eq!(grid, before);
        assert_eq!(grid.find("N"), None);
    }

    #[test]
    fn test_replace_missing_item() {
        let mut grid = small_grid();
        grid.add(item("A", 1.0));
        assert_eq!(
            grid.try_replace("Z", item("N", 1.0)).unwrap_err(),
            ShelfError::item_not_found("Z")
        );
        assert!(!grid.replace("Z", item("N", 1.0)));
    }

    #[test]
    fn test_replace_with_id_already_on_shelf() {
        let mut grid = small_grid();
        grid.add(item("A", 1.0));
        grid.add(item("B", 1.0));
        assert_eq!(
            grid.try_replace("A", item("B", 1.0)).unwrap_err(),
            ShelfError::duplicate_item("B")
        );
        // Same id is an update in place
        assert!(grid.replace("A", item("A", 2.5)));
        assert_eq!(grid.get(Slot { row: 0, column: 0 }).unwrap().weight_kg(), 2.5);
    }

    #[test]
    fn test_cap_holds_through_mixed_operations() {
        let mut grid = CapacityGrid::with_default_config("S-1").unwrap();
        let weights = [2.5, 3.0, 1.5, 4.0, 0.5, 6.0, 2.0, 7.5, 1.0, 3.5];
        for (i, weight) in weights.iter().enumerate() {
            grid.add(item(&format!("I{}", i), *weight));
            assert_rows_within_cap(&grid);
        }
        grid.remove("I3");
        assert_rows_within_cap(&grid);
        grid.replace("I0", item("R0", 5.5));
        assert_rows_within_cap(&grid);
        grid.replace("I1", item("R1", 8.0));
        assert_rows_within_cap(&grid);
        grid.add(item("LATE", 4.0));
        assert_rows_within_cap(&grid);
    }

    #[test]
    fn test_row_weight_out_of_range() {
        let grid = small_grid();
        assert_eq!(grid.row_weight(0), Some(0.0));
        assert_eq!(grid.row_weight(2), None);
        assert!(grid.row(5).is_none());
        assert!(grid.get(Slot { row: 9, column: 0 }).is_none());
    }

    #[test]
    fn test_summary() {
        let mut grid = small_grid();
        grid.add(item("A", 2.0));
        grid.add(item("B", 3.5));
        let summary = grid.summary();
        assert_eq!(summary.grid_id, "T-1");
        assert_eq!(summary.capacity, 4);
        assert_eq!(summary.occupied, 2);
        assert_eq!(summary.free, 2);
        assert!((summary.total_weight_kg - 5.5).abs() < 1e-9);
        assert!(!summary.is_full);
    }

    #[test]
    fn test_display_marks_empty_slots() {
        let mut grid = small_grid();
        grid.add(item("A", 2.0));
        let text = grid.to_string();
        assert!(text.contains("Shelf T-1 (1/4 items, 2.00 kg)"));
        assert!(text.contains("Row 1 (2.00/8.00 kg):"));
        assert!(text.contains("[1] A | 2.00 kg | value 1"));
        assert!(text.contains("[2] [empty]"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut grid = small_grid();
        grid.add(item("A", 2.0));
        grid.add(item("B", 7.0));
        let json = serde_json::to_string_pretty(&grid).unwrap();
        let roundtrip: CapacityGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, roundtrip);
    }

    #[test]
    fn test_deserialization_rejects_overweight_row() {
        let json = r#"{
            "id": "T-1",
            "config": { "rows": 1, "columns": 2, "max_row_weight_kg": 8.0 },
            "slots": [[
                { "id": "A", "weight_kg": 5.0, "value": 1 },
                { "id": "B", "weight_kg": 5.0, "value": 1 }
            ]]
        }"#;
        assert!(serde_json::from_str::<CapacityGrid>(json).is_err());
    }

    #[test]
    fn test_deserialization_rejects_duplicate_ids() {
        let json = r#"{
            "id": "T-1",
            "config": { "rows": 2, "columns": 1, "max_row_weight_kg": 8.0 },
            "slots": [
                [{ "id": "A", "weight_kg": 1.0, "value": 1 }],
                [{ "id": "A", "weight_kg": 1.0, "value": 1 }]
            ]
        }"#;
        assert!(serde_json::from_str::<CapacityGrid>(json).is_err());
    }

    #[test]
    fn test_deserialization_rejects_wrong_shape() {
        let json = r#"{
            "id": "T-1",
            "config": { "rows": 2, "columns": 2, "max_row_weight_kg": 8.0 },
            "slots": [[null, null]]
        }"#;
        assert!(serde_json::from_str::<CapacityGrid>(json).is_err());
    }
}
