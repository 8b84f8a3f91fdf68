//! # Reports
//!
//! Read-only views across several shelves, plus the step that turns a
//! selection into a physical shelf.
//!
//! Each shelf is filled on its own. Nothing here tries to balance items
//! across shelves.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ShelfError;
use crate::grid::{CapacityGrid, Slot};
use crate::item::ItemRecord;

/// Aggregate occupancy over a set of shelves.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shelves": 2,
///   "total_capacity": 40,
///   "items_placed": 9,
///   "free_slots": 31,
///   "occupancy_percent": 22.5,
///   "total_weight_kg": 21.5,
///   "full_shelves": 0,
///   "empty_shelves": 1
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShelfStatistics {
    pub shelves: usize,
    pub total_capacity: usize,
    pub items_placed: usize,
    pub free_slots: usize,
    /// `items_placed / total_capacity * 100`, 0 when there is no capacity
    pub occupancy_percent: f64,
    pub total_weight_kg: f64,
    pub full_shelves: usize,
    pub empty_shelves: usize,
}

impl ShelfStatistics {
    pub fn from_grids<'a>(grids: impl IntoIterator<Item = &'a CapacityGrid>) -> Self {
        let mut stats = ShelfStatistics::default();
        for grid in grids {
            let summary = grid.summary();
            stats.shelves += 1;
            stats.total_capacity += summary.capacity;
            stats.items_placed += summary.occupied;
            stats.free_slots += summary.free;
            stats.total_weight_kg += summary.total_weight_kg;
            if summary.is_full {
                stats.full_shelves += 1;
            }
            if summary.occupied == 0 {
                stats.empty_shelves += 1;
            }
        }
        if stats.total_capacity > 0 {
            stats.occupancy_percent = stats.items_placed as f64 / stats.total_capacity as f64 * 100.0;
        }
        stats
    }
}

/// Where an item sits across a set of shelves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLocation {
    pub grid_id: String,
    pub slot: Slot,
}

/// Every shelf holding `id`, in the order the shelves were given.
pub fn locate_in_grids<'a>(grids: impl IntoIterator<Item = &'a CapacityGrid>, id: &str) -> Vec<ShelfLocation> {
    grids
        .into_iter()
        .filter_map(|grid| {
            grid.find(id).map(|slot| ShelfLocation {
                grid_id: grid.id().to_string(),
                slot,
            })
        })
        .collect()
}

/// Outcome of [`materialize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Items placed, with their slot, in the order they were offered
    pub placed: Vec<(String, Slot)>,

    /// Items that did not fit, with the reason
    pub rejected: Vec<(String, ShelfError)>,
}

impl PlacementReport {
    pub fn all_placed(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Offer each item to `grid` with first-fit, independently of the others.
///
/// Typical input is the items of an optimal selection or an enumerated
/// combination.
pub fn materialize<'a>(grid: &mut CapacityGrid, items: impl IntoIterator<Item = &'a ItemRecord>) -> PlacementReport {
    let mut report = PlacementReport::default();
    for item in items {
        match grid.try_add(item.clone()) {
            Ok(slot) => report.placed.push((item.id().to_string(), slot)),
            Err(e) => report.rejected.push((item.id().to_string(), e)),
        }
    }
    info!(
        grid = grid.id(),
        placed = report.placed.len(),
        rejected = report.rejected.len(),
        "materialized selection"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use crate::selection::{OptimalSelector, SelectorConfig};

    fn item(id: &str, weight_kg: f64, value: u64) -> ItemRecord {
        ItemRecord::new(id, weight_kg, value).unwrap()
    }

    fn grid(id: &str) -> CapacityGrid {
        CapacityGrid::with_default_config(id).unwrap()
    }

    #[test]
    fn test_statistics() {
        let mut a = grid("A");
        a.add(item("1", 2.0, 1));
        a.add(item("2", 3.5, 1));
        let b = grid("B");
        let mut c = CapacityGrid::new(
            "C",
            GridConfig {
                rows: 1,
                columns: 1,
                max_row_weight_kg: 8.0,
            },
        )
        .unwrap();
        c.add(item("3", 1.0, 1));

        let stats = ShelfStatistics::from_grids([&a, &b, &c]);
        assert_eq!(stats.shelves, 3);
        assert_eq!(stats.total_capacity, 41);
        assert_eq!(stats.items_placed, 3);
        assert_eq!(stats.free_slots, 38);
        assert_eq!(stats.full_shelves, 1);
        assert_eq!(stats.empty_shelves, 1);
        assert!((stats.total_weight_kg - 6.5).abs() < 1e-9);
        assert!((stats.occupancy_percent - 3.0 / 41.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_no_shelves() {
        let stats = ShelfStatistics::from_grids(std::iter::empty());
        assert_eq!(stats, ShelfStatistics::default());
    }

    #[test]
    fn test_locate_in_grids() {
        let mut a = grid("A");
        let mut b = grid("B");
        a.add(item("X", 1.0, 1));
        b.add(item("Y", 7.5, 1));
        b.add(item("X", 1.0, 1));
        let grids = vec![a, b];

        let found = locate_in_grids(&grids, "X");
        assert_eq!(
            found,
            vec![
                ShelfLocation {
                    grid_id: "A".to_string(),
                    slot: Slot { row: 0, column: 0 },
                },
                ShelfLocation {
                    grid_id: "B".to_string(),
                    slot: Slot { row: 1, column: 0 },
                },
            ]
        );
        assert!(locate_in_grids(&grids, "missing").is_empty());
    }

    #[test]
    fn test_materialize_optimal_selection() {
        let items = vec![
            item("A", 3.0, 10),
            item("B", 5.0, 15),
            item("C", 2.0, 8),
            item("D", 4.0, 12),
        ];
        let report = OptimalSelector::new(SelectorConfig::default())
            .unwrap()
            .select(&items);

        let mut shelf = grid("OPT");
        let placement = materialize(&mut shelf, &report.best.items);
        assert!(placement.all_placed());
        // The selection fits the 8 kg budget, so it fits one 8 kg row
        assert_eq!(
            placement.placed,
            vec![
                ("A".to_string(), Slot { row: 0, column: 0 }),
                ("B".to_string(), Slot { row: 0, column: 1 }),
            ]
        );
    }

    #[test]
    fn test_materialize_reports_rejections() {
        let mut shelf = CapacityGrid::new(
            "TINY",
            GridConfig {
                rows: 1,
                columns: 2,
                max_row_weight_kg: 4.0,
            },
        )
        .unwrap();
        let items = vec![item("A", 3.0, 1), item("B", 2.0, 1), item("C", 1.0, 1), item("A", 0.5, 1)];
        let report = materialize(&mut shelf, &items);

        let placed: Vec<&str> = report.placed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(placed, vec!["A", "C"]);
        let rejected: Vec<(&str, &str)> = report
            .rejected
            .iter()
            .map(|(id, e)| (id.as_str(), e.error_code()))
            .collect();
        assert_eq!(rejected, vec![("B", "PLACEMENT_FAILED"), ("A", "DUPLICATE_ITEM")]);
        assert!(!report.all_placed());
    }
}
