//! # Inventory
//!
//! Canonical store of [`ItemRecord`]s keyed by id. Grids and selections hold
//! copies; this is where the authoritative record lives.
//!
//! Items keep their insertion order. That order matters: it is the sequence
//! handed to the selectors, and the optimal selector only searches its head.
//!
//! ## JSON Format
//!
//! An inventory serializes as a plain array of items:
//!
//! ```json
//! [
//!   { "id": "0001", "weight_kg": 2.0, "value": 10 },
//!   { "id": "0002", "weight_kg": 3.0, "value": 20 }
//! ]
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ShelfError, ShelfResult};
use crate::item::ItemRecord;
use crate::ranking::{self, SortedById};

/// Insertion-ordered item store with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ItemRecord>", into = "Vec<ItemRecord>")]
pub struct Inventory {
    items: Vec<ItemRecord>,
    /// id -> position in `items`
    index: HashMap<String, usize>,
}

impl TryFrom<Vec<ItemRecord>> for Inventory {
    type Error = ShelfError;

    fn try_from(items: Vec<ItemRecord>) -> ShelfResult<Self> {
        Inventory::from_items(items)
    }
}

impl From<Inventory> for Vec<ItemRecord> {
    fn from(inventory: Inventory) -> Self {
        inventory.items
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Build an inventory, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = ItemRecord>) -> ShelfResult<Self> {
        let mut inventory = Inventory::new();
        for item in items {
            inventory.insert(item)?;
        }
        Ok(inventory)
    }

    /// Add an item at the end.
    ///
    /// # Errors
    ///
    /// * `ShelfError::DuplicateItem` if the id is already stored
    pub fn insert(&mut self, item: ItemRecord) -> ShelfResult<()> {
        if self.index.contains_key(item.id()) {
            return Err(ShelfError::duplicate_item(item.id()));
        }
        self.index.insert(item.id().to_string(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ItemRecord> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Remove an item, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<ItemRecord> {
        let position = self.index.remove(id)?;
        let item = self.items.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(item)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy of the items ordered by ascending value (stable)
    pub fn by_value(&self) -> Vec<ItemRecord> {
        ranking::sort_by_value(&self.items)
    }

    /// Copy of the items ordered by id, ready for binary lookup
    pub fn by_id(&self) -> SortedById {
        ranking::sort_by_id(&self.items)
    }
}
