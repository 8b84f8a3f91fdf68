//! # Ranking
//!
//! Deterministic, stable ordering of items for reports and indexed lookup.
//!
//! All orderings share one top-down merge sort: split at the midpoint, sort
//! each half, merge by taking the left head whenever it is `<=` the right
//! head. Taking left on ties is what makes the sort stable.
//!
//! ## Orderings
//!
//! - [`sort_by_value`] - ascending value
//! - [`sort_by_id`] - ascending id, wrapped in [`SortedById`] for lookup
//! - [`sort_pairs`] - arbitrary `(key, payload)` pairs, by key only
//! - [`merge_sort_by`] / [`merge_sort_by_key`] - anything else
//!
//! ## Binary Lookup
//!
//! [`binary_search_by_id`] assumes its input is sorted by id. Passing an
//! unsorted or value-sorted slice silently returns wrong answers. Prefer
//! [`SortedById::find`], which can only be built by [`sort_by_id`].
//!
//! ```rust
//! use shelf_core::item::ItemRecord;
//! use shelf_core::ranking::sort_by_id;
//!
//! let items = vec![
//!     ItemRecord::new("0300", 1.0, 5)?,
//!     ItemRecord::new("0100", 1.0, 9)?,
//!     ItemRecord::new("0200", 1.0, 7)?,
//! ];
//! let index = sort_by_id(&items);
//! assert_eq!(index.find("0200").map(|i| i.value()), Some(7));
//! assert!(index.find("0400").is_none());
//! # Ok::<(), shelf_core::errors::ShelfError>(())
//! ```

use std::cmp::Ordering;

use serde::Serialize;

use crate::item::ItemRecord;

/// Stable merge sort with a comparator. Returns a new, sorted vector.
pub fn merge_sort_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering + Copy,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_by(&items[..mid], compare);
    let right = merge_sort_by(&items[mid..], compare);
    merge(left, right, compare)
}

/// Stable merge sort by a derived key. Returns a new, sorted vector.
pub fn merge_sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    merge_sort_by(items, move |a: &T, b: &T| key(a).cmp(&key(b)))
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Items ordered by ascending value; equal values keep input order.
pub fn sort_by_value(items: &[ItemRecord]) -> Vec<ItemRecord> {
    merge_sort_by_key(items, |item: &ItemRecord| item.value())
}

/// Items ordered by descending value; equal values keep input order.
pub fn sort_by_value_desc(items: &[ItemRecord]) -> Vec<ItemRecord> {
    merge_sort_by_key(items, |item: &ItemRecord| std::cmp::Reverse(item.value()))
}

/// Items ordered by ascending id, ready for binary lookup.
pub fn sort_by_id(items: &[ItemRecord]) -> SortedById {
    SortedById(merge_sort_by(items, |a: &ItemRecord, b: &ItemRecord| a.id().cmp(b.id())))
}

/// `(key, payload)` pairs ordered by key. Payloads are never compared, so
/// they need not be comparable.
pub fn sort_pairs<K, V>(pairs: &[(K, V)]) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Clone,
{
    merge_sort_by(pairs, |a: &(K, V), b: &(K, V)| a.0.cmp(&b.0))
}

/// Binary search for `id` in a slice.
///
/// # Precondition
///
/// `sorted` must be in ascending id order, as produced by [`sort_by_id`].
/// On any other ordering the result is unspecified (usually `None` for an
/// item that is present).
pub fn binary_search_by_id<'a>(sorted: &'a [ItemRecord], id: &str) -> Option<&'a ItemRecord> {
    let mut low = 0usize;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].id().cmp(id) {
            Ordering::Equal => return Some(&sorted[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Items known to be in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SortedById(Vec<ItemRecord>);

impl SortedById {
    /// Logarithmic lookup by id.
    pub fn find(&self, id: &str) -> Option<&ItemRecord> {
        binary_search_by_id(&self.0, id)
    }

    pub fn as_slice(&self) -> &[ItemRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<ItemRecord> {
        self.0
    }
}
