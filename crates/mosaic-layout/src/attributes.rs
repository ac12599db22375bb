#![forbid(unsafe_code)]

//! Per-pass cell attribute cache.
//!
//! A placement pass builds a fresh [`AttributeCache`] covering item indices
//! `[0, item_count)` and swaps it in wholesale when the pass completes, so
//! callers never observe a partially-updated cache.

use mosaic_core::geometry::Rect;

/// Computed placement for one item: its index and content-coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAttributes {
    /// Item index in the source sequence.
    pub index: usize,
    /// Frame in content coordinates.
    pub frame: Rect,
}

/// Dense arena of [`CellAttributes`] keyed by item index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeCache {
    records: Vec<Option<CellAttributes>>,
}

impl AttributeCache {
    /// An empty cache; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache sized for `item_count` items, all unplaced.
    pub fn with_item_count(item_count: usize) -> Self {
        Self {
            records: vec![None; item_count],
        }
    }

    /// Record the frame for one item.
    ///
    /// # Panics
    /// Panics if `index` is outside the item range this cache was sized for,
    /// or if the item was already placed this pass.
    pub fn insert(&mut self, index: usize, frame: Rect) {
        assert!(
            index < self.records.len(),
            "item {index} out of range (item_count={})",
            self.records.len()
        );
        let slot = &mut self.records[index];
        assert!(slot.is_none(), "item {index} placed twice in one pass");
        *slot = Some(CellAttributes { index, frame });
    }

    /// Look up the attributes for one item.
    ///
    /// Returns `None` for indices never placed, including every index before
    /// the first pass has run.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&CellAttributes> {
        self.records.get(index).and_then(Option::as_ref)
    }

    /// All placed attributes whose frames intersect `rect`, in index order.
    pub fn in_rect(&self, rect: &Rect) -> Vec<CellAttributes> {
        self.iter()
            .filter(|attrs| attrs.frame.intersects(rect))
            .copied()
            .collect()
    }

    /// Iterate over placed attributes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CellAttributes> {
        self.records.iter().filter_map(Option::as_ref)
    }

    /// Number of placed records.
    pub fn len(&self) -> usize {
        self.records.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no item has been placed.
    pub fn is_empty(&self) -> bool {
        self.records.iter().all(Option::is_none)
    }
}
