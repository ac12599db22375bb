#![forbid(unsafe_code)]

//! Mosaic packing for collection views.
//!
//! Items come in two sizes: big (2 columns wide, 2 base heights tall) and
//! small (1 column, 1 base height). [`MosaicLayout`] packs a linear item
//! sequence into a fixed set of columns:
//!
//! - Big cells alternate their starting column between the left pair and the
//!   pair one column over.
//! - Small cells are buffered and placed two at a time, stacked into whichever
//!   column is currently shortest.
//! - A trailing unpaired small cell goes alone into the shortest column.
//!
//! The caller supplies item data through a [`MosaicDelegate`] and triggers a
//! full [`MosaicLayout::recompute`] pass whenever the item set or bounds
//! change; queries then run against the frozen result of that pass.
//!
//! ```
//! use mosaic_layout::{CellKind, MosaicDelegate, MosaicLayout, Rect};
//!
//! struct Books;
//!
//! impl MosaicDelegate for Books {
//!     fn cell_kind(&self, index: usize) -> CellKind {
//!         if index % 3 == 0 { CellKind::Big } else { CellKind::Small }
//!     }
//!     fn item_count(&self) -> usize { 9 }
//!     fn content_width(&self) -> f32 { 300.0 }
//!     fn small_cell_height(&self) -> f32 { 150.0 }
//! }
//!
//! let mut layout = MosaicLayout::new();
//! layout.recompute(&Books);
//! let visible = layout.attributes_in_rect(&Rect::new(0.0, 0.0, 300.0, 600.0));
//! assert!(!visible.is_empty());
//! ```

pub mod attributes;
pub mod columns;

pub use attributes::{AttributeCache, CellAttributes};
pub use columns::MosaicColumns;
pub use mosaic_core::geometry::{Rect, Sides, Size};

/// Columns used by [`MosaicLayout::new`].
pub const DEFAULT_COLUMN_COUNT: usize = 3;

/// Size class of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// 2 columns wide, 2 base heights tall.
    Big,
    /// 1 column wide, 1 base height tall.
    Small,
}

/// Per-pass item source for [`MosaicLayout`].
///
/// Any implementer is interchangeable; all values are re-read on every
/// [`MosaicLayout::recompute`] pass and must stay constant within one pass.
pub trait MosaicDelegate {
    /// Size class for the item at `index`.
    fn cell_kind(&self, index: usize) -> CellKind;

    /// Total number of items to place this pass.
    fn item_count(&self) -> usize;

    /// Viewport width driving the column width.
    fn content_width(&self) -> f32;

    /// Base height of a small cell; big cells are twice this.
    fn small_cell_height(&self) -> f32;

    /// Padding applied to every cell frame.
    fn insets(&self) -> Sides {
        Sides::default()
    }
}

/// The mosaic packing engine and its queryable result.
///
/// All placement state is pass-scoped: `recompute` builds column heights and
/// the attribute cache from scratch and swaps them in atomically, so queries
/// never see a half-finished pass. Single-threaded by design; `recompute` is
/// not reentrant.
#[derive(Debug, Default)]
pub struct MosaicLayout {
    columns: MosaicColumns,
    cache: AttributeCache,
    content_width: f32,
}

impl MosaicLayout {
    /// Create a layout with [`DEFAULT_COLUMN_COUNT`] columns.
    pub fn new() -> Self {
        Self::with_columns(DEFAULT_COLUMN_COUNT)
    }

    /// Create a layout with a custom column count.
    ///
    /// # Panics
    /// Panics if `count < 2`; big cells span two adjacent columns.
    pub fn with_columns(count: usize) -> Self {
        assert!(count >= 2, "mosaic layout needs at least 2 columns (got {count})");
        Self {
            columns: MosaicColumns::new(count),
            cache: AttributeCache::new(),
            content_width: 0.0,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Run a full placement pass over `delegate`'s items.
    ///
    /// Consumes items in index order, placing each according to its
    /// [`CellKind`]. Previous pass state is discarded; the new columns and
    /// attribute cache replace it only once the pass has fully completed.
    pub fn recompute<D: MosaicDelegate + ?Sized>(&mut self, delegate: &D) {
        let item_count = delegate.item_count();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "mosaic_recompute",
            items = item_count,
            columns = self.column_count()
        )
        .entered();

        let mut pass = PlacementPass {
            columns: MosaicColumns::new(self.column_count()),
            cache: AttributeCache::with_item_count(item_count),
            content_width: delegate.content_width(),
            small_cell_height: delegate.small_cell_height(),
            insets: delegate.insets(),
        };

        // Cells that have yet to be placed because smalls go in two at a time.
        let mut pending_small: Vec<usize> = Vec::with_capacity(2);
        let mut last_big_on_left = false;

        for index in 0..item_count {
            match delegate.cell_kind(index) {
                CellKind::Big => {
                    pass.place_big(index, if last_big_on_left { 1 } else { 0 });
                    last_big_on_left = !last_big_on_left;
                }
                CellKind::Small => {
                    pending_small.push(index);
                    if pending_small.len() >= 2 {
                        let column = pass.columns.shortest_column();
                        pass.place_small(pending_small[0], column);
                        pass.place_small(pending_small[1], column);
                        pending_small.clear();
                    }
                }
            }
        }

        // A trailing unpaired small goes alone into the shortest column.
        if let Some(&index) = pending_small.first() {
            let column = pass.columns.shortest_column();
            pass.place_small(index, column);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(heights = ?pass.columns.heights(), "pass complete");

        self.columns = pass.columns;
        self.cache = pass.cache;
        self.content_width = pass.content_width;
    }

    /// The scrollable extent of the laid-out content.
    ///
    /// Height is the *minimum* final column height, matching the behavior of
    /// the original mosaic layout this reproduces. Unbalanced columns can
    /// therefore extend past the reported height; see the
    /// `content_height_is_min_quirk` test.
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.columns.min_height())
    }

    /// All placed cells whose frames intersect `rect`, for viewport culling.
    pub fn attributes_in_rect(&self, rect: &Rect) -> Vec<CellAttributes> {
        self.cache.in_rect(rect)
    }

    /// Attributes for one item, or `None` if it was never placed.
    pub fn attribute_at(&self, index: usize) -> Option<CellAttributes> {
        self.cache.get(index).copied()
    }

    /// Whether a bounds change from `old` to `new` requires a new pass.
    ///
    /// True exactly when either dimension changed; the caller is expected to
    /// invoke [`MosaicLayout::recompute`] before querying again.
    pub fn should_recompute_on_resize(&self, old: Size, new: Size) -> bool {
        old != new
    }

    /// Final column heights from the last pass, in column order.
    pub fn column_heights(&self) -> &[f32] {
        self.columns.heights()
    }
}

/// In-flight state of one placement pass.
///
/// Built fresh per pass and moved into the layout only on completion.
struct PlacementPass {
    columns: MosaicColumns,
    cache: AttributeCache,
    content_width: f32,
    small_cell_height: f32,
    insets: Sides,
}

impl PlacementPass {
    fn column_width(&self) -> f32 {
        self.content_width / self.columns.len() as f32
    }

    /// Raw (pre-inset) cell extent for a size class.
    fn cell_extent(&self, kind: CellKind) -> Size {
        let factor = match kind {
            CellKind::Big => 2.0,
            CellKind::Small => 1.0,
        };
        Size::new(
            self.column_width() * factor,
            self.small_cell_height * factor,
        )
    }

    /// Compute and record one cell's frame, returning the height the target
    /// column(s) must grow by.
    ///
    /// The frame is inset on all four sides, but the height fed back to the
    /// column tracker is the raw cell height plus the top inset only. That
    /// asymmetry is load-bearing: it reproduces the spacing of the original
    /// mosaic layout exactly.
    fn place(&mut self, index: usize, kind: CellKind, column: usize) -> f32 {
        let extent = self.cell_extent(kind);
        let frame = Rect::new(
            column as f32 * self.column_width() + self.insets.left,
            self.columns.height_of(column) + self.insets.top,
            extent.width - self.insets.right,
            extent.height - self.insets.bottom,
        );
        self.cache.insert(index, frame);
        extent.height + self.insets.top
    }

    /// Place a big cell spanning `left_column` and the column to its right,
    /// growing both in lockstep.
    fn place_big(&mut self, index: usize, left_column: usize) {
        let delta = self.place(index, CellKind::Big, left_column);
        self.columns.append_pair(left_column, delta);
    }

    /// Place a small cell into a single column.
    fn place_small(&mut self, index: usize, column: usize) {
        let delta = self.place(index, CellKind::Small, column);
        self.columns.append(column, delta);
    }
}
