#![forbid(unsafe_code)]

//! Mosaic public facade crate.
//!
//! Re-exports the geometry primitives and the packing layout so callers can
//! depend on one crate, plus a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use mosaic_core::geometry::{Rect, Sides, Size};

// --- Layout re-exports -----------------------------------------------------

pub use mosaic_layout::{
    AttributeCache, CellAttributes, CellKind, DEFAULT_COLUMN_COUNT, MosaicColumns, MosaicDelegate,
    MosaicLayout,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{CellAttributes, CellKind, MosaicDelegate, MosaicLayout, Rect, Sides, Size};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    struct Three;

    impl MosaicDelegate for Three {
        fn cell_kind(&self, _index: usize) -> CellKind {
            CellKind::Small
        }
        fn item_count(&self) -> usize {
            3
        }
        fn content_width(&self) -> f32 {
            300.0
        }
        fn small_cell_height(&self) -> f32 {
            150.0
        }
    }

    #[test]
    fn facade_exposes_full_flow() {
        let mut layout = MosaicLayout::new();
        layout.recompute(&Three);
        assert_eq!(layout.content_size(), Size::new(300.0, 0.0));
        assert_eq!(
            layout
                .attributes_in_rect(&Rect::new(0.0, 0.0, 300.0, 600.0))
                .len(),
            3
        );
    }
}
