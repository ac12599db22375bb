#![forbid(unsafe_code)]

//! Column height tracker.
//!
//! One placement pass owns a [`MosaicColumns`]: heights start at zero, grow as
//! cells land, and are thrown away with the pass. Heights are monotonically
//! non-decreasing within a pass.

/// Running heights for a fixed set of layout columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicColumns {
    heights: Vec<f32>,
}

impl Default for MosaicColumns {
    fn default() -> Self {
        Self::new(crate::DEFAULT_COLUMN_COUNT)
    }
}

impl MosaicColumns {
    /// Create a tracker with `count` columns, all at height zero.
    ///
    /// # Panics
    /// Panics if `count == 0`; a zero-column layout has no shortest column.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "column count must be non-zero");
        Self {
            heights: vec![0.0; count],
        }
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Always false; the constructor rejects zero columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Reset every column height to zero.
    pub fn reset(&mut self) {
        self.heights.fill(0.0);
    }

    /// Current height of one column.
    ///
    /// # Panics
    /// Panics if `column >= len()`.
    #[inline]
    pub fn height_of(&self, column: usize) -> f32 {
        assert!(
            column < self.heights.len(),
            "column {column} out of range (count={})",
            self.heights.len()
        );
        self.heights[column]
    }

    /// Grow one column by `delta`.
    ///
    /// # Panics
    /// Panics if `column >= len()` or `delta` is negative (heights are
    /// monotonic within a pass).
    pub fn append(&mut self, column: usize, delta: f32) {
        assert!(
            column < self.heights.len(),
            "column {column} out of range (count={})",
            self.heights.len()
        );
        assert!(delta >= 0.0, "negative height delta {delta}");
        self.heights[column] += delta;
    }

    /// Grow columns `left` and `left + 1` by the same `delta` in one call.
    ///
    /// Big cells span two adjacent columns; updating both through a single
    /// operation keeps their growth in lockstep for the spanned placement.
    ///
    /// # Panics
    /// Panics if `left + 1 >= len()` or `delta` is negative.
    pub fn append_pair(&mut self, left: usize, delta: f32) {
        assert!(
            left + 1 < self.heights.len(),
            "column pair ({left}, {}) out of range (count={})",
            left + 1,
            self.heights.len()
        );
        assert!(delta >= 0.0, "negative height delta {delta}");
        self.heights[left] += delta;
        self.heights[left + 1] += delta;
    }

    /// Index of the minimum-height column.
    ///
    /// Scans left-to-right and replaces the incumbent only on strict `<`, so
    /// ties deterministically resolve to the lowest index.
    pub fn shortest_column(&self) -> usize {
        let mut index = 0;
        for i in 1..self.heights.len() {
            if self.heights[i] < self.heights[index] {
                index = i;
            }
        }
        index
    }

    /// The minimum column height.
    pub fn min_height(&self) -> f32 {
        self.heights[self.shortest_column()]
    }

    /// All column heights, in column order.
    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::MosaicColumns;

    #[test]
    fn new_columns_start_at_zero() {
        let cols = MosaicColumns::new(3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.heights(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn append_accumulates() {
        let mut cols = MosaicColumns::new(3);
        cols.append(1, 150.0);
        cols.append(1, 150.0);
        assert_eq!(cols.height_of(1), 300.0);
        assert_eq!(cols.height_of(0), 0.0);
    }

    #[test]
    fn append_pair_moves_both_columns() {
        let mut cols = MosaicColumns::new(3);
        cols.append_pair(1, 300.0);
        assert_eq!(cols.heights(), &[0.0, 300.0, 300.0]);
    }

    #[test]
    fn shortest_column_prefers_lowest_index_on_tie() {
        let cols = MosaicColumns::new(3);
        assert_eq!(cols.shortest_column(), 0);

        let mut cols = MosaicColumns::new(3);
        cols.append(0, 100.0);
        // columns 1 and 2 tie at zero
        assert_eq!(cols.shortest_column(), 1);
    }

    #[test]
    fn shortest_column_finds_strict_minimum() {
        let mut cols = MosaicColumns::new(3);
        cols.append(0, 300.0);
        cols.append(1, 150.0);
        cols.append(2, 450.0);
        assert_eq!(cols.shortest_column(), 1);
        assert_eq!(cols.min_height(), 150.0);
    }

    #[test]
    fn reset_zeroes_all_heights() {
        let mut cols = MosaicColumns::new(3);
        cols.append(0, 10.0);
        cols.append_pair(1, 20.0);
        cols.reset();
        assert_eq!(cols.heights(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn height_of_out_of_range_panics() {
        let cols = MosaicColumns::new(3);
        cols.height_of(3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn append_out_of_range_panics() {
        let mut cols = MosaicColumns::new(3);
        cols.append(7, 1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn append_pair_at_last_column_panics() {
        let mut cols = MosaicColumns::new(3);
        cols.append_pair(2, 1.0);
    }

    #[test]
    #[should_panic(expected = "negative height delta")]
    fn negative_delta_panics() {
        let mut cols = MosaicColumns::new(3);
        cols.append(0, -1.0);
    }

    #[test]
    #[should_panic(expected = "column count must be non-zero")]
    fn zero_columns_panics() {
        MosaicColumns::new(0);
    }
}
