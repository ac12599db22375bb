#![forbid(unsafe_code)]

//! Core primitives for the mosaic collection layout.
//!
//! Currently this is just the [`geometry`] module: rectangles, sizes, and
//! per-side insets in continuous content coordinates.

pub mod geometry;

pub use geometry::{Rect, Sides, Size};
