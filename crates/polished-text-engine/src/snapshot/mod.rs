//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: Converts segment nodes to a stable, serializable `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Checks that node spans partition the input (in bounds, in
//!   order, no gaps, no overlaps, inner spans inside their full span)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use invariants::violations;
pub use normalize::{Snap, normalize};
