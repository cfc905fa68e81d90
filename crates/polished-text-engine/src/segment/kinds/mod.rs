//! # Span Kinds
//!
//! Edit-span types that own their delimiters, so the scanner never
//! hardcodes `~~` or `**`.
//!
//! - **`Deletion`**: `MARK = b"~~"`
//! - **`Insertion`**: `MARK = b"**"`

pub mod deletion;
pub mod insertion;

pub use deletion::Deletion;
pub use insertion::Insertion;
