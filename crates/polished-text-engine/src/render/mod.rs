//! # Rendering
//!
//! Maps segments onto output formats. Each renderer walks the list once and
//! emits segments in order, so the rendered passage reads left to right
//! exactly like the source.
//!
//! - **`html`**: `<del>`/`<ins>` markup with escaped text
//! - **`markup`**: canonical `~~`/`**` annotation text

pub mod html;
pub mod markup;

pub use html::html;
pub use markup::markup;
