//! Software rendering module
//!
//! Sprites are composited into an in-memory screen surface; only the
//! dirty regions of that surface are pushed to the display each frame.

pub mod background;
pub mod dirty;
pub mod surface;
pub mod text;

pub use background::{compose_background, redraw_background};
pub use dirty::DirtyRegions;
pub use surface::Surface;
pub use text::{TextRenderer, hits_label};
