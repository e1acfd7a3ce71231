//! SVG rasterization and bitmap resizing.
//!
//! [`svg`] wraps the resvg renderer: an SVG document goes in, an RGBA bitmap
//! of exactly the requested dimensions comes out. Rendering happens at a
//! supersampled resolution and is downsampled with Lanczos3 for quality; the
//! factor is a [`RasterOptions`] knob and never changes the output size.
//!
//! [`resize`] holds the square Lanczos3 resizer shared by the icon writers.

mod resize;
mod svg;

pub use resize::resize_square;
pub use svg::{render_svg, RasterOptions};
