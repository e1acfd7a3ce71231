//! # fileconv
//!
//! Workflow file-format conversion nodes for Rust.
//!
//! This library exposes three independent, stateless conversion operations,
//! each usable as a plain function or wrapped as a node a workflow host can
//! register and dispatch to:
//!
//! - **SVG → raster image** (PNG/JPEG) at exact requested dimensions,
//!   rendered with resvg and supersampled for quality
//! - **Raster image → platform icons** (ICO/ICNS) at the standard size sets,
//!   including a hand-assembled ICNS container packer
//! - **PDF → plain text**, one string per page in page order
//!
//! ## Quick Start
//!
//! ```no_run
//! use fileconv::{svg_to_image, image_to_icons, pdf_to_text, IconFormat, RasterFormat};
//!
//! fn main() -> fileconv::Result<()> {
//!     // Render an SVG to an 800x600 PNG
//!     let path = svg_to_image("logo.svg", 800, 600, "out", RasterFormat::Png)?;
//!     println!("wrote {}", path.display());
//!
//!     // Generate the full set of Windows icons
//!     let icons = image_to_icons("logo.png", "out", IconFormat::Ico)?;
//!     println!("{} icon files", icons.len());
//!
//!     // Extract text page by page
//!     let pages = pdf_to_text("manual.pdf")?;
//!     println!("{} pages", pages.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Host integration
//!
//! Hosts that prefer registration over direct calls build a
//! [`NodeRegistry`], hand each [`Request`] record to
//! [`NodeRegistry::dispatch`], and receive a [`NodeOutput`] or a structured
//! [`NodeReport`]. Progress and failures are reported through the `log`
//! facade; install any logger backend to capture them.

pub mod error;
pub mod icon;
pub mod ops;
pub mod pdf;
pub mod raster;

// Re-export commonly used types
pub use error::{Error, Result};
pub use icon::{generate_icons, IconFormat, ICNS_SIZES, ICO_SIZES};
pub use ops::{
    ConversionNode, ImageToIconNode, NodeOutput, NodeRegistry, NodeReport, PdfToTextNode,
    RasterFormat, Request, SvgToImageNode,
};
pub use raster::{render_svg, resize_square, RasterOptions};

use std::path::{Path, PathBuf};

/// Convert an SVG file to a raster image with default raster options.
///
/// Returns the path of the written file,
/// `<output_dir>/<input stem>.<png|jpg>`.
///
/// # Example
///
/// ```no_run
/// use fileconv::{svg_to_image, RasterFormat};
///
/// let path = svg_to_image("logo.svg", 512, 512, "out", RasterFormat::Png).unwrap();
/// println!("{}", path.display());
/// ```
pub fn svg_to_image<P, Q>(
    svg_path: P,
    width: u32,
    height: u32,
    output_dir: Q,
    format: RasterFormat,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    ops::svg_to_image::convert(
        svg_path,
        width,
        height,
        output_dir,
        format,
        &RasterOptions::default(),
    )
}

/// Convert an SVG file to a raster image with custom raster options.
///
/// # Example
///
/// ```no_run
/// use fileconv::{svg_to_image_with_options, RasterFormat, RasterOptions};
///
/// let options = RasterOptions::new().with_supersample(4);
/// let path = svg_to_image_with_options("logo.svg", 512, 512, "out", RasterFormat::Jpeg, &options).unwrap();
/// ```
pub fn svg_to_image_with_options<P, Q>(
    svg_path: P,
    width: u32,
    height: u32,
    output_dir: Q,
    format: RasterFormat,
    options: &RasterOptions,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    ops::svg_to_image::convert(svg_path, width, height, output_dir, format, options)
}

/// Generate icon files at every standard size from a raster image.
///
/// Equivalent to [`icon::generate_icons`]; returns the written paths in
/// size order.
pub fn image_to_icons<P, Q>(
    image_path: P,
    output_dir: Q,
    format: IconFormat,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    icon::generate_icons(image_path, output_dir, format)
}

/// Extract plain text from a PDF, one string per page in page order.
///
/// Equivalent to [`pdf::extract_pages`].
pub fn pdf_to_text<P: AsRef<Path>>(pdf_path: P) -> Result<Vec<String>> {
    pdf::extract_pages(pdf_path)
}
