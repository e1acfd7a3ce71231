//! SVG rasterizer adapter built on resvg.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{imageops, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};

/// Options controlling SVG rasterization quality.
///
/// The supersample factor is an internal quality knob: the document is
/// rendered at `supersample` times the requested dimensions and then
/// downsampled, but the output size contract never changes.
///
/// # Example
///
/// ```
/// use fileconv::RasterOptions;
///
/// let options = RasterOptions::new().with_supersample(4);
/// assert_eq!(options.supersample, 4);
/// ```
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Internal render scale before downsampling (minimum 1)
    pub supersample: u32,

    /// Load system fonts so `<text>` elements render
    pub load_system_fonts: bool,

    /// Directory for resolving relative hrefs in the document.
    /// Defaults to the SVG file's own directory.
    pub resources_dir: Option<PathBuf>,
}

impl RasterOptions {
    /// Create new raster options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supersample factor. Values below 1 are clamped to 1.
    pub fn with_supersample(mut self, factor: u32) -> Self {
        self.supersample = factor.max(1);
        self
    }

    /// Enable or disable system font loading.
    pub fn with_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the directory used to resolve relative hrefs.
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = Some(dir.into());
        self
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            supersample: 2,
            load_system_fonts: true,
            resources_dir: None,
        }
    }
}

/// Render an SVG document to an RGBA bitmap of exactly `width`x`height`.
///
/// The pixmap resvg produces holds premultiplied alpha; pixels are
/// demultiplied before they reach the `image` crate so transparency survives
/// resampling and encoding.
///
/// # Errors
///
/// * [`Error::InputNotFound`] if `svg_path` does not exist
/// * [`Error::InvalidDimensions`] if either dimension is zero
/// * [`Error::Render`] if the document is malformed or the render target
///   cannot be allocated
pub fn render_svg<P: AsRef<Path>>(
    svg_path: P,
    width: u32,
    height: u32,
    options: &RasterOptions,
) -> Result<RgbaImage> {
    let svg_path = svg_path.as_ref();

    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if !svg_path.exists() {
        return Err(Error::InputNotFound(svg_path.to_path_buf()));
    }

    let svg_data = std::fs::read(svg_path)?;

    let mut opt = usvg::Options::default();
    opt.resources_dir = options.resources_dir.clone().or_else(|| {
        std::fs::canonicalize(svg_path)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
    });
    if options.load_system_fonts {
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();
    }

    let tree =
        usvg::Tree::from_data(&svg_data, &opt).map_err(|e| Error::Render(e.to_string()))?;

    let factor = options.supersample.max(1);
    let render_width = width * factor;
    let render_height = height * factor;

    log::debug!(
        "Rendering {} at {}x{} ({}x supersample)",
        svg_path.display(),
        render_width,
        render_height,
        factor
    );

    let mut pixmap = tiny_skia::Pixmap::new(render_width, render_height).ok_or_else(|| {
        Error::Render(format!(
            "failed to allocate {}x{} render target",
            render_width, render_height
        ))
    })?;

    let transform = tiny_skia::Transform::from_scale(
        render_width as f32 / tree.size().width(),
        render_height as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(render_width as usize * render_height as usize * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let rendered = RgbaImage::from_raw(render_width, render_height, rgba)
        .ok_or_else(|| Error::Render("render buffer size mismatch".into()))?;

    if factor == 1 {
        return Ok(rendered);
    }
    Ok(imageops::resize(
        &rendered,
        width,
        height,
        imageops::FilterType::Lanczos3,
    ))
}
