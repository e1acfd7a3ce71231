//! SVG to raster image conversion node.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::raster::{render_svg, RasterOptions};

use super::{ConversionNode, NodeOutput, RasterFormat, Request};

/// JPEG encode quality, matching the common high-quality export setting.
const JPEG_QUALITY: u8 = 95;

/// Convert an SVG file to a raster image, returning the output path.
///
/// The output is written to `<output_dir>/<base>.<ext>` where `<base>` is
/// the input file stem. PNG output preserves alpha; JPEG output is flattened
/// onto an opaque white background first, since the format has no alpha
/// channel.
pub fn convert<P, Q>(
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
    let svg_path = svg_path.as_ref();
    let output_dir = output_dir.as_ref();

    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if !svg_path.exists() {
        return Err(Error::InputNotFound(svg_path.to_path_buf()));
    }

    std::fs::create_dir_all(output_dir)?;

    let base_name = svg_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let output_path = output_dir.join(format!("{}.{}", base_name, format.extension()));

    log::info!(
        "Converting {} to {}x{} {}",
        svg_path.display(),
        width,
        height,
        format.extension()
    );

    let rendered = render_svg(svg_path, width, height, options)?;

    match format {
        RasterFormat::Png => rendered.save_with_format(&output_path, ImageFormat::Png)?,
        RasterFormat::Jpeg => {
            let flattened = flatten_onto_white(&rendered);
            let writer = BufWriter::new(File::create(&output_path)?);
            let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
            flattened.write_with_encoder(encoder)?;
        }
    }

    Ok(output_path)
}

/// Composite an RGBA bitmap onto an opaque white background and drop the
/// alpha channel.
fn flatten_onto_white(image: &RgbaImage) -> image::RgbImage {
    let mut background =
        RgbaImage::from_pixel(image.width(), image.height(), Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut background, image, 0, 0);
    DynamicImage::ImageRgba8(background).to_rgb8()
}

/// Convert an SVG document to a PNG or JPEG file of fixed dimensions.
#[derive(Debug, Clone, Default)]
pub struct SvgToImageNode {
    options: RasterOptions,
}

impl SvgToImageNode {
    /// Create a node with default raster options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with custom raster options.
    pub fn with_options(options: RasterOptions) -> Self {
        Self { options }
    }
}

impl ConversionNode for SvgToImageNode {
    fn name(&self) -> &str {
        "svg_to_image"
    }

    fn description(&self) -> &str {
        "Convert an SVG file to PNG or JPEG with fixed dimensions"
    }

    fn handles(&self, request: &Request) -> bool {
        matches!(request, Request::SvgToImage { .. })
    }

    fn execute(&self, request: &Request) -> Result<NodeOutput> {
        match request {
            Request::SvgToImage {
                svg_path,
                width,
                height,
                output_dir,
                format,
            } => convert(
                svg_path,
                *width,
                *height,
                output_dir,
                *format,
                &self.options,
            )
            .map(NodeOutput::File),
            other => Err(Error::UnsupportedRequest {
                node: "svg_to_image",
                request: other.operation(),
            }),
        }
    }
}
