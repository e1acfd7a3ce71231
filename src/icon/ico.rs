//! ICO writer delegating to the image crate's native encoder.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;
use crate::raster::resize_square;

/// Resize `image` to `size`x`size` and write it as a single-image ICO file.
///
/// The ICO format caps entries at 256x256, which is also the largest size in
/// the standard set.
pub fn write_ico(image: &RgbaImage, size: u32, output_path: &Path) -> Result<()> {
    let resized = resize_square(image, size);
    resized.save_with_format(output_path, ImageFormat::Ico)?;
    Ok(())
}
