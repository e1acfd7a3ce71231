//! Square bitmap resizing for icon generation.

use image::{imageops, RgbaImage};

/// Resize an RGBA bitmap to `size`x`size` pixels.
///
/// Uses Lanczos3 in both directions. An already-correctly-sized bitmap is
/// returned as a copy without resampling, so repeated calls stay
/// deterministic.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.width() == size && image.height() == size {
        return image.clone();
    }
    imageops::resize(image, size, size, imageops::FilterType::Lanczos3)
}
