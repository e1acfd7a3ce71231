//! Icon generation: raster image to ICO or ICNS files at standard sizes.
//!
//! [`generate_icons`] is the orchestrator: decode the source image once,
//! then for every size in the format's fixed set, resize with Lanczos3 and
//! write one icon file per size. ICO files use the image crate's native
//! encoder; ICNS files are assembled by the [`icns`] packer, one element per
//! file, named `<base>_<size>.icns`.

pub mod icns;
mod ico;

pub use ico::write_ico;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::resize_square;

/// Standard ICO sizes, ascending.
pub const ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Standard ICNS sizes, ascending.
pub const ICNS_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];

/// Target icon container format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IconFormat {
    /// Windows icon container
    #[default]
    Ico,
    /// Apple icon container
    Icns,
}

impl IconFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ico => "ico",
            Self::Icns => "icns",
        }
    }

    /// The fixed set of sizes generated for this format.
    pub fn sizes(&self) -> &'static [u32] {
        match self {
            Self::Ico => ICO_SIZES,
            Self::Icns => ICNS_SIZES,
        }
    }
}

/// Generate one icon file per standard size from a source image.
///
/// The source is decoded once and converted to RGBA. Output files are named
/// `<base>_<size>.<ext>` after the input file stem and returned in size
/// order. The whole call is all-or-nothing: the first failure aborts it, and
/// files already written for earlier sizes are left on disk.
///
/// # Errors
///
/// * [`Error::InputNotFound`] if `image_path` does not exist
/// * [`Error::Decode`] if the source image cannot be decoded
/// * [`Error::Io`] if the output directory cannot be created or a file
///   cannot be written
/// * [`Error::Encode`] if an output encoding fails
pub fn generate_icons<P, Q>(image_path: P, output_dir: Q, format: IconFormat) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let image_path = image_path.as_ref();
    let output_dir = output_dir.as_ref();

    if !image_path.exists() {
        return Err(Error::InputNotFound(image_path.to_path_buf()));
    }

    let source = image::open(image_path)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => Error::Io(io),
            _ => Error::Decode(e.to_string()),
        })?
        .to_rgba8();

    fs::create_dir_all(output_dir)?;

    let base_name = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string());

    let mut outputs = Vec::with_capacity(format.sizes().len());
    for &size in format.sizes() {
        let file_name = format!("{}_{}.{}", base_name, size, format.extension());
        let output_path = output_dir.join(file_name);

        match format {
            IconFormat::Ico => write_ico(&source, size, &output_path)?,
            IconFormat::Icns => write_icns(&source, size, &output_path)?,
        }

        log::debug!("Wrote {}", output_path.display());
        outputs.push(output_path);
    }

    log::info!(
        "Generated {} {} files from {}",
        outputs.len(),
        format.extension(),
        image_path.display()
    );
    Ok(outputs)
}

/// Resize, PNG-encode in memory, and write a single-element ICNS file.
fn write_icns(image: &image::RgbaImage, size: u32, output_path: &Path) -> Result<()> {
    let resized = resize_square(image, size);

    let mut png = Vec::new();
    resized.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    fs::write(output_path, icns::pack(&[(size, png)]))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_format_extension() {
        assert_eq!(IconFormat::Ico.extension(), "ico");
        assert_eq!(IconFormat::Icns.extension(), "icns");
    }

    #[test]
    fn test_size_sets_are_ascending() {
        for format in [IconFormat::Ico, IconFormat::Icns] {
            let sizes = format.sizes();
            assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(ICO_SIZES.len(), 6);
        assert_eq!(ICNS_SIZES.len(), 7);
    }

    #[test]
    fn test_every_icns_size_has_an_element_type() {
        for &size in ICNS_SIZES {
            assert!(icns::type_for_size(size).is_some(), "{}px untagged", size);
        }
    }

    #[test]
    fn test_default_format() {
        assert_eq!(IconFormat::default(), IconFormat::Ico);
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(serde_json::to_string(&IconFormat::Icns).unwrap(), "\"ICNS\"");
        let parsed: IconFormat = serde_json::from_str("\"ICO\"").unwrap();
        assert_eq!(parsed, IconFormat::Ico);
    }

    #[test]
    fn test_generate_icons_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let err = generate_icons(dir.path().join("nope.png"), &out, IconFormat::Ico).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
        // Nothing was created for a missing input.
        assert!(!out.exists());
    }
}
