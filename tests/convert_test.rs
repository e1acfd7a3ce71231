//! End-to-end tests for the three conversion operations.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tempfile::TempDir;

use fileconv::{
    generate_icons, image_to_icons, pdf_to_text, svg_to_image, svg_to_image_with_options, Error,
    IconFormat, RasterFormat, RasterOptions, ICNS_SIZES, ICO_SIZES,
};

const OPAQUE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20"><rect width="20" height="20" fill="#2266aa"/></svg>"##;

const TRANSLUCENT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20"><rect width="20" height="20" fill="#2266aa" fill-opacity="0.5"/></svg>"##;

fn write_svg(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_source_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_fn(80, 80, |x, y| {
        image::Rgba([(x * 3) as u8, (y * 3) as u8, 120, 255])
    });
    img.save(&path).unwrap();
    path
}

/// Build a PDF on disk: one page per entry, each with the given text
/// (an empty string produces a page with an empty content stream).
fn write_pdf(path: &Path, page_texts: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

// ---- SVG to image ----

#[test]
fn test_svg_to_png_exact_dimensions_and_name() {
    let dir = TempDir::new().unwrap();
    let svg = write_svg(dir.path(), "logo.svg", OPAQUE_SVG);
    let out = dir.path().join("out");

    let path = svg_to_image(&svg, 123, 77, &out, RasterFormat::Png).unwrap();

    assert_eq!(path, out.join("logo.png"));
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (123, 77));
}

#[test]
fn test_svg_to_png_preserves_alpha() {
    let dir = TempDir::new().unwrap();
    let svg = write_svg(dir.path(), "soft.svg", TRANSLUCENT_SVG);

    let path = svg_to_image(&svg, 16, 16, dir.path().join("out"), RasterFormat::Png).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    let alpha = img.get_pixel(8, 8)[3];
    assert!(alpha > 0 && alpha < 255, "alpha {} not translucent", alpha);
}

#[test]
fn test_svg_to_jpeg_has_no_alpha_channel() {
    let dir = TempDir::new().unwrap();
    let svg = write_svg(dir.path(), "soft.svg", TRANSLUCENT_SVG);

    let path = svg_to_image(&svg, 32, 32, dir.path().join("out"), RasterFormat::Jpeg).unwrap();

    assert_eq!(path.extension().unwrap(), "jpg");
    let img = image::open(&path).unwrap();
    assert!(!img.color().has_alpha(), "JPEG output must be opaque");
}

#[test]
fn test_svg_supersample_does_not_change_output_size() {
    let dir = TempDir::new().unwrap();
    let svg = write_svg(dir.path(), "logo.svg", OPAQUE_SVG);

    for factor in [1u32, 2, 8] {
        let out = dir.path().join(format!("out{}", factor));
        let options = RasterOptions::new().with_supersample(factor);
        let path =
            svg_to_image_with_options(&svg, 50, 40, &out, RasterFormat::Png, &options).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (50, 40));
    }
}

#[test]
fn test_svg_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let svg = write_svg(dir.path(), "logo.svg", OPAQUE_SVG);

    let first = svg_to_image(&svg, 64, 64, dir.path().join("a"), RasterFormat::Png).unwrap();
    let second = svg_to_image(&svg, 64, 64, dir.path().join("b"), RasterFormat::Png).unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_svg_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    let err = svg_to_image(dir.path().join("nope.svg"), 10, 10, &out, RasterFormat::Png)
        .unwrap_err();

    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(!out.exists());
}

// ---- Image to icon ----

#[test]
fn test_ico_generation_produces_full_size_set() {
    let dir = TempDir::new().unwrap();
    let src = write_source_png(dir.path(), "app.png");
    let out = dir.path().join("icons");

    let paths = image_to_icons(&src, &out, IconFormat::Ico).unwrap();

    assert_eq!(paths.len(), ICO_SIZES.len());
    for (path, &size) in paths.iter().zip(ICO_SIZES) {
        assert_eq!(*path, out.join(format!("app_{}.ico", size)));
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }
}

#[test]
fn test_icns_generation_produces_full_size_set() {
    let dir = TempDir::new().unwrap();
    let src = write_source_png(dir.path(), "app.png");
    let out = dir.path().join("icons");

    let paths = generate_icons(&src, &out, IconFormat::Icns).unwrap();

    assert_eq!(paths.len(), ICNS_SIZES.len());
    for (path, &size) in paths.iter().zip(ICNS_SIZES) {
        assert_eq!(*path, out.join(format!("app_{}.icns", size)));

        let data = fs::read(path).unwrap();
        assert_eq!(&data[..4], b"icns");
        let total = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        assert_eq!(total as usize, data.len());

        // Single element: declared length covers everything after the file header.
        let element_len = u32::from_be_bytes([data[12], data[13], data[14], data[15]]);
        assert_eq!(element_len as usize, data.len() - 8);

        let decoded = image::load_from_memory(&data[16..]).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (size, size));
    }
}

#[test]
fn test_icon_generation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let src = write_source_png(dir.path(), "app.png");

    let first = image_to_icons(&src, dir.path().join("a"), IconFormat::Icns).unwrap();
    let second = image_to_icons(&src, dir.path().join("b"), IconFormat::Icns).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }
}

#[test]
fn test_icon_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("icons");

    let err = image_to_icons(dir.path().join("nope.png"), &out, IconFormat::Ico).unwrap_err();

    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(!out.exists());
}

#[test]
fn test_icon_rejects_undecodable_input() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("garbage.png");
    fs::write(&src, b"not an image").unwrap();

    let err = image_to_icons(&src, dir.path().join("icons"), IconFormat::Ico).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

// ---- PDF to text ----

#[test]
fn test_pdf_extracts_one_string_per_page_in_order() {
    let dir = TempDir::new().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_pdf(&pdf, &["Alpha", "Bravo", "Charlie"]);

    let pages = pdf_to_text(&pdf).unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages[0].contains("Alpha"));
    assert!(pages[1].contains("Bravo"));
    assert!(pages[2].contains("Charlie"));
}

#[test]
fn test_pdf_empty_page_yields_empty_string_at_index() {
    let dir = TempDir::new().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_pdf(&pdf, &["Alpha", "", "Charlie"]);

    let pages = pdf_to_text(&pdf).unwrap();

    assert_eq!(pages.len(), 3, "empty page must not be omitted");
    assert!(pages[0].contains("Alpha"));
    assert!(pages[1].trim().is_empty());
    assert!(pages[2].contains("Charlie"));
}

#[test]
fn test_pdf_missing_input() {
    let err = pdf_to_text("definitely_absent.pdf").unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
}

#[test]
fn test_pdf_rejects_invalid_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.pdf");
    fs::write(&path, b"%PDF-nope, not really").unwrap();

    let err = pdf_to_text(&path).unwrap_err();
    assert!(matches!(err, Error::PdfParse(_)));
}
