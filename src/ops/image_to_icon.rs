//! Image to icon conversion node.

use crate::error::{Error, Result};
use crate::icon::generate_icons;

use super::{ConversionNode, NodeOutput, Request};

/// Generate ICO or ICNS icon files at every standard size from a raster
/// image.
#[derive(Debug, Clone, Default)]
pub struct ImageToIconNode {
    _private: (),
}

impl ImageToIconNode {
    /// Create a new icon-generation node.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ConversionNode for ImageToIconNode {
    fn name(&self) -> &str {
        "image_to_icon"
    }

    fn description(&self) -> &str {
        "Convert a raster image to ICO or ICNS icon files at standard sizes"
    }

    fn handles(&self, request: &Request) -> bool {
        matches!(request, Request::ImageToIcon { .. })
    }

    fn execute(&self, request: &Request) -> Result<NodeOutput> {
        match request {
            Request::ImageToIcon {
                image_path,
                output_dir,
                format,
            } => generate_icons(image_path, output_dir, *format).map(NodeOutput::Files),
            other => Err(Error::UnsupportedRequest {
                node: "image_to_icon",
                request: other.operation(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconFormat;

    #[test]
    fn test_node_identity() {
        let node = ImageToIconNode::new();
        assert_eq!(node.name(), "image_to_icon");
        assert!(node.handles(&Request::ImageToIcon {
            image_path: "a.png".into(),
            output_dir: "out".into(),
            format: IconFormat::Ico,
        }));
        assert!(!node.handles(&Request::PdfToText {
            pdf_path: "a.pdf".into(),
        }));
    }

    #[test]
    fn test_missing_input_surfaces_not_found() {
        let node = ImageToIconNode::new();
        let dir = tempfile::tempdir().unwrap();
        let err = node
            .execute(&Request::ImageToIcon {
                image_path: dir.path().join("absent.png"),
                output_dir: dir.path().join("out"),
                format: IconFormat::Icns,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }
}
