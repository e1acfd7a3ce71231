//! PDF text extraction node.

use crate::error::{Error, Result};
use crate::pdf::extract_pages;

use super::{ConversionNode, NodeOutput, Request};

/// Extract plain text from a PDF, one string per page.
#[derive(Debug, Clone, Default)]
pub struct PdfToTextNode {
    _private: (),
}

impl PdfToTextNode {
    /// Create a new text-extraction node.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ConversionNode for PdfToTextNode {
    fn name(&self) -> &str {
        "pdf_to_text"
    }

    fn description(&self) -> &str {
        "Extract text content from a PDF as one string per page"
    }

    fn handles(&self, request: &Request) -> bool {
        matches!(request, Request::PdfToText { .. })
    }

    fn execute(&self, request: &Request) -> Result<NodeOutput> {
        match request {
            Request::PdfToText { pdf_path } => extract_pages(pdf_path).map(NodeOutput::Pages),
            other => Err(Error::UnsupportedRequest {
                node: "pdf_to_text",
                request: other.operation(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_identity() {
        let node = PdfToTextNode::new();
        assert_eq!(node.name(), "pdf_to_text");
        assert!(node.handles(&Request::PdfToText {
            pdf_path: "a.pdf".into(),
        }));
    }

    #[test]
    fn test_missing_input_surfaces_not_found() {
        let node = PdfToTextNode::new();
        let err = node
            .execute(&Request::PdfToText {
                pdf_path: "definitely_absent.pdf".into(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }
}
