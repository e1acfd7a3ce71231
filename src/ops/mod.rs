//! Conversion node operations and the workflow-host adapter.
//!
//! The core conversions live in [`crate::raster`], [`crate::icon`], and
//! [`crate::pdf`] as plain callable functions. This module wraps them as
//! nodes a workflow host can register and dispatch to: each node validates a
//! [`Request`] record, runs the conversion, and returns a [`NodeOutput`]
//! through one uniform `Result` convention. [`NodeReport`] is the
//! serializable projection of that result for hosts that want a
//! `{success, output, error_message}` record instead of an error type.
//!
//! # Example
//!
//! ```no_run
//! use fileconv::ops::{NodeRegistry, Request};
//! use std::path::PathBuf;
//!
//! fn main() -> fileconv::Result<()> {
//!     let registry = NodeRegistry::with_defaults();
//!     let output = registry.dispatch(&Request::PdfToText {
//!         pdf_path: PathBuf::from("document.pdf"),
//!     })?;
//!     println!("{:?}", output);
//!     Ok(())
//! }
//! ```

pub mod image_to_icon;
pub mod pdf_to_text;
pub mod svg_to_image;

pub use image_to_icon::ImageToIconNode;
pub use pdf_to_text::PdfToTextNode;
pub use svg_to_image::SvgToImageNode;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::IconFormat;

/// Raster output format for the SVG conversion node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RasterFormat {
    /// PNG, alpha preserved
    #[default]
    Png,
    /// JPEG, alpha flattened onto white
    Jpeg,
}

impl RasterFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// A conversion request record, one variant per node.
///
/// This is the input shape a workflow host hands over; `format` fields
/// default the way the node inputs declare them (PNG, ICO).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    /// Render an SVG document to a raster image of fixed dimensions.
    SvgToImage {
        svg_path: PathBuf,
        width: u32,
        height: u32,
        output_dir: PathBuf,
        #[serde(default)]
        format: RasterFormat,
    },
    /// Generate icon files at every standard size for the chosen container.
    ImageToIcon {
        image_path: PathBuf,
        output_dir: PathBuf,
        #[serde(default)]
        format: IconFormat,
    },
    /// Extract plain text from a PDF, one string per page.
    PdfToText { pdf_path: PathBuf },
}

impl Request {
    /// Operation name used in logs, error messages, and the serde tag.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::SvgToImage { .. } => "svg_to_image",
            Request::ImageToIcon { .. } => "image_to_icon",
            Request::PdfToText { .. } => "pdf_to_text",
        }
    }
}

/// Result of a conversion operation.
///
/// List order is significant: icon paths come back in size order, page text
/// in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOutput {
    /// Single output file (SVG to image)
    File(PathBuf),
    /// One output file per generated size (image to icon)
    Files(Vec<PathBuf>),
    /// One string per page (PDF to text)
    Pages(Vec<String>),
}

/// Structured operation report for host integration.
///
/// Exactly one of `output` and `error_message` is set; all three operations
/// use this same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeReport {
    /// Whether the operation completed
    pub success: bool,

    /// Operation output on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<NodeOutput>,

    /// Human-readable failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl NodeReport {
    /// Build a report from an operation result.
    pub fn from_result(result: Result<NodeOutput>) -> Self {
        match result {
            Ok(output) => Self {
                success: true,
                output: Some(output),
                error_message: None,
            },
            Err(e) => Self {
                success: false,
                output: None,
                error_message: Some(e.to_string()),
            },
        }
    }
}

impl From<Result<NodeOutput>> for NodeReport {
    fn from(result: Result<NodeOutput>) -> Self {
        Self::from_result(result)
    }
}

/// Trait for conversion nodes.
///
/// Implement this trait to expose a new operation to the host. Nodes are
/// stateless apart from configuration captured at construction time; every
/// `execute` call owns its own buffers and files.
pub trait ConversionNode: Send + Sync {
    /// Stable node name used for registration and logs.
    fn name(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Whether this node handles the given request variant.
    fn handles(&self, request: &Request) -> bool;

    /// Run the conversion.
    fn execute(&self, request: &Request) -> Result<NodeOutput>;
}

/// Registry of conversion nodes.
///
/// The registry is the host adapter: it owns the node set, routes each
/// request to the node that handles it, and logs the outcome. Registering a
/// node under an already-taken name replaces the earlier node.
pub struct NodeRegistry {
    nodes: Vec<Arc<dyn ConversionNode>>,
    by_name: HashMap<String, Arc<dyn ConversionNode>>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the three default nodes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SvgToImageNode::new()));
        registry.register(Arc::new(ImageToIconNode::new()));
        registry.register(Arc::new(PdfToTextNode::new()));
        registry
    }

    /// Register a node. The latest registration under a name wins.
    pub fn register(&mut self, node: Arc<dyn ConversionNode>) {
        let name = node.name().to_lowercase();
        self.nodes.retain(|n| n.name().to_lowercase() != name);
        self.nodes.push(node.clone());
        self.by_name.insert(name, node);
    }

    /// Get a node by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ConversionNode>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Names of all registered nodes, in registration order.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }

    /// Route a request to the node that handles it and run the conversion.
    ///
    /// Failures are logged at error level with the operation name before
    /// being surfaced; no retries are performed.
    pub fn dispatch(&self, request: &Request) -> Result<NodeOutput> {
        let node = self
            .nodes
            .iter()
            .find(|n| n.handles(request))
            .ok_or(Error::UnsupportedRequest {
                node: "registry",
                request: request.operation(),
            })?;

        log::info!("Running '{}' via node '{}'", request.operation(), node.name());
        match node.execute(request) {
            Ok(output) => Ok(output),
            Err(e) => {
                log::error!("{} failed: {}", request.operation(), e);
                Err(e)
            }
        }
    }

    /// Dispatch a request and fold the outcome into a [`NodeReport`].
    pub fn run(&self, request: &Request) -> NodeReport {
        NodeReport::from_result(self.dispatch(request))
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
