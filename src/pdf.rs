//! PDF per-page text extraction using lopdf.
//!
//! Reading-order and whitespace heuristics are the library's; this module
//! only guarantees the page contract: one string per page, in page order,
//! with the output length always equal to the page count.

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};

/// Extract plain text from a PDF, one string per page in page order.
///
/// A page whose text cannot be extracted (empty page, image-only page,
/// unsupported encoding) yields an empty string at its index rather than an
/// omitted entry.
///
/// # Errors
///
/// * [`Error::InputNotFound`] if `pdf_path` does not exist
/// * [`Error::PdfParse`] if the document is not a valid PDF
/// * [`Error::Encrypted`] if the document is encrypted
///
/// # Example
///
/// ```no_run
/// use fileconv::pdf::extract_pages;
///
/// let pages = extract_pages("document.pdf")?;
/// println!("{} pages", pages.len());
/// # Ok::<(), fileconv::Error>(())
/// ```
pub fn extract_pages<P: AsRef<Path>>(pdf_path: P) -> Result<Vec<String>> {
    let pdf_path = pdf_path.as_ref();

    if !pdf_path.exists() {
        return Err(Error::InputNotFound(pdf_path.to_path_buf()));
    }

    let doc = Document::load(pdf_path)?;
    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }

    let page_ids = doc.get_pages();
    log::info!(
        "Extracting text from {} ({} pages)",
        pdf_path.display(),
        page_ids.len()
    );

    let mut pages = Vec::with_capacity(page_ids.len());
    for (&page_num, _page_id) in page_ids.iter() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                log::debug!("No text extracted from page {}: {}", page_num, e);
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}
