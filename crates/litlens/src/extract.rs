//! PDF text extraction.
//!
//! Thin wrapper over the `pdf-extract` crate's in-memory page API. Pages are
//! concatenated in page order with no separator; pages with no extractable
//! text (e.g., scanned images with no embedded text layer) are skipped, not
//! failed.

use crate::error::{ExtractResult, ExtractionError};

/// PDF magic bytes.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true if the byte head looks like a PDF file.
#[must_use]
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(PDF_MAGIC)
}

/// Extract the full text of a PDF supplied as an opaque byte slice.
///
/// Produces the concatenation of every page's extracted text, in page order,
/// with no separator. If the whole document yields no text the result is
/// [`ExtractionError::NoText`]; any parser failure is
/// [`ExtractionError::Parse`] carrying the parser's message. Extraction
/// failure is terminal for the file; there is no retry.
///
/// # Errors
///
/// Returns error when the document cannot be parsed or contains no
/// extractable text.
pub fn extract_text(bytes: &[u8]) -> ExtractResult<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::parse(e.to_string()))?;

    let page_count = pages.len();
    let text: String = pages.into_iter().filter(|page| !page.trim().is_empty()).collect();

    if text.is_empty() {
        tracing::warn!(page_count, "PDF contained no extractable text");
        return Err(ExtractionError::NoText);
    }

    tracing::debug!(page_count, chars = text.chars().count(), "Extracted PDF text");
    Ok(text)
}
