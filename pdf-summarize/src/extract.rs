use crate::error::ApiError;

/// Text from every page, in page order. Pages with no extractable text (for
/// example scanned pages) contribute nothing rather than failing the document;
/// `pdf_extract` already behaves that way, so a blank result is legitimate.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ApiError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ApiError::ExtractionFailed(e.to_string()))
}
