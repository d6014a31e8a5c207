use pdf_extract::extract_text_from_mem;

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts plain text from in-memory PDF bytes, concatenated in page
    /// order. Separators between pages are whatever the library emits.
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String, pdf_extract::OutputError> {
        extract_text_from_mem(bytes)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
