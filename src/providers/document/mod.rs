pub mod error;
pub mod pdf;
pub mod text;

pub use error::ExtractionError;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;


/// An uploaded file as received from the client: the original file name
/// (its extension drives type dispatch) and the raw byte content.
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }
}

/// Routes an uploaded document to the extractor matching its extension.
pub struct DocumentExtractor {
    text_extractor: TextExtractor,
    pdf_extractor: PdfExtractor,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self {
            text_extractor: TextExtractor::new(),
            pdf_extractor: PdfExtractor::new(),
        }
    }

    /// Returns the plain-text content of the document, or the reason it
    /// could not be read. Unrecognized extensions are rejected before any
    /// parsing is attempted.
    pub fn extract(&self, doc: &UploadedDocument) -> Result<String, ExtractionError> {
        let extension = std::path::Path::new(&doc.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ExtractionError::UnsupportedType(doc.name.clone()))?;

        match extension.to_lowercase().as_str() {
            "txt" => self
                .text_extractor
                .extract_text(&doc.bytes)
                .map_err(|e| ExtractionError::ParseFailure(e.to_string())),
            "pdf" => self
                .pdf_extractor
                .extract_text(&doc.bytes)
                .map_err(|e| ExtractionError::ParseFailure(e.to_string())),
            other => Err(ExtractionError::UnsupportedType(other.to_string())),
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
