use std::string::FromUtf8Error;

pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the uploaded bytes as UTF-8, with no further transformation.
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String, FromUtf8Error> {
        String::from_utf8(bytes.to_vec())
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
