pub mod document;
pub mod gemini;
