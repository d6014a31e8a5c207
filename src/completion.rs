use async_trait::async_trait;
use thiserror::Error;

/// Failure kinds at the text-generation provider boundary. Errors are mapped
/// to these variants at the call site so auth, transport and decoding
/// failures stay distinguishable in user-facing messages.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Provider returned HTTP {status}: {detail}")]
    Provider { status: u16, detail: String },

    #[error("Provider response was missing generated text: {0}")]
    MalformedResponse(String),
}

/// A single-turn text completion against an external model.
#[async_trait]
pub trait CompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AnalysisError>;
}
