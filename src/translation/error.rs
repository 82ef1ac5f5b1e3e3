//! Failures of a single translation call.

use thiserror::Error;

/// Why a translation call produced no text.
///
/// Neither kind is retried; the caller decides what the user sees.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The request could not be sent or the body could not be read.
    #[error("Failed to reach translation endpoint {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body is not a response envelope carrying translated text.
    #[error("Malformed response (HTTP {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },
}

impl TranslationError {
    /// Short name of the error kind, used as a structured log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::MalformedResponse { .. } => "malformed_response",
        }
    }
}
