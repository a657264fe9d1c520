use thiserror::Error;

/// Errors from the emotion detection client.
///
/// These cover transport-level and parse-level failures only. Empty input and
/// service-rejected (4xx) input are not errors; they produce the all-null
/// [`crate::types::AnalysisResult`] instead.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
