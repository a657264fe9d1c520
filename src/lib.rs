//! Emotion Detector web service
//!
//! A small web front-end that forwards user-submitted text to a remote
//! Watson NLP emotion-classification endpoint, normalizes the response
//! into a fixed five-emotion score mapping, and renders the dominant
//! emotion as a plain-text sentence.

pub mod config;
pub mod detector;
pub mod error;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use detector::EmotionDetector;
pub use error::DetectorError;
pub use types::{AnalysisResult, EmotionScores, EMOTIONS};
