//! Emotion detection client for the Watson NLP EmotionPredict API.
//!
//! The remote service owns the actual classification; this module builds the
//! outbound request, normalizes the loosely-structured JSON response into a
//! flat score mapping, and maps edge cases (blank input, rejected input) to
//! the all-null result.

use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::WatsonConfig;
use crate::error::DetectorError;
use crate::types::{AnalysisResult, EMOTIONS};

/// Header carrying the model identifier on every outbound call
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Client for the remote emotion-classification service
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    client: Client,
    url: String,
    model_id: String,
}

impl EmotionDetector {
    /// Create a new detector from the endpoint configuration
    pub fn new(config: &WatsonConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: config.url.clone(),
            model_id: config.model_id.clone(),
        }
    }

    /// Analyze a piece of text, returning the five emotion scores and the
    /// dominant emotion.
    ///
    /// Empty or all-whitespace input returns [`AnalysisResult::null`] without
    /// calling the service, as does a 4xx rejection from the service. Network
    /// and parse failures propagate as [`DetectorError`]; every call is a
    /// single attempt, never retried.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, DetectorError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(AnalysisResult::null());
        }

        debug!(url = %self.url, chars = text.len(), "Sending text to emotion service");

        let response = self
            .client
            .post(&self.url)
            .header(MODEL_ID_HEADER, &self.model_id)
            .json(&json!({ "raw_document": { "text": text } }))
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            warn!(%status, "Emotion service rejected input");
            return Ok(AnalysisResult::null());
        }

        let body = response.text().await?;
        let body: Value = serde_json::from_str(&body)
            .map_err(|e| DetectorError::InvalidResponse(format!("Undecodable body: {e}")))?;

        let scores = flatten_scores(&body).ok_or_else(|| {
            DetectorError::InvalidResponse("Unrecognized response shape".to_string())
        })?;

        Ok(AnalysisResult::from_scores(&scores))
    }
}

/// Normalize a response body into a flat name-to-score mapping.
///
/// The service's response schema varies across deployments, so the rules
/// below are tried in order, each producing the mapping when its shape
/// matches:
/// 1. `{"emotionPredictions": [{"emotion": {...}}, ...]}`
/// 2. `[{"emotion": {...}}, ...]`
/// 3. `[{"emotion": "joy", "score": 0.9}, ...]`
/// 4. `{"emotion": {...}}`
/// 5. the body itself is the mapping, if it names at least one recognized
///    emotion
fn flatten_scores(body: &Value) -> Option<HashMap<String, f64>> {
    if let Some(first) = body
        .get("emotionPredictions")
        .and_then(Value::as_array)
        .and_then(|predictions| predictions.first())
    {
        if let Some(scores) = nested_emotion_map(first) {
            return Some(scores);
        }
    }

    if let Some(entries) = body.as_array() {
        if let Some(scores) = entries.first().and_then(nested_emotion_map) {
            return Some(scores);
        }
        if let Some(scores) = emotion_score_pairs(entries) {
            return Some(scores);
        }
    }

    if let Some(scores) = nested_emotion_map(body) {
        return Some(scores);
    }

    numeric_map(body).filter(|scores| EMOTIONS.iter().any(|e| scores.contains_key(*e)))
}

/// Extract the `emotion` object of a prediction entry as a score map
fn nested_emotion_map(value: &Value) -> Option<HashMap<String, f64>> {
    numeric_map(value.get("emotion")?)
}

/// Fold `[{"emotion": <name>, "score": <value>}, ...]` into a score map
fn emotion_score_pairs(entries: &[Value]) -> Option<HashMap<String, f64>> {
    let mut scores = HashMap::new();
    for entry in entries {
        let name = entry.get("emotion")?.as_str()?;
        let score = entry.get("score")?.as_f64()?;
        scores.insert(name.to_string(), score);
    }

    if scores.is_empty() {
        None
    } else {
        Some(scores)
    }
}

/// Collect the numeric entries of a JSON object into a score map
fn numeric_map(value: &Value) -> Option<HashMap<String, f64>> {
    let object = value.as_object()?;
    let scores: HashMap<String, f64> = object
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|score| (key.clone(), score)))
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_detector() -> EmotionDetector {
        EmotionDetector::new(&WatsonConfig {
            url: "http://127.0.0.1:1/EmotionPredict".to_string(),
            ..WatsonConfig::default()
        })
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        // The endpoint is unreachable, so a network call would fail
        let detector = unreachable_detector();

        let result = detector.analyze("").await.unwrap();
        assert_eq!(result, AnalysisResult::null());

        let result = detector.analyze("  \t\n ").await.unwrap();
        assert_eq!(result, AnalysisResult::null());
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let detector = unreachable_detector();

        let err = detector.analyze("some text").await.unwrap_err();
        assert!(matches!(err, DetectorError::Request(_)));
    }

    #[test]
    fn test_flatten_emotion_predictions_shape() {
        let body = json!({
            "emotionPredictions": [
                {"emotion": {"anger": 0.1, "disgust": 0.2, "fear": 0.3, "joy": 0.9, "sadness": 0.4}}
            ]
        });

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["joy"], 0.9);
        assert_eq!(scores.len(), 5);
    }

    #[test]
    fn test_flatten_prediction_list_shape() {
        let body = json!([{"emotion": {"joy": 0.8, "anger": 0.05}}]);

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["joy"], 0.8);
        assert_eq!(scores["anger"], 0.05);
    }

    #[test]
    fn test_flatten_pair_list_shape() {
        let body = json!([
            {"emotion": "fear", "score": 0.7},
            {"emotion": "joy", "score": 0.1}
        ]);

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["fear"], 0.7);
        assert_eq!(scores["joy"], 0.1);
    }

    #[test]
    fn test_flatten_nested_emotion_shape() {
        let body = json!({"emotion": {"sadness": 0.6}});

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["sadness"], 0.6);
    }

    #[test]
    fn test_flatten_flat_mapping_shape() {
        let body = json!({"anger": 0.2, "joy": 0.5});

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["joy"], 0.5);
    }

    #[test]
    fn test_flatten_rejects_unrecognized_bodies() {
        assert!(flatten_scores(&json!({"error": "oops"})).is_none());
        assert!(flatten_scores(&json!("just a string")).is_none());
        assert!(flatten_scores(&json!([])).is_none());
        assert!(flatten_scores(&json!(null)).is_none());
        // Numeric object with no recognized emotion key
        assert!(flatten_scores(&json!({"surprise": 0.9})).is_none());
    }

    #[test]
    fn test_flatten_prefers_predictions_over_fallback() {
        // A body matching rule 1 must not be read as a flat mapping
        let body = json!({
            "emotionPredictions": [{"emotion": {"joy": 0.9}}],
            "anger": 1.0
        });

        let scores = flatten_scores(&body).unwrap();
        assert_eq!(scores["joy"], 0.9);
        assert!(!scores.contains_key("anger"));
    }
}
