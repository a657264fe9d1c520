//! HTTP route handlers.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::types::AnalysisResult;

use super::AppState;

/// Fixed response for input the service could not analyze
const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Query parameters for the emotion detection endpoint
#[derive(Debug, Deserialize)]
pub struct EmotionQuery {
    #[serde(rename = "textToAnalyze", default)]
    pub text_to_analyze: String,
}

/// GET /
///
/// Serve the landing page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /emotionDetector?textToAnalyze=<text>
///
/// Analyze the given text and respond with one of three plain-text bodies:
/// the formatted score sentence, the fixed invalid-text message (blank or
/// rejected input), or an error sentence carrying the failure detail.
pub async fn detect_emotion(
    State(state): State<AppState>,
    Query(query): Query<EmotionQuery>,
) -> String {
    match state.detector.analyze(&query.text_to_analyze).await {
        Err(e) => format!("Error analyzing text: {e}"),
        Ok(result) => match result.dominant_emotion.as_deref() {
            None => INVALID_TEXT_MESSAGE.to_string(),
            Some(dominant) => format_result(&result, dominant),
        },
    }
}

/// Render the fixed-format sentence enumerating all five scores in canonical
/// order, followed by the dominant emotion
fn format_result(result: &AnalysisResult, dominant: &str) -> String {
    let score = |emotion: &str| result.scores.get(emotion).unwrap_or(0.0);

    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        score("anger"),
        score("disgust"),
        score("fear"),
        score("joy"),
        score("sadness"),
        dominant,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_result() {
        let scores: HashMap<String, f64> = [
            ("anger", 0.01),
            ("disgust", 0.02),
            ("fear", 0.05),
            ("joy", 0.93),
            ("sadness", 0.1),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let result = AnalysisResult::from_scores(&scores);
        let sentence = format_result(&result, result.dominant_emotion.as_deref().unwrap());

        assert_eq!(
            sentence,
            "For the given statement, the system response is 'anger': 0.01, \
             'disgust': 0.02, 'fear': 0.05, 'joy': 0.93 and 'sadness': 0.1. \
             The dominant emotion is joy."
        );
    }
}
