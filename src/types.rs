//! Emotion analysis data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The five tracked emotion categories, in canonical order.
///
/// This order is used both for rendering results and for breaking ties when
/// selecting the dominant emotion.
pub const EMOTIONS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];

/// Confidence scores for the five tracked emotions.
///
/// Each score is in `[0, 1]`. `None` is the explicit null marker used when no
/// analysis was possible (empty input or input rejected by the service). All
/// five keys are always present in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
}

impl EmotionScores {
    /// All-null scores, used when no analysis was possible
    pub fn null() -> Self {
        Self {
            anger: None,
            disgust: None,
            fear: None,
            joy: None,
            sadness: None,
        }
    }

    /// Look up a score by canonical emotion name
    pub fn get(&self, emotion: &str) -> Option<f64> {
        match emotion {
            "anger" => self.anger,
            "disgust" => self.disgust,
            "fear" => self.fear,
            "joy" => self.joy,
            "sadness" => self.sadness,
            _ => None,
        }
    }
}

/// Full result of analyzing one piece of text.
///
/// Invariant: `dominant_emotion` is `Some` if and only if all five scores are
/// `Some`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub scores: EmotionScores,
    pub dominant_emotion: Option<String>,
}

impl AnalysisResult {
    /// The validation-null result: all scores and the dominant label are null.
    ///
    /// Reserved for empty/whitespace input and service-rejected (4xx) input,
    /// never for transport failures.
    pub fn null() -> Self {
        Self {
            scores: EmotionScores::null(),
            dominant_emotion: None,
        }
    }

    /// Build a result from a flat name-to-score mapping.
    ///
    /// Recognized emotions absent from the mapping default to 0. The dominant
    /// emotion is the one with the strictly largest score; ties go to the
    /// earliest emotion in [`EMOTIONS`] order.
    pub fn from_scores(scores: &HashMap<String, f64>) -> Self {
        let values = EMOTIONS.map(|emotion| scores.get(emotion).copied().unwrap_or(0.0));

        let mut dominant = 0;
        for (i, value) in values.iter().enumerate() {
            if *value > values[dominant] {
                dominant = i;
            }
        }

        Self {
            scores: EmotionScores {
                anger: Some(values[0]),
                disgust: Some(values[1]),
                fear: Some(values[2]),
                joy: Some(values[3]),
                sadness: Some(values[4]),
            },
            dominant_emotion: Some(EMOTIONS[dominant].to_string()),
        }
    }
}
