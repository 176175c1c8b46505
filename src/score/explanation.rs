//! Human-readable explanation of detected image signals

use serde::Serialize;

use super::ImageResult;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoreExplanation {
    pub badges: Vec<String>,
    pub description: String,
}

impl ImageResult {
    pub fn badge(&self) -> &'static str {
        match self {
            ImageResult::GoodLighting => "✨ Good Lighting",
            ImageResult::SmileDetected => "😊 Smile Detected",
            ImageResult::CenteredFace => "🎯 Centered Composition",
        }
    }

    /// Short phrase used inside the summary sentence
    pub fn positive(&self) -> &'static str {
        match self {
            ImageResult::GoodLighting => "well-lit",
            ImageResult::SmileDetected => "positive expression",
            ImageResult::CenteredFace => "well-framed",
        }
    }
}

/// Build badges and summary, in the order the signals were reported
pub fn explain(details: &[ImageResult]) -> ScoreExplanation {
    let badges: Vec<String> = details.iter().map(|d| d.badge().to_string()).collect();
    let positives: Vec<&str> = details.iter().map(|d| d.positive()).collect();

    let description = match positives.as_slice() {
        [one] => format!(
            "Good start! Your photo shows {}. Consider improving lighting, framing, \
             or expression for a higher rating.",
            one
        ),
        [a, b] => format!(
            "Great selfie! Your photo has {} and {}. Small improvements in other areas \
             could boost your rating.",
            a, b
        ),
        [_, _, _] => format!(
            "Excellent selfie! Your photo shows {}. You're presenting yourself at your best.",
            positives.join(", ")
        ),
        // none, or more than three repeated signals
        _ => "Your selfie has room for improvement. Try better lighting, centering your face, \
              and a natural smile for a higher rating."
            .to_string(),
    };

    ScoreExplanation { badges, description }
}
