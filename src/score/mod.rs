//! Score model - what the scoring backend returns for a selfie
//!
//! Ratings are on a 0-30 scale. The backend also reports which
//! image-quality signals it detected.

pub mod explanation;
pub mod format;

pub use explanation::{ScoreExplanation, explain};
pub use format::{format_rating, safe_rating};

use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const MAX_RATING: f64 = 30.0;

/// Qualitative image-quality signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ImageResult {
    GoodLighting,
    CenteredFace,
    SmileDetected,
}

impl ImageResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageResult::GoodLighting => "goodLighting",
            ImageResult::CenteredFace => "centeredFace",
            ImageResult::SmileDetected => "smileDetected",
        }
    }

    pub fn all() -> &'static [ImageResult] {
        &[
            ImageResult::GoodLighting,
            ImageResult::CenteredFace,
            ImageResult::SmileDetected,
        ]
    }
}

impl FromStr for ImageResult {
    type Err = anyhow::Error;

    /// Accepts "goodLighting", "good-lighting" or "good_lighting"
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match ImageResult::all()
            .iter()
            .find(|r| r.as_str().to_lowercase() == key)
        {
            Some(result) => Ok(*result),
            None => bail!("unknown image signal '{}'", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrossRealityScore {
    pub rating: f64,
    pub potential_rating: f64,
    pub details: Vec<ImageResult>,
}

impl CrossRealityScore {
    /// Explanation badges and summary for display
    pub fn explanation(&self) -> ScoreExplanation {
        explain(&self.details)
    }
}
