use serde::{Deserialize, Serialize};

const PSYCHOLOGICAL_WEIGHT: f64 = 0.3;
const TECHNICAL_WEIGHT: f64 = 0.3;
const WISCAR_WEIGHT: f64 = 0.4;

pub const CONFIDENCE_FLOOR: u8 = 65;
pub const CONFIDENCE_CEILING: u8 = 95;
/// Fixed lift applied to the overall score when deriving confidence.
pub const CONFIDENCE_OFFSET: f64 = 5.0;

/// Categorical career-fit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::Maybe => "MAYBE",
            Self::No => "NO",
        }
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Yes => "Strong Match",
            Self::Maybe => "Potential Fit",
            Self::No => "Not Recommended",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Health Informatics is a Great Fit!",
            Self::Maybe => "Health Informatics Could Work",
            Self::No => "Consider Alternative Paths",
        }
    }
}

/// Rounded scores and verdict derived from the three section sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: u8,
    pub psychological: u8,
    pub technical: u8,
    pub wiscar: u8,
    pub recommendation: Recommendation,
    pub confidence: u8,
}

/// Combines section sub-scores into the overall score and verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, psychological: f64, technical: f64, wiscar: f64) -> ScoreResult {
        let overall = overall_score(psychological, technical, wiscar);
        let recommendation = decide(overall, psychological, technical);

        ScoreResult {
            overall: round_score(overall),
            psychological: round_score(psychological),
            technical: round_score(technical),
            wiscar: round_score(wiscar),
            recommendation,
            confidence: confidence(overall),
        }
    }
}

pub fn overall_score(psychological: f64, technical: f64, wiscar: f64) -> f64 {
    psychological * PSYCHOLOGICAL_WEIGHT + technical * TECHNICAL_WEIGHT + wiscar * WISCAR_WEIGHT
}

// Thresholds apply to the unrounded scores.
fn decide(overall: f64, psychological: f64, technical: f64) -> Recommendation {
    if overall >= 75.0 && psychological >= 60.0 && technical >= 50.0 {
        Recommendation::Yes
    } else if overall >= 60.0 && (psychological >= 60.0 || technical >= 60.0) {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

pub fn confidence(overall: f64) -> u8 {
    let lifted = if overall.is_nan() {
        f64::from(CONFIDENCE_FLOOR)
    } else {
        overall + CONFIDENCE_OFFSET
    };
    lifted
        .clamp(f64::from(CONFIDENCE_FLOOR), f64::from(CONFIDENCE_CEILING))
        .round() as u8
}

pub(crate) fn round_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // Half rounds up; inputs are non-negative in practice.
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
