use serde::Serialize;

use super::recommendation::ScoreResult;

pub const FULL_MARK: u8 = 100;

/// The six WISCAR readiness dimensions shown on the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability",
            Self::RealWorld => "Real-world",
        }
    }

    fn source_score(self, scores: &ScoreResult) -> u8 {
        match self {
            Self::Will | Self::Ability => scores.wiscar,
            Self::Interest => scores.psychological,
            Self::Skill => scores.technical,
            Self::Cognitive | Self::RealWorld => scores.overall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: WiscarDimension,
    pub subject: &'static str,
    pub score: u8,
    pub full_mark: u8,
}

/// Projects the section sub-scores onto the six radar dimensions, clamped to 0-100.
pub fn project_dimensions(scores: &ScoreResult) -> Vec<DimensionScore> {
    WiscarDimension::ALL
        .into_iter()
        .map(|dimension| DimensionScore {
            dimension,
            subject: dimension.label(),
            score: dimension.source_score(scores).min(FULL_MARK),
            full_mark: FULL_MARK,
        })
        .collect()
}
