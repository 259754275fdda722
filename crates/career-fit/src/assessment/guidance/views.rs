use serde::Serialize;

use super::super::dimensions::DimensionScore;
use super::super::recommendation::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBands {
    pub psychological: &'static str,
    pub technical: &'static str,
    pub wiscar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerAlternative {
    pub title: &'static str,
    pub description: &'static str,
    pub fit_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthPotential {
    High,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    Medium,
}

impl GrowthPotential {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::MediumHigh => "Medium-High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRole {
    pub title: &'static str,
    pub description: &'static str,
    pub skills_needed: Vec<&'static str>,
    pub growth_potential: GrowthPotential,
    pub salary_range: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningStep {
    pub level: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub resources: Vec<&'static str>,
}

/// Role and learning-path material shown to respondents who are a strong match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerGuidance {
    pub roles: Vec<CareerRole>,
    pub learning_path: Vec<LearningStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleSummary {
    pub title: &'static str,
    pub description: &'static str,
}

/// Introductory material describing the field before the assessment starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOverview {
    pub field: &'static str,
    pub career_roles: Vec<RoleSummary>,
    pub ideal_traits: Vec<&'static str>,
}

/// Everything derived from one scored assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub scores: ScoreResult,
    pub headline: &'static str,
    pub badge: &'static str,
    pub bands: ScoreBands,
    pub dimensions: Vec<DimensionScore>,
    pub insights: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<CareerAlternative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<CareerGuidance>,
}
