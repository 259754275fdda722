//! Health Informatics career-fit assessment: answer coding, section aggregation,
//! recommendation, radar projection, and guidance selection.

mod aggregate;
pub mod bank;
mod coder;
mod dimensions;
pub mod domain;
pub mod guidance;
mod import;
mod recommendation;
pub mod router;
mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{ScoreAggregator, SectionScore};
pub use bank::{QuestionBank, SectionListing, LIKERT_LABELS};
pub use coder::{code_ordinal, AnswerCoder, DEFAULT_CODE};
pub use dimensions::{project_dimensions, DimensionScore, WiscarDimension};
pub use domain::{
    AnswerKey, AnswerStore, AssessmentResults, Question, QuestionKind, ScoringMode, Section,
    SectionAnswers,
};
pub use guidance::AssessmentReport;
pub use import::{AnswerImportError, AnswerImporter};
pub use recommendation::{
    overall_score, Recommendation, RecommendationEngine, ScoreResult, CONFIDENCE_CEILING,
    CONFIDENCE_FLOOR,
};
pub use router::assessment_router;
pub use service::AssessmentService;

/// Errors raised at the assessment boundary. The scoring core itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown assessment section '{0}'")]
    UnknownSection(String),
    #[error(transparent)]
    Import(#[from] AnswerImportError),
}
