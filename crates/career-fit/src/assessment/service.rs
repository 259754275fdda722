use tracing::{debug, info};

use super::aggregate::{ScoreAggregator, SectionScore};
use super::bank::QuestionBank;
use super::coder::AnswerCoder;
use super::dimensions::project_dimensions;
use super::domain::{AssessmentResults, ScoringMode, Section, SectionAnswers};
use super::guidance::{
    score_bands, select_alternatives, select_guidance, select_insights, select_next_steps,
    AssessmentReport,
};
use super::recommendation::{RecommendationEngine, ScoreResult};

/// Scores completed assessments against a question bank.
///
/// Holds only read-only state, so one instance can be shared across requests.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    bank: QuestionBank,
    coder: AnswerCoder,
    engine: RecommendationEngine,
}

impl AssessmentService {
    pub fn new(bank: QuestionBank, mode: ScoringMode) -> Self {
        Self {
            bank,
            coder: AnswerCoder::new(mode),
            engine: RecommendationEngine::new(),
        }
    }

    pub fn standard(mode: ScoringMode) -> Self {
        Self::new(QuestionBank::standard(), mode)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.coder.mode()
    }

    pub fn score_section(&self, section: Section, answers: &SectionAnswers) -> SectionScore {
        ScoreAggregator::new(&self.bank, self.coder).score_section(section, answers)
    }

    /// Derives the score result. Sections without answers contribute a sub-score of 0.
    pub fn compute_results(&self, results: &AssessmentResults) -> ScoreResult {
        let missing = results.missing_sections();
        if !missing.is_empty() {
            debug!(?missing, "scoring assessment with unanswered sections");
        }

        let psychological = self.score_section(Section::Psychological, &results.psychological);
        let technical = self.score_section(Section::Technical, &results.technical);
        let wiscar = self.score_section(Section::Wiscar, &results.wiscar);

        self.engine
            .recommend(psychological.score, technical.score, wiscar.score)
    }

    pub fn report(&self, results: &AssessmentResults) -> AssessmentReport {
        let scores = self.compute_results(results);
        info!(
            recommendation = scores.recommendation.label(),
            overall = scores.overall,
            confidence = scores.confidence,
            mode = ?self.scoring_mode(),
            "assessment scored"
        );

        AssessmentReport {
            scores,
            headline: scores.recommendation.headline(),
            badge: scores.recommendation.badge(),
            bands: score_bands(&scores),
            dimensions: project_dimensions(&scores),
            insights: select_insights(&scores),
            next_steps: select_next_steps(&scores),
            alternatives: select_alternatives(&scores),
            guidance: select_guidance(&scores),
        }
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::standard(ScoringMode::default())
    }
}
