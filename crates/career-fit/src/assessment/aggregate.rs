use super::bank::QuestionBank;
use super::coder::AnswerCoder;
use super::domain::{Section, SectionAnswers};

/// Multiplier applied to the mean coded value.
const SCORE_SCALE: f64 = 20.0;

/// Reduces coded section answers into a 0-100 sub-score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    bank: &'a QuestionBank,
    coder: AnswerCoder,
}

/// Sub-score for one section together with how many answers fed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionScore {
    pub section: Section,
    pub score: f64,
    pub answered: usize,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(bank: &'a QuestionBank, coder: AnswerCoder) -> Self {
        Self { bank, coder }
    }

    /// Averages over the answers actually present, not the nominal section length, so
    /// `_total_questions` does not influence the score. An empty section scores 0.
    pub fn aggregate(
        &self,
        section: Section,
        answers: &SectionAnswers,
        _total_questions: usize,
    ) -> f64 {
        if answers.is_empty() {
            return 0.0;
        }

        let sum: f64 = answers
            .iter()
            .map(|(question_id, token)| {
                let question = self.bank.find(section, question_id);
                if question.is_none() {
                    tracing::debug!(%section, question_id, "answer for unknown question id");
                }
                self.coder.code(question, Some(token))
            })
            .sum();

        sum / answers.len() as f64 * SCORE_SCALE
    }

    pub fn score_section(&self, section: Section, answers: &SectionAnswers) -> SectionScore {
        let total_questions = self.bank.questions(section).len();
        let score = self.aggregate(section, answers, total_questions);
        tracing::debug!(%section, score, answered = answers.len(), "section aggregated");

        SectionScore {
            section,
            score,
            answered: answers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::ScoringMode;

    fn answers(pairs: &[(&str, &str)]) -> SectionAnswers {
        pairs.iter().copied().collect()
    }

    fn aggregate(section: Section, answers: &SectionAnswers) -> f64 {
        let bank = QuestionBank::standard();
        ScoreAggregator::new(&bank, AnswerCoder::default()).aggregate(section, answers, 12)
    }

    #[test]
    fn empty_section_scores_zero_for_any_length() {
        let bank = QuestionBank::standard();
        let aggregator = ScoreAggregator::new(&bank, AnswerCoder::default());
        for total in [0, 1, 12, 100] {
            assert_eq!(
                aggregator.aggregate(Section::Wiscar, &SectionAnswers::new(), total),
                0.0
            );
        }
    }

    #[test]
    fn averages_over_answered_questions_only() {
        let answered = answers(&[("openness_1", "4"), ("openness_2", "2")]);
        assert_eq!(aggregate(Section::Psychological, &answered), 60.0);
    }

    #[test]
    fn all_strongly_agree_reaches_the_ceiling_of_eighty() {
        // the top coded value is 4, so the mean times 20 tops out at 80
        let answered = answers(&[("will_1", "4"), ("will_2", "4"), ("skill_1", "4")]);
        assert_eq!(aggregate(Section::Wiscar, &answered), 80.0);
    }

    #[test]
    fn yes_no_answers_contribute_mid_scale() {
        let answered = answers(&[("it_1", "true"), ("it_2", "false")]);
        assert_eq!(aggregate(Section::Technical, &answered), 50.0);
    }

    #[test]
    fn unknown_question_ids_still_count() {
        let answered = answers(&[("openness_1", "4"), ("bonus_question", "0")]);
        assert_eq!(aggregate(Section::Psychological, &answered), 40.0);
    }

    #[test]
    fn raising_one_answer_never_lowers_the_score() {
        let mut previous = f64::MIN;
        for token in ["0", "1", "2", "3", "4"] {
            let answered = answers(&[("grit_1", "2"), ("grit_2", token)]);
            let score = aggregate(Section::Psychological, &answered);
            assert!(score >= previous, "{token} lowered score to {score}");
            previous = score;
        }
    }

    #[test]
    fn keyed_mode_rewards_correct_knowledge_answers() {
        let bank = QuestionBank::standard();
        let aggregator = ScoreAggregator::new(&bank, AnswerCoder::new(ScoringMode::Keyed));
        let answered = answers(&[("healthcare_1", "0"), ("numerical_1", "1"), ("it_1", "true")]);

        let section = aggregator.score_section(Section::Technical, &answered);

        assert_eq!(section.score, 80.0);
        assert_eq!(section.answered, 3);
    }
}
