use super::super::recommendation::{Recommendation, ScoreResult};
use super::rules::{always, first_match, DecisionRule};
use super::views::{CareerAlternative, ScoreBands};

const PSYCHOLOGICAL_INSIGHTS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.psychological >= 70,
        payload: "Your analytical mindset and structured thinking align well with Health Informatics.",
    },
    DecisionRule {
        applies: |scores| scores.psychological >= 50,
        payload: "You show some aptitude for analytical work, but may need to develop stronger attention to detail.",
    },
    DecisionRule {
        applies: always,
        payload: "Consider developing your analytical and detail-oriented skills before pursuing this field.",
    },
];

const TECHNICAL_INSIGHTS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.technical >= 70,
        payload: "You have a solid foundation in technical concepts and healthcare knowledge.",
    },
    DecisionRule {
        applies: |scores| scores.technical >= 50,
        payload: "You need to boost your domain knowledge. Start with HL7, FHIR, and EHR fundamentals.",
    },
    DecisionRule {
        applies: always,
        payload: "Significant technical skill development is needed in healthcare IT and data management.",
    },
];

const WISCAR_INSIGHTS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.wiscar >= 70,
        payload: "Your motivation and learning readiness are strong indicators of success.",
    },
    DecisionRule {
        applies: always,
        payload: "Consider whether your interest and commitment level match the demands of this field.",
    },
];

const NEXT_STEPS: &[DecisionRule<&[&str]>] = &[
    DecisionRule {
        applies: |scores| scores.recommendation == Recommendation::Yes,
        payload: &[
            "Take an introductory course in Health Informatics (Coursera/edX)",
            "Get familiar with FHIR, HL7, and EHR software",
            "Start mini-projects with sample healthcare datasets",
            "Consider pursuing HIMSS or AMIA certification",
            "Network with health informatics professionals",
        ],
    },
    DecisionRule {
        applies: |scores| scores.recommendation == Recommendation::Maybe,
        payload: &[
            "Strengthen your foundation with healthcare basics",
            "Take online courses in data analysis and healthcare systems",
            "Gain experience with healthcare data through internships",
            "Improve technical skills in databases and data visualization",
            "Reassess after 6 months of focused learning",
        ],
    },
    DecisionRule {
        applies: always,
        payload: &[
            "Consider related fields like Healthcare Administration",
            "Explore Data Analysis roles in public health",
            "Look into Clinical Research Coordinator positions",
            "Develop foundational IT skills first",
            "Retake this assessment after gaining more experience",
        ],
    },
];

#[derive(Clone, Copy)]
enum FitBase {
    Psychological,
    Wiscar,
}

struct AlternativeTemplate {
    title: &'static str,
    description: &'static str,
    base: FitBase,
    offset: u8,
    cap: u8,
}

impl AlternativeTemplate {
    fn fit_score(&self, scores: &ScoreResult) -> u8 {
        let base = match self.base {
            FitBase::Psychological => scores.psychological,
            FitBase::Wiscar => scores.wiscar,
        };
        base.saturating_add(self.offset).min(self.cap)
    }
}

const NEAR_FIELD_ALTERNATIVES: &[AlternativeTemplate] = &[
    AlternativeTemplate {
        title: "Healthcare Data Analyst",
        description: "Focus on analyzing health data without deep technical implementation",
        base: FitBase::Psychological,
        offset: 15,
        cap: 85,
    },
    AlternativeTemplate {
        title: "Clinical Research Coordinator",
        description: "Manage research data and coordinate studies",
        base: FitBase::Psychological,
        offset: 10,
        cap: 80,
    },
    AlternativeTemplate {
        title: "Healthcare Administrator",
        description: "Use IT tools in healthcare management roles",
        base: FitBase::Wiscar,
        offset: 10,
        cap: 75,
    },
];

const ALTERNATIVES: &[DecisionRule<&[AlternativeTemplate]>] = &[
    DecisionRule {
        applies: |scores| scores.recommendation == Recommendation::Yes,
        payload: &[],
    },
    DecisionRule {
        applies: always,
        payload: NEAR_FIELD_ALTERNATIVES,
    },
];

const PSYCHOLOGICAL_BANDS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.psychological >= 70,
        payload: "Excellent",
    },
    DecisionRule {
        applies: |scores| scores.psychological >= 50,
        payload: "Good",
    },
    DecisionRule {
        applies: always,
        payload: "Needs Development",
    },
];

const TECHNICAL_BANDS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.technical >= 70,
        payload: "Strong",
    },
    DecisionRule {
        applies: |scores| scores.technical >= 50,
        payload: "Moderate",
    },
    DecisionRule {
        applies: always,
        payload: "Foundational",
    },
];

const WISCAR_BANDS: &[DecisionRule<&str>] = &[
    DecisionRule {
        applies: |scores| scores.wiscar >= 70,
        payload: "Well-Aligned",
    },
    DecisionRule {
        applies: |scores| scores.wiscar >= 50,
        payload: "Partially Aligned",
    },
    DecisionRule {
        applies: always,
        payload: "Misaligned",
    },
];

fn select_text(table: &[DecisionRule<&'static str>], scores: &ScoreResult) -> &'static str {
    first_match(table, scores).copied().unwrap_or_default()
}

/// One insight per section, in psychological, technical, wiscar order.
pub fn select_insights(scores: &ScoreResult) -> Vec<&'static str> {
    [PSYCHOLOGICAL_INSIGHTS, TECHNICAL_INSIGHTS, WISCAR_INSIGHTS]
        .into_iter()
        .map(|table| select_text(table, scores))
        .collect()
}

pub fn select_next_steps(scores: &ScoreResult) -> Vec<&'static str> {
    first_match(NEXT_STEPS, scores)
        .map(|steps| steps.to_vec())
        .unwrap_or_default()
}

/// Adjacent careers for respondents who are not a strong match; empty for YES.
pub fn select_alternatives(scores: &ScoreResult) -> Vec<CareerAlternative> {
    first_match(ALTERNATIVES, scores)
        .map(|templates| {
            templates
                .iter()
                .map(|template| CareerAlternative {
                    title: template.title,
                    description: template.description,
                    fit_score: template.fit_score(scores),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn score_bands(scores: &ScoreResult) -> ScoreBands {
    ScoreBands {
        psychological: select_text(PSYCHOLOGICAL_BANDS, scores),
        technical: select_text(TECHNICAL_BANDS, scores),
        wiscar: select_text(WISCAR_BANDS, scores),
    }
}
