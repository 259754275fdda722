use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AssessmentError;

/// The three scored sections of the assessment, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychological,
    Technical,
    Wiscar,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Psychological, Section::Technical, Section::Wiscar];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Psychological => "psychological",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychological => "Psychological Fit",
            Self::Technical => "Technical Aptitude",
            Self::Wiscar => "WISCAR Analysis",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "psychological" | "psych" => Ok(Self::Psychological),
            "technical" | "tech" => Ok(Self::Technical),
            "wiscar" => Ok(Self::Wiscar),
            _ => Err(AssessmentError::UnknownSection(value.to_string())),
        }
    }
}

/// Declared response format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Five-point Likert scale, answered with an index "0".."4".
    Scale,
    /// Pick one of the question's options, answered with the option index.
    Choice,
    /// Answered with the literal "true" or "false".
    YesNo,
}

/// Expected answer for questions that have an objectively correct response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    Option(usize),
    Affirmative(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    pub category: &'static str,
    /// Carried for display parity with the question bank; scoring ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip)]
    pub answer_key: Option<AnswerKey>,
}

/// How choice and yes/no answers are converted into coded values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Every answer is coded by its position on the scale or option list.
    #[default]
    Ordinal,
    /// Questions with an answer key are graded for correctness.
    Keyed,
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ordinal" | "position" => Ok(Self::Ordinal),
            "keyed" | "correctness" => Ok(Self::Keyed),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected 'ordinal' or 'keyed')"
            )),
        }
    }
}

/// Raw answers for one section, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionAnswers(BTreeMap<String, String>);

impl SectionAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(id, token)| (id.as_str(), token.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SectionAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, token)| (id.into(), token.into()))
                .collect(),
        )
    }
}

/// Accumulates answers while a section is in progress.
///
/// Answering the same question again replaces the earlier token. Calling
/// [`AnswerStore::complete`] consumes the store so the finished section can no longer change.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: BTreeMap<String, String>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&mut self, question_id: impl Into<String>, token: impl Into<String>) {
        self.answers.insert(question_id.into(), token.into());
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn complete(self) -> SectionAnswers {
        SectionAnswers(self.answers)
    }
}

/// Completed section answers for one respondent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    #[serde(default)]
    pub psychological: SectionAnswers,
    #[serde(default)]
    pub technical: SectionAnswers,
    #[serde(default)]
    pub wiscar: SectionAnswers,
}

impl AssessmentResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a completed section, replacing any answers previously recorded for it.
    pub fn record_section(mut self, section: Section, answers: SectionAnswers) -> Self {
        *self.section_mut(section) = answers;
        self
    }

    pub fn section(&self, section: Section) -> &SectionAnswers {
        match section {
            Section::Psychological => &self.psychological,
            Section::Technical => &self.technical,
            Section::Wiscar => &self.wiscar,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut SectionAnswers {
        match section {
            Section::Psychological => &mut self.psychological,
            Section::Technical => &mut self.technical,
            Section::Wiscar => &mut self.wiscar,
        }
    }

    /// Sections that have not received any answers yet.
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.section(*section).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_sections().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_parse_case_insensitively() {
        assert_eq!("Technical".parse::<Section>().ok(), Some(Section::Technical));
        assert_eq!(" wiscar ".parse::<Section>().ok(), Some(Section::Wiscar));
        assert!(matches!(
            "career".parse::<Section>(),
            Err(AssessmentError::UnknownSection(name)) if name == "career"
        ));
    }

    #[test]
    fn answer_store_overwrites_repeated_answers() {
        let mut store = AnswerStore::new();
        store.answer("grit_1", "1");
        store.answer("grit_1", "4");
        store.answer("grit_2", "3");

        assert!(store.is_answered("grit_1"));
        assert_eq!(store.answered(), 2);

        let answers = store.complete();
        assert_eq!(answers.get("grit_1"), Some("4"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn record_section_replaces_previous_answers() {
        let first: SectionAnswers = [("will_1", "0")].into_iter().collect();
        let second: SectionAnswers = [("will_2", "4")].into_iter().collect();

        let results = AssessmentResults::new()
            .record_section(Section::Wiscar, first)
            .record_section(Section::Wiscar, second.clone());

        assert_eq!(results.wiscar, second);
        assert_eq!(
            results.missing_sections(),
            vec![Section::Psychological, Section::Technical]
        );
        assert!(!results.is_complete());
    }

    #[test]
    fn results_deserialize_from_section_maps() {
        let results: AssessmentResults = serde_json::from_str(
            r#"{"psychological":{"openness_1":"3"},"technical":{"it_1":"true"}}"#,
        )
        .expect("results parse");

        assert_eq!(results.psychological.get("openness_1"), Some("3"));
        assert_eq!(results.technical.get("it_1"), Some("true"));
        assert!(results.wiscar.is_empty());
    }

    #[test]
    fn scoring_mode_parses_aliases() {
        assert_eq!("Keyed".parse::<ScoringMode>(), Ok(ScoringMode::Keyed));
        assert_eq!("position".parse::<ScoringMode>(), Ok(ScoringMode::Ordinal));
        assert!("random".parse::<ScoringMode>().is_err());
    }
}
