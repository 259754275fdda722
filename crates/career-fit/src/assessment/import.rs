use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{AnswerStore, AssessmentResults, Section};

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: unknown assessment section '{section}'")]
    UnknownSection { row: usize, section: String },
}

/// Loads exported answers into [`AssessmentResults`].
///
/// CSV exports carry one answer per row under a `section,question_id,answer` header.
/// JSON documents use the same shape as the results API payload.
pub struct AnswerImporter;

impl AnswerImporter {
    /// Reads a JSON document when the path ends in `.json`, CSV otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AssessmentResults, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map_or(false, |extension| extension.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_csv_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<AssessmentResults, AnswerImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Later rows for the same question replace earlier ones.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<AssessmentResults, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut stores: BTreeMap<Section, AnswerStore> = BTreeMap::new();

        for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let row = record?;
            // header is row 1
            let row_number = index + 2;
            let section = row.section.parse::<Section>().map_err(|_| {
                AnswerImportError::UnknownSection {
                    row: row_number,
                    section: row.section.clone(),
                }
            })?;

            stores
                .entry(section)
                .or_default()
                .answer(row.question_id, row.answer.unwrap_or_default());
        }

        let results = stores
            .into_iter()
            .fold(AssessmentResults::new(), |results, (section, store)| {
                results.record_section(section, store.complete())
            });

        Ok(results)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    section: String,
    question_id: String,
    #[serde(default)]
    answer: Option<String>,
}
