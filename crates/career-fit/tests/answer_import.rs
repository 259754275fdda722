use career_fit::assessment::{
    AnswerImportError, AnswerImporter, AssessmentService, Recommendation, ScoringMode,
};

fn sample_export() -> &'static [u8] {
    include_bytes!("../sample_answers.csv")
}

#[test]
fn sample_export_imports_every_section() {
    let results = AnswerImporter::from_csv_reader(sample_export()).expect("sample imports");

    assert!(results.is_complete());
    assert_eq!(results.psychological.len(), 12);
    assert_eq!(results.technical.len(), 10);
    assert_eq!(results.wiscar.len(), 12);
}

#[test]
fn position_scoring_undervalues_correct_knowledge_answers() {
    let results = AnswerImporter::from_csv_reader(sample_export()).expect("sample imports");

    let scores = AssessmentService::standard(ScoringMode::Ordinal).compute_results(&results);

    assert_eq!(scores.psychological, 68);
    assert_eq!(scores.technical, 12);
    assert_eq!(scores.wiscar, 57);
    assert_eq!(scores.overall, 47);
    assert_eq!(scores.recommendation, Recommendation::No);
    assert_eq!(scores.confidence, 65);
}

#[test]
fn keyed_scoring_credits_correct_knowledge_answers() {
    let results = AnswerImporter::from_csv_reader(sample_export()).expect("sample imports");

    let report = AssessmentService::standard(ScoringMode::Keyed).report(&results);

    assert_eq!(report.scores.technical, 72);
    assert_eq!(report.scores.overall, 65);
    assert_eq!(report.scores.recommendation, Recommendation::Maybe);
    assert_eq!(report.scores.confidence, 70);
    assert!(report.guidance.is_none());
}

#[test]
fn missing_files_surface_io_errors() {
    let error = AnswerImporter::from_path("does/not/exist.csv").expect_err("missing file");
    assert!(matches!(error, AnswerImportError::Io(_)));
}
