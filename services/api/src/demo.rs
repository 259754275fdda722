use career_fit::assessment::{
    AnswerImporter, AssessmentReport, AssessmentResults, AssessmentService, QuestionBank,
    ScoringMode, Section, SectionAnswers,
};
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer export to score (`.json` documents, CSV otherwise)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Override APP_SCORING_MODE (ordinal or keyed)
    #[arg(long, value_parser = crate::infra::parse_scoring_mode)]
    pub(crate) scoring_mode: Option<ScoringMode>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Synthetic candidate to score
    #[arg(long, value_enum, default_value_t = DemoProfile::Moderate)]
    pub(crate) profile: DemoProfile,
    /// Override APP_SCORING_MODE (ordinal or keyed)
    #[arg(long, value_parser = crate::infra::parse_scoring_mode)]
    pub(crate) scoring_mode: Option<ScoringMode>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    Strong,
    #[default]
    Moderate,
    Weak,
}

impl DemoProfile {
    /// Answer token used for every question in (psychological, technical, wiscar).
    fn tokens(self) -> (&'static str, &'static str, &'static str) {
        match self {
            DemoProfile::Strong => ("4", "4", "4"),
            DemoProfile::Moderate => ("3", "3", "4"),
            DemoProfile::Weak => ("1", "1", "2"),
        }
    }

    fn label(self) -> &'static str {
        match self {
            DemoProfile::Strong => "strong",
            DemoProfile::Moderate => "moderate",
            DemoProfile::Weak => "weak",
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        scoring_mode,
        json,
    } = args;

    let mode = resolve_mode(scoring_mode)?;
    let results = AnswerImporter::from_path(&answers)?;
    let report = AssessmentService::standard(mode).report(&results);

    if json {
        print_json(&report)
    } else {
        println!("Scored answers from {}", answers.display());
        let missing = results.missing_sections();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|section| section.label()).collect();
            println!("Warning: no answers for {}", names.join(", "));
        }
        render_report(&report, mode);
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        scoring_mode,
        json,
    } = args;

    let mode = resolve_mode(scoring_mode)?;
    let service = AssessmentService::standard(mode);
    let results = synthetic_results(service.bank(), profile);
    let report = service.report(&results);

    if json {
        print_json(&report)
    } else {
        println!("Career-fit demo ({} candidate)", profile.label());
        render_report(&report, mode);
        Ok(())
    }
}

fn resolve_mode(requested: Option<ScoringMode>) -> Result<ScoringMode, AppError> {
    match requested {
        Some(mode) => Ok(mode),
        None => Ok(AppConfig::load()?.scoring.mode),
    }
}

fn synthetic_results(bank: &QuestionBank, profile: DemoProfile) -> AssessmentResults {
    let (psychological, technical, wiscar) = profile.tokens();
    let uniform = |section: Section, token: &str| -> SectionAnswers {
        bank.questions(section)
            .iter()
            .map(|question| (question.id, token))
            .collect()
    };

    AssessmentResults::new()
        .record_section(
            Section::Psychological,
            uniform(Section::Psychological, psychological),
        )
        .record_section(Section::Technical, uniform(Section::Technical, technical))
        .record_section(Section::Wiscar, uniform(Section::Wiscar, wiscar))
}

fn print_json(report: &AssessmentReport) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_report(report: &AssessmentReport, mode: ScoringMode) {
    let scores = &report.scores;

    println!("Scoring mode: {:?}", mode);
    println!("\n{} [{}]", report.headline, report.badge);
    println!(
        "Overall {}% | confidence {}% | recommendation {}",
        scores.overall,
        scores.confidence,
        scores.recommendation.label()
    );

    println!("\nSection scores");
    println!(
        "- Psychological fit: {}% ({})",
        scores.psychological, report.bands.psychological
    );
    println!(
        "- Technical readiness: {}% ({})",
        scores.technical, report.bands.technical
    );
    println!("- WISCAR alignment: {}% ({})", scores.wiscar, report.bands.wiscar);

    println!("\nWISCAR profile");
    for dimension in &report.dimensions {
        println!(
            "- {}: {}/{}",
            dimension.subject, dimension.score, dimension.full_mark
        );
    }

    println!("\nKey insights");
    for insight in &report.insights {
        println!("- {insight}");
    }

    println!("\nNext steps");
    for (index, step) in report.next_steps.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }

    if !report.alternatives.is_empty() {
        println!("\nAlternative career paths");
        for alternative in &report.alternatives {
            println!(
                "- {} ({}% match): {}",
                alternative.title, alternative.fit_score, alternative.description
            );
        }
    }

    if let Some(guidance) = &report.guidance {
        println!("\nCareer roles");
        for role in &guidance.roles {
            println!(
                "- {} | {} | growth {}",
                role.title,
                role.salary_range,
                role.growth_potential.label()
            );
        }

        println!("\nLearning path");
        for step in &guidance.learning_path {
            println!(
                "- [{}] {} ({}): {}",
                step.level, step.title, step.duration, step.description
            );
        }
    }
}
