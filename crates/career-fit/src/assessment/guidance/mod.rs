mod catalog;
mod insights;
mod rules;
pub mod views;

pub use catalog::{career_guidance, field_overview, select_guidance};
pub use insights::{score_bands, select_alternatives, select_insights, select_next_steps};
pub use views::AssessmentReport;
