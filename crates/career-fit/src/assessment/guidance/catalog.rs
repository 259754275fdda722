use super::super::recommendation::{Recommendation, ScoreResult};
use super::views::{CareerGuidance, CareerRole, FieldOverview, GrowthPotential, LearningStep, RoleSummary};

/// Role profiles and learning path, offered only when the verdict is YES.
pub fn select_guidance(scores: &ScoreResult) -> Option<CareerGuidance> {
    (scores.recommendation == Recommendation::Yes).then(career_guidance)
}

pub fn career_guidance() -> CareerGuidance {
    CareerGuidance {
        roles: vec![
            CareerRole {
                title: "Health Informatics Specialist",
                description: "Works at the intersection of health data, systems, and care processes",
                skills_needed: vec!["HL7/FHIR", "EHR Systems", "Healthcare Workflows", "Data Analysis"],
                growth_potential: GrowthPotential::High,
                salary_range: "$65,000 - $95,000",
            },
            CareerRole {
                title: "Clinical Data Analyst",
                description: "Analyzes patient care data to improve outcomes and efficiency",
                skills_needed: vec!["SQL", "Excel", "Statistical Analysis", "Healthcare Metrics"],
                growth_potential: GrowthPotential::MediumHigh,
                salary_range: "$55,000 - $85,000",
            },
            CareerRole {
                title: "EHR Implementation Consultant",
                description: "Helps clinics and hospitals integrate digital record systems",
                skills_needed: vec![
                    "Project Management",
                    "EHR Platforms",
                    "Training",
                    "Change Management",
                ],
                growth_potential: GrowthPotential::High,
                salary_range: "$70,000 - $110,000",
            },
            CareerRole {
                title: "Population Health Data Analyst",
                description: "Uses data to assess public health trends and interventions",
                skills_needed: vec![
                    "Epidemiology",
                    "Statistics",
                    "Data Visualization",
                    "Public Health",
                ],
                growth_potential: GrowthPotential::High,
                salary_range: "$60,000 - $90,000",
            },
        ],
        learning_path: vec![
            LearningStep {
                level: "Beginner",
                title: "Introduction to Health Informatics",
                description: "Foundation course covering healthcare systems, data, and technology basics",
                duration: "2-3 months",
                resources: vec![
                    "Coursera Health Informatics",
                    "edX Introduction to Healthcare",
                    "HIMSS Webinars",
                ],
            },
            LearningStep {
                level: "Intermediate",
                title: "Technical Skills Development",
                description: "Learn HL7, FHIR, SQL, and EHR systems hands-on",
                duration: "4-6 months",
                resources: vec![
                    "HL7 FHIR Specification",
                    "SQL for Healthcare Data",
                    "Epic/Cerner Training",
                ],
            },
            LearningStep {
                level: "Advanced",
                title: "Specialization & Projects",
                description: "Choose focus area and complete portfolio projects",
                duration: "6-8 months",
                resources: vec![
                    "Capstone Project",
                    "WHO/CDC Datasets",
                    "Real EHR Implementations",
                ],
            },
            LearningStep {
                level: "Job-Ready",
                title: "Certification & Portfolio",
                description: "Obtain professional certification and build impressive portfolio",
                duration: "2-3 months",
                resources: vec![
                    "AMIA Certification",
                    "HIMSS Certification",
                    "LinkedIn Portfolio",
                ],
            },
        ],
    }
}

pub fn field_overview() -> FieldOverview {
    FieldOverview {
        field: "Health Informatics",
        career_roles: vec![
            RoleSummary {
                title: "Health Informatics Specialist",
                description: "Integrate IT and healthcare data systems",
            },
            RoleSummary {
                title: "Clinical Data Analyst",
                description: "Analyze patient care data to improve outcomes",
            },
            RoleSummary {
                title: "EHR Manager",
                description: "Manage Electronic Health Records systems",
            },
            RoleSummary {
                title: "Health IT Project Manager",
                description: "Lead healthcare technology implementations",
            },
            RoleSummary {
                title: "Bioinformatics Analyst",
                description: "Process biological and medical data",
            },
            RoleSummary {
                title: "Population Health Analyst",
                description: "Analyze public health trends and patterns",
            },
        ],
        ideal_traits: vec![
            "High attention to detail",
            "Problem-solving mindset",
            "Curiosity about health systems",
            "Comfort with regulations (HIPAA, HL7)",
            "Analytical thinking with human focus",
            "Interest in healthcare technology",
        ],
    }
}
