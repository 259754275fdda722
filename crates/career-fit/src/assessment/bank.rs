use serde::Serialize;

use super::domain::{AnswerKey, Question, QuestionKind, Section};

/// Labels of the five-point agreement scale, indexed by the coded value.
pub const LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

#[derive(Debug, Clone)]
pub struct QuestionBank {
    psychological: Vec<Question>,
    technical: Vec<Question>,
    wiscar: Vec<Question>,
}

/// Serializable listing of one section for questionnaire clients.
#[derive(Debug, Clone, Serialize)]
pub struct SectionListing<'a> {
    pub section: Section,
    pub title: &'static str,
    pub questions: &'a [Question],
}

impl QuestionBank {
    /// Health Informatics career-fit question bank.
    pub fn standard() -> Self {
        Self {
            psychological: psychological_questions(),
            technical: technical_questions(),
            wiscar: wiscar_questions(),
        }
    }

    pub fn questions(&self, section: Section) -> &[Question] {
        match section {
            Section::Psychological => &self.psychological,
            Section::Technical => &self.technical,
            Section::Wiscar => &self.wiscar,
        }
    }

    pub fn find(&self, section: Section, question_id: &str) -> Option<&Question> {
        self.questions(section)
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn listings(&self) -> Vec<SectionListing<'_>> {
        Section::ALL
            .into_iter()
            .map(|section| SectionListing {
                section,
                title: section.label(),
                questions: self.questions(section),
            })
            .collect()
    }
}

fn scale(id: &'static str, text: &'static str, category: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Scale,
        options: Vec::new(),
        category,
        weight: None,
        answer_key: None,
    }
}

fn choice(
    id: &'static str,
    text: &'static str,
    options: Vec<&'static str>,
    category: &'static str,
    correct: Option<usize>,
) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Choice,
        options,
        category,
        weight: None,
        answer_key: correct.map(AnswerKey::Option),
    }
}

fn yes_no(id: &'static str, text: &'static str, category: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::YesNo,
        options: Vec::new(),
        category,
        weight: None,
        answer_key: Some(AnswerKey::Affirmative(true)),
    }
}

fn psychological_questions() -> Vec<Question> {
    vec![
        scale(
            "openness_1",
            "I enjoy learning about new healthcare technologies and medical innovations.",
            "Openness to Experience",
        ),
        scale(
            "openness_2",
            "I am curious about how different healthcare systems work together.",
            "Openness to Experience",
        ),
        scale(
            "openness_3",
            "I like to explore creative solutions to healthcare data problems.",
            "Openness to Experience",
        ),
        scale(
            "conscientiousness_1",
            "I pay close attention to details when working with medical data.",
            "Conscientiousness",
        ),
        scale(
            "conscientiousness_2",
            "I prefer to follow established protocols and procedures in healthcare settings.",
            "Conscientiousness",
        ),
        scale(
            "conscientiousness_3",
            "I am thorough in documenting and organizing healthcare information.",
            "Conscientiousness",
        ),
        scale(
            "investigative_1",
            "I enjoy analyzing patterns in health data to identify trends.",
            "Investigative Interest",
        ),
        scale(
            "investigative_2",
            "I find satisfaction in solving complex healthcare technology problems.",
            "Investigative Interest",
        ),
        scale(
            "grit_1",
            "I persist through difficult technical challenges even when frustrated.",
            "Grit & Persistence",
        ),
        scale(
            "grit_2",
            "I am willing to invest time in mastering healthcare informatics standards.",
            "Grit & Persistence",
        ),
        scale(
            "motivation_1",
            "I am motivated by the potential to improve patient care through technology.",
            "Intrinsic Motivation",
        ),
        scale(
            "motivation_2",
            "I would pursue this career even if the salary was moderate.",
            "Intrinsic Motivation",
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        choice(
            "logic_1",
            "If all EHR systems use HL7 standards, and Hospital X uses an EHR system, what can we conclude?",
            vec![
                "Hospital X uses HL7 standards",
                "Hospital X doesn't use HL7 standards",
                "We cannot determine if Hospital X uses HL7 standards",
                "Hospital X needs to upgrade their system",
            ],
            "Logical Reasoning",
            Some(0),
        ),
        choice(
            "numerical_1",
            "A hospital processes 1,200 patient records per day. If 15% contain data errors, how many error-free records are processed daily?",
            vec!["180 records", "1,020 records", "1,050 records", "985 records"],
            "Numerical Reasoning",
            Some(1),
        ),
        choice(
            "pattern_1",
            "In the sequence: Patient ID, Diagnosis Code, Treatment Date, Insurance Info, what would logically come next?",
            vec![
                "Billing Amount",
                "Patient Name",
                "Hospital Location",
                "Doctor's Age",
            ],
            "Pattern Recognition",
            Some(0),
        ),
        choice(
            "healthcare_1",
            "What does EHR stand for in healthcare?",
            vec![
                "Electronic Health Records",
                "Emergency Health Response",
                "Extended Health Resources",
                "Electronic Hospital Registration",
            ],
            "Healthcare Systems",
            Some(0),
        ),
        choice(
            "healthcare_2",
            "HIPAA primarily governs:",
            vec![
                "Patient data privacy and security",
                "Hospital staffing requirements",
                "Medical device regulations",
                "Insurance claim processing",
            ],
            "Healthcare Regulations",
            Some(0),
        ),
        choice(
            "healthcare_3",
            "What is interoperability in healthcare?",
            vec![
                "The ability of different systems to exchange and use information",
                "The cost-effectiveness of medical procedures",
                "The speed of patient treatment",
                "The accuracy of medical diagnoses",
            ],
            "Healthcare Technology",
            Some(0),
        ),
        choice(
            "domain_1",
            "HL7 FHIR is:",
            vec![
                "A healthcare data exchange standard",
                "A medical device certification",
                "A patient privacy regulation",
                "A hospital management system",
            ],
            "Health Informatics Standards",
            Some(0),
        ),
        choice(
            "domain_2",
            "Which is most important when implementing a new EHR system?",
            vec![
                "User training and workflow integration",
                "Choosing the cheapest option",
                "Installing the newest technology",
                "Minimizing staff involvement",
            ],
            "Implementation Knowledge",
            Some(0),
        ),
        yes_no(
            "it_1",
            "Are you comfortable using spreadsheet software (Excel) for data analysis?",
            "Technical Skills",
        ),
        yes_no(
            "it_2",
            "Have you worked with databases or SQL before?",
            "Technical Skills",
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    vec![
        scale(
            "will_1",
            "I have a strong internal drive to work in healthcare technology.",
            "Will - Internal Drive",
        ),
        scale(
            "will_2",
            "I am self-motivated to learn about health informatics even without external pressure.",
            "Will - Self-Motivation",
        ),
        scale(
            "interest_1",
            "I find the intersection of healthcare and technology fascinating.",
            "Interest - Domain Focus",
        ),
        scale(
            "interest_2",
            "I enjoy reading about advances in medical technology and data science.",
            "Interest - Sustained Engagement",
        ),
        scale(
            "skill_1",
            "I have experience working with healthcare data or medical records.",
            "Skill - Current Level",
        ),
        scale(
            "skill_2",
            "I am confident in my ability to learn new technical systems quickly.",
            "Skill - Learning Confidence",
        ),
        scale(
            "cognitive_1",
            "I can handle complex, multi-step problems that require systematic thinking.",
            "Cognitive - Problem Solving",
        ),
        scale(
            "cognitive_2",
            "I am comfortable working with abstract concepts and technical specifications.",
            "Cognitive - Abstract Thinking",
        ),
        scale(
            "learning_1",
            "I actively seek feedback to improve my performance.",
            "Learning - Feedback Seeking",
        ),
        scale(
            "learning_2",
            "I enjoy learning from mistakes and see them as growth opportunities.",
            "Learning - Growth Mindset",
        ),
        choice(
            "realworld_1",
            "How would you react if you discovered a significant data discrepancy in patient records?",
            vec![
                "Immediately investigate and follow proper protocols to correct it",
                "Report it to a supervisor and wait for instructions",
                "Note it for later review when you have more time",
                "Assume it's a minor issue that will resolve itself",
            ],
            "Real-World - Problem Response",
            None,
        ),
        choice(
            "realworld_2",
            "When implementing a new health IT system, what would be your priority?",
            vec![
                "Ensuring patient data security and system reliability",
                "Making the system user-friendly for staff",
                "Completing the implementation quickly",
                "Minimizing costs and resource usage",
            ],
            "Real-World - Priority Setting",
            None,
        ),
    ]
}
