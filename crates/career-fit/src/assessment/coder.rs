use super::domain::{AnswerKey, Question, QuestionKind, ScoringMode};

/// Coded value used for answers that cannot be read as a number.
pub const DEFAULT_CODE: f64 = 2.5;
pub const MIN_CODE: f64 = 0.0;
pub const MAX_CODE: f64 = 4.0;

/// Converts raw answer tokens into values on the 0-4 scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerCoder {
    mode: ScoringMode,
}

impl AnswerCoder {
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Codes an answer. `question` is `None` for ids the bank does not know, which are coded
    /// by position like any unkeyed question.
    pub fn code(&self, question: Option<&Question>, token: Option<&str>) -> f64 {
        if self.mode == ScoringMode::Keyed {
            if let Some(coded) = question.and_then(|question| keyed_code(question, token)) {
                return coded;
            }
        }
        code_ordinal(token)
    }
}

/// Position-based coding: the leading integer of the token, clamped to 0-4.
pub fn code_ordinal(token: Option<&str>) -> f64 {
    match token.and_then(parse_leading_int) {
        Some(value) => (value as f64).clamp(MIN_CODE, MAX_CODE),
        None => DEFAULT_CODE,
    }
}

fn keyed_code(question: &Question, token: Option<&str>) -> Option<f64> {
    let token = token?;
    match (question.kind, question.answer_key?) {
        (QuestionKind::Choice, AnswerKey::Option(correct)) => {
            let chosen = parse_leading_int(token)?;
            let hit = usize::try_from(chosen).map_or(false, |index| index == correct);
            Some(if hit { MAX_CODE } else { MIN_CODE })
        }
        (QuestionKind::YesNo, AnswerKey::Affirmative(expected)) => {
            let answered = match token.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => return None,
            };
            Some(if answered == expected { MAX_CODE } else { MIN_CODE })
        }
        _ => None,
    }
}

/// Reads an optionally signed run of leading digits, ignoring surrounding whitespace and any
/// trailing characters ("3", " 2 ", "2.7" and "4abc" all parse).
fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate very long digit runs; the result is clamped to the scale anyway.
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
