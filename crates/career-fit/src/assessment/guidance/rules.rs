use super::super::recommendation::ScoreResult;

/// One row of an ordered decision table.
pub(crate) struct DecisionRule<T> {
    pub(crate) applies: fn(&ScoreResult) -> bool,
    pub(crate) payload: T,
}

/// Payload of the first rule whose predicate matches. Tables end with a catch-all row.
pub(crate) fn first_match<'t, T>(
    table: &'t [DecisionRule<T>],
    scores: &ScoreResult,
) -> Option<&'t T> {
    table
        .iter()
        .find(|rule| (rule.applies)(scores))
        .map(|rule| &rule.payload)
}

pub(crate) fn always(_: &ScoreResult) -> bool {
    true
}
