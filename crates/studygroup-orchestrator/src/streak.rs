//! Trailing-run counting over ordered outcomes.

use studygroup_core::models::message::Message;

/// Length of the run of `wanted` at the tail of `outcomes`, stopping at the
/// first mismatch when scanning backward.
pub fn trailing_run<I>(outcomes: I, wanted: bool) -> u32
where
    I: IntoIterator<Item = bool>,
    I::IntoIter: DoubleEndedIterator,
{
    outcomes
        .into_iter()
        .rev()
        .take_while(|&outcome| outcome == wanted)
        .count() as u32
}

/// Correctness verdicts of the scored answers in a message log, in order.
pub fn answer_outcomes(messages: &[Message]) -> impl DoubleEndedIterator<Item = bool> + '_ {
    messages.iter().filter_map(Message::scored_correctness)
}

pub fn consecutive_correct(messages: &[Message]) -> u32 {
    trailing_run(answer_outcomes(messages), true)
}

pub fn consecutive_wrong(messages: &[Message]) -> u32 {
    trailing_run(answer_outcomes(messages), false)
}
