use crate::core::actions::chaos_game::state::GenerationState;

pub const COMPLETE_PERCENTAGE: u8 = 100;

/// Whole-number percentage of the run that has been generated.
///
/// A run with zero iterations is complete as soon as it starts, so it
/// reports 100 instead of dividing by zero.
#[must_use]
pub fn progress_percentage(state: &GenerationState) -> u8 {
    percentage(state.completed_iterations(), state.total_iterations())
}

#[must_use]
pub fn percentage(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return COMPLETE_PERCENTAGE;
    }

    let floored = u128::from(completed) * 100 / u128::from(total);

    floored.min(u128::from(COMPLETE_PERCENTAGE)) as u8
}
