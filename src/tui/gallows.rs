//! Gallows drawings, one per stage of the round.

/// Drawings from an empty gallows (stage 0) to a complete figure.
const STAGES: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Index of the last drawing.
pub const LAST_STAGE: usize = STAGES.len() - 1;

/// Maps mistakes used onto a drawing so the figure completes exactly
/// when the budget runs out, whatever the budget.
pub fn stage(mistakes_used: usize, mistake_budget: usize) -> usize {
    if mistake_budget == 0 {
        return LAST_STAGE;
    }
    (mistakes_used.min(mistake_budget) * LAST_STAGE) / mistake_budget
}

/// Returns the drawing for a stage, clamped to the complete figure.
pub fn drawing(stage: usize) -> &'static str {
    STAGES[stage.min(LAST_STAGE)]
}
