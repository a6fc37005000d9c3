//! Injectable dice source, so defaulted Luck is reproducible under test

/// A source of die rolls
pub trait DiceRollerPort {
    /// Roll a single die with the given number of sides, returning a value
    /// in `1..=sides`
    fn roll(&mut self, sides: u32) -> i64;
}
