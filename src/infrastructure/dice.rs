//! Random dice adapter

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::application::ports::outbound::DiceRollerPort;

/// Thread-local RNG behind the dice port
pub struct RandDiceRoller {
    rng: ThreadRng,
}

impl RandDiceRoller {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandDiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRollerPort for RandDiceRoller {
    fn roll(&mut self, sides: u32) -> i64 {
        i64::from(self.rng.gen_range(1..=sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut dice = RandDiceRoller::new();
        for _ in 0..1000 {
            let roll = dice.roll(6);
            assert!((1..=6).contains(&roll));
        }
    }
}
