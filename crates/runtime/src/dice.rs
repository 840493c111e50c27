//! Dice port for initiative rolls.
//!
//! Rolling happens at the table, outside the state machine; the core only
//! ever sees the resulting initiative number. This module supplies the
//! rolls for embedders that want the tracker to do the rolling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait DiceRoller: Send {
    /// Rolls a single die, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Thread-local OS-seeded roller for real sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdRoller;

impl DiceRoller for StdRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        rand::thread_rng().gen_range(1..=sides.max(1))
    }
}

/// Deterministic roller for tests and replayable sessions.
#[derive(Debug)]
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceRoller for SeededRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides.max(1))
    }
}

/// Standard initiative roll: d20 plus the dexterity modifier.
pub fn roll_initiative(roller: &mut dyn DiceRoller, dex_modifier: i32) -> i32 {
    roller.roll(20) as i32 + dex_modifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_in_range() {
        let mut roller = SeededRoller::new(7);
        for _ in 0..200 {
            let roll = roller.roll(20);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRoller::new(42);
        let mut b = SeededRoller::new(42);
        let rolls_a: Vec<_> = (0..10).map(|_| a.roll(20)).collect();
        let rolls_b: Vec<_> = (0..10).map(|_| b.roll(20)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn initiative_adds_the_modifier() {
        let mut roller = SeededRoller::new(1);
        let raw = SeededRoller::new(1).roll(20) as i32;
        assert_eq!(roll_initiative(&mut roller, 3), raw + 3);
    }
}
