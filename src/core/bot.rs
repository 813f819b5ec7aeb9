//! Neutral wandering bots.
use rand::Rng;

use crate::core::tuning::*;
use crate::core::unit::{Direction, Role, Team, Unit};

/// Eight compass headings plus standing still, as (x, y) key presses.
const HEADINGS: [(i8, i8); 9] = [
    (0, 0),
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BotUnit {
    timer: f32,
    heading: (i8, i8),
}

impl BotUnit {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn heading(&self) -> (i8, i8) { self.heading }

    /// Keeps the current heading until the timer runs out, then rolls a new one.
    pub fn wander<R: Rng>(&mut self, unit: &mut Unit, rng: &mut R, dt: f32) {
        if unit.is_empty() { return; }
        self.timer -= dt;
        if self.timer > 0.0 { return; }
        self.timer = rng.gen_range(WANDER_MIN..WANDER_MAX);
        self.heading = HEADINGS[rng.gen_range(0..HEADINGS.len())];

        match self.heading.0 {
            1 => unit.move_dir(Direction::Rightward),
            -1 => unit.move_dir(Direction::Leftward),
            _ => unit.stop(Direction::Rightward),
        }
        match self.heading.1 {
            1 => unit.move_dir(Direction::Forward),
            -1 => unit.move_dir(Direction::Backward),
            _ => unit.stop(Direction::Forward),
        }
    }
}

impl Unit {
    pub fn bot(x: f32, y: f32) -> Self {
        Unit::new(UnitTuning::bot(), Team::Neutral, Role::Bot(BotUnit::default()), x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_walk() {
        let walk = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut unit = Unit::bot(0.0, 0.0);
            let mut brain = BotUnit::default();
            let mut headings = Vec::new();
            for _ in 0..600 {
                brain.wander(&mut unit, &mut rng, 1.0 / 60.0);
                unit.update(1.0 / 60.0);
                headings.push(brain.heading());
            }
            (headings, unit.body.pos)
        };
        assert_eq!(walk(9), walk(9));
    }

    #[test]
    fn picks_heading_on_first_tick_and_holds_it() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut unit = Unit::bot(0.0, 0.0);
        let mut brain = BotUnit::default();
        brain.wander(&mut unit, &mut rng, 0.01);
        let first = brain.heading();
        assert!(brain.timer >= WANDER_MIN);
        brain.wander(&mut unit, &mut rng, 0.5);
        assert_eq!(brain.heading(), first);
    }

    #[test]
    fn bots_are_harmless_neutrals() {
        let bot = Unit::bot(1.0, 1.0);
        assert_eq!(bot.team, Team::Neutral);
        assert!(!bot.deals_damage);
        assert_eq!(bot.segment_count, 6);
    }
}
