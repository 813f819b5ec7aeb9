//! The arena: every unit, the fight's phase and the per-frame step.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::core::collision::handle_collisions;
use crate::core::events::{GameEvent, Phase};
use crate::core::math::Vec3;
use crate::core::unit::{Direction, HealthLevel, Role, Team, Unit, UnitId};

/// Longest step taken in one go; slower frames are simulated as if shorter.
pub const MAX_STEP: f32 = 0.05;

/// Clearance kept between randomly placed bots and everything else.
const SPAWN_CLEARANCE: f32 = 2.0;

pub struct World {
    pub units: Vec<Unit>,
    pub player: UnitId,
    pub half_size: f32,
    pub phase: Phase,
    seed: u64,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl World {
    pub fn spawn(cfg: &GameConfig) -> Self {
        let h = cfg.arena_half_size;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut units = vec![Unit::player(0.0, 0.0)];
        let player = 0;

        for x in spread(cfg.attackers, h * 0.6) {
            units.push(Unit::attacker(player, x, h * 0.6));
        }
        for x in spread(cfg.defenders, h * 0.6) {
            units.push(Unit::defender(player, x, -h * 0.5));
        }
        let mut bots = 0;
        for i in 0..cfg.bots {
            match free_spot(&units, h, &mut rng) {
                Some((x, y)) => {
                    units.push(Unit::bot(x, y));
                    bots += 1;
                }
                None => log::warn!("no room for bot {i}, skipping"),
            }
        }

        log::info!(
            "spawned {} attackers, {} defenders and {} bots in a {}x{} arena",
            cfg.attackers, cfg.defenders, bots, 2.0 * h, 2.0 * h
        );
        Self {
            units,
            player,
            half_size: h,
            phase: Phase::Playing,
            seed: cfg.seed,
            rng,
            events: Vec::new(),
        }
    }

    pub fn player(&self) -> &Unit { &self.units[self.player] }

    pub fn player_move(&mut self, dir: Direction) {
        self.units[self.player].move_dir(dir);
    }

    pub fn player_stop(&mut self, dir: Direction) {
        self.units[self.player].stop(dir);
    }

    pub fn player_dash(&mut self, is_dashing: bool) {
        if self.units[self.player].set_is_dashing(is_dashing) {
            log::debug!("player dashed");
            self.events.push(GameEvent::Dashed { unit: self.player });
        }
    }

    /// Advances one frame: AI, then physics, then contacts, then the outcome.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP);
        if self.phase == Phase::Playing {
            self.think(dt);
        }
        for unit in &mut self.units {
            unit.update(dt);
        }

        let mut contacts = Vec::new();
        handle_collisions(&mut self.units, self.half_size, &mut contacts);
        for event in contacts {
            if let GameEvent::Hit { victim, attacker, health } = event {
                log::debug!("unit {attacker} hit unit {victim}, health now {health:?}");
                self.events.push(event);
                if health == HealthLevel::Empty {
                    log::info!("unit {victim} destroyed by unit {attacker}");
                    self.events.push(GameEvent::Destroyed { unit: victim });
                }
            } else {
                self.events.push(event);
            }
        }
        self.check_outcome();
    }

    fn think(&mut self, dt: f32) {
        for i in 0..self.units.len() {
            let target = self.units[i]
                .target()
                .and_then(|t| self.units.get(t))
                .filter(|t| !t.is_empty())
                .map(|t| t.body.pos);
            let mut role = self.units[i].role;
            let dashed = match &mut role {
                Role::Player => false,
                Role::Attacker(a) => a.attack(&mut self.units[i], target, dt),
                Role::Defender(d) => d.defend(&mut self.units[i], target, dt),
                Role::Bot(b) => {
                    b.wander(&mut self.units[i], &mut self.rng, dt);
                    false
                }
            };
            self.units[i].role = role;
            if dashed {
                log::debug!("unit {i} dashed");
                self.events.push(GameEvent::Dashed { unit: i });
            }
        }
    }

    fn check_outcome(&mut self) {
        if self.phase != Phase::Playing { return; }
        let mut aliens = self.units.iter().filter(|u| u.team == Team::Aliens).peekable();
        let next = if self.player().is_empty() {
            Phase::Defeat
        } else if aliens.peek().is_some() && aliens.all(|u| u.is_empty()) {
            Phase::Victory
        } else {
            return;
        };
        log::info!("fight over: {next:?}");
        self.phase = next;
        for unit in self.units.iter_mut().filter(|u| !u.is_player()) {
            unit.set_is_dashing(false);
            unit.stop_all();
        }
        self.events.push(GameEvent::PhaseChanged(next));
    }

    /// Puts every unit back on its spawn point and restarts the fight.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.reset();
        }
        self.rng = StdRng::seed_from_u64(self.seed);
        self.phase = Phase::Playing;
        self.events.clear();
        log::info!("arena reset");
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// `n` x-positions evenly spaced across [-extent, extent].
fn spread(n: usize, extent: f32) -> Vec<f32> {
    if n == 0 { return Vec::new(); }
    let step = 2.0 * extent / n as f32;
    (0..n).map(|i| -extent + step * (i as f32 + 0.5)).collect()
}

/// A random spot at least `SPAWN_CLEARANCE` from every unit, or `None`
/// when 64 tries all land too close.
fn free_spot<R: Rng>(units: &[Unit], half_size: f32, rng: &mut R) -> Option<(f32, f32)> {
    let limit = half_size - 1.0;
    (0..64)
        .map(|_| (rng.gen_range(-limit..limit), rng.gen_range(-limit..limit)))
        .find(|&(x, y)| {
            let p = Vec3::new(x, y, 0.0);
            units.iter().all(|u| (u.body.pos - p).planar().len() >= SPAWN_CLEARANCE)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(attackers: usize, defenders: usize, bots: usize) -> GameConfig {
        GameConfig { attackers, defenders, bots, ..GameConfig::default() }
    }

    #[test]
    fn spawn_lays_out_roster() {
        let world = World::spawn(&roster(2, 1, 3));
        assert_eq!(world.units.len(), 7);
        assert!(world.player().is_player());
        assert_eq!(world.units.iter().filter(|u| u.team == Team::Aliens).count(), 3);
        assert_eq!(world.units.iter().filter(|u| u.team == Team::Neutral).count(), 3);
        for u in &world.units {
            assert!(u.body.pos.x.abs() < world.half_size && u.body.pos.y.abs() < world.half_size);
        }
    }

    #[test]
    fn crowded_arena_never_spawns_overlapping_bots() {
        let world = World::spawn(&roster(0, 0, 60));
        assert!(world.units.len() <= 61);
        for (i, a) in world.units.iter().enumerate() {
            for b in &world.units[i + 1..] {
                let gap = (a.body.pos - b.body.pos).planar().len();
                assert!(gap >= SPAWN_CLEARANCE, "units {gap} apart");
            }
        }
    }

    #[test]
    fn no_room_means_no_bots() {
        // every spot within one unit of the centre touches the player
        let cfg = GameConfig { arena_half_size: 2.0, ..roster(0, 0, 4) };
        let world = World::spawn(&cfg);
        assert_eq!(world.units.len(), 1);
    }

    #[test]
    fn spread_centres_columns() {
        assert_eq!(spread(2, 6.0), vec![-3.0, 3.0]);
        assert!(spread(0, 6.0).is_empty());
    }

    #[test]
    fn killing_every_alien_wins() {
        let mut world = World::spawn(&roster(1, 0, 0));
        world.units[1].health = HealthLevel::Empty;
        world.step(1.0 / 60.0);
        assert_eq!(world.phase, Phase::Victory);
        assert!(world.drain_events().contains(&GameEvent::PhaseChanged(Phase::Victory)));
    }

    #[test]
    fn losing_the_player_is_defeat_and_reset_restarts() {
        let mut world = World::spawn(&roster(1, 1, 1));
        world.units[0].health = HealthLevel::Empty;
        world.step(1.0 / 60.0);
        assert_eq!(world.phase, Phase::Defeat);
        world.reset();
        assert_eq!(world.phase, Phase::Playing);
        assert_eq!(world.player().health, HealthLevel::High);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn no_aliens_means_no_victory() {
        let mut world = World::spawn(&roster(0, 0, 2));
        world.step(1.0 / 60.0);
        assert_eq!(world.phase, Phase::Playing);
    }

    #[test]
    fn player_dash_emits_event() {
        let mut world = World::spawn(&roster(0, 0, 0));
        world.player_dash(true);
        assert_eq!(world.drain_events(), vec![GameEvent::Dashed { unit: 0 }]);
        world.player_dash(false);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn huge_frames_are_clamped() {
        let mut world = World::spawn(&roster(0, 0, 0));
        world.player_move(Direction::Rightward);
        world.step(10.0);
        // one clamped step at 25 u/s^2
        assert!((world.player().body.vel.x - 25.0 * MAX_STEP).abs() < 1e-4);
    }
}
