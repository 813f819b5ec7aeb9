use arena_units::config::GameConfig;
use arena_units::core::events::{GameEvent, Phase};
use arena_units::core::math::Vec3;
use arena_units::core::unit::{Direction, HealthLevel};
use arena_units::core::world::World;

const DT: f32 = 1.0 / 60.0;

fn duel() -> World {
    World::spawn(&GameConfig { attackers: 1, defenders: 0, bots: 0, ..GameConfig::default() })
}

/// Parks the attacker right in front of the player and has the player dash into it.
fn ram(world: &mut World) -> Vec<GameEvent> {
    world.units[1].body.pos = Vec3::new(0.0, 1.2, 0.1);
    world.units[1].body.vel = Vec3::ZERO;
    world.units[1].body.is_colliding = false;
    // too tired to strike back, so only the player's dash lands
    world.units[1].energy_pt = 0.0;
    world.units[1].is_dashing = false;
    world.units[0].body.pos = Vec3::new(0.0, 0.0, 0.2);
    world.units[0].body.front = Vec3::new(0.0, 1.0, 0.0);
    world.units[0].energy_pt = 100.0;
    world.player_dash(true);
    world.step(DT);
    world.player_dash(false);
    world.drain_events()
}

#[test]
fn three_dashes_destroy_an_attacker_and_win() {
    let mut world = duel();
    for expected in [HealthLevel::Medium, HealthLevel::Low] {
        ram(&mut world);
        assert_eq!(world.units[1].health, expected);
    }
    let events = ram(&mut world);
    assert!(world.units[1].is_empty());
    assert!(events.contains(&GameEvent::Destroyed { unit: 1 }));
    assert!(events.contains(&GameEvent::PhaseChanged(Phase::Victory)));
    assert_eq!(world.phase, Phase::Victory);
}

#[test]
fn attacker_hunts_a_standing_player() {
    let mut world = duel();
    let mut hit = false;
    for _ in 0..(60 * 20) {
        world.step(DT);
        let events = world.drain_events();
        if events.iter().any(|e| matches!(e, GameEvent::Hit { victim: 0, attacker: 1, .. })) {
            hit = true;
            break;
        }
    }
    assert!(hit, "attacker never landed a hit");
    assert!(world.player().health < HealthLevel::High);
}

#[test]
fn destroyed_player_cannot_drive() {
    let mut world = duel();
    world.units[0].health = HealthLevel::Empty;
    world.step(DT);
    assert_eq!(world.phase, Phase::Defeat);
    world.player_move(Direction::Forward);
    world.step(DT);
    assert_eq!(world.player().body.acc.y, 0.0);
}

#[test]
fn same_seed_same_fight() {
    let run = || {
        let mut world = World::spawn(&GameConfig::default());
        for _ in 0..600 {
            world.step(DT);
        }
        world.units.iter().map(|u| u.body.pos).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn units_stay_inside_the_arena() {
    let mut world = World::spawn(&GameConfig::default());
    for _ in 0..(60 * 30) {
        world.step(DT);
    }
    let h = world.half_size;
    for u in &world.units {
        assert!(u.body.pos.x.abs() <= h && u.body.pos.y.abs() <= h);
    }
}
