//! Circle-vs-circle contacts on the arena floor and the arena walls.
use crate::core::events::GameEvent;
use crate::core::math::Vec3;
use crate::core::tuning::{RESTITUTION, WALL_BOUNCE};
use crate::core::unit::{HealthLevel, Unit, UnitId};

/// Hits one contact produced.
#[derive(Debug, Default, PartialEq)]
pub struct ContactOutcome {
    pub overlapped: bool,
    pub hit_a: Option<HealthLevel>,
    pub hit_b: Option<HealthLevel>,
}

/// Resolves one pair. Overlapping bodies are pushed apart by inverse mass and
/// trade an elastic impulse through `apply_force`, so the damage rules run on
/// every contact even when the impulse is zero.
pub fn handle_collision(a: &mut Unit, a_id: UnitId, b: &mut Unit, b_id: UnitId) -> ContactOutcome {
    let delta = (b.body.pos - a.body.pos).planar();
    let dist = delta.len();
    let reach = a.body.radius + b.body.radius;
    if dist >= reach {
        return ContactOutcome::default();
    }

    // coincident centres: pick an axis instead of dividing by zero
    let normal = if dist > f32::EPSILON { delta / dist } else { Vec3::new(1.0, 0.0, 0.0) };
    let inv_a = 1.0 / a.body.mass;
    let inv_b = 1.0 / b.body.mass;
    let inv_sum = inv_a + inv_b;

    let overlap = reach - dist;
    a.body.pos -= normal * (overlap * inv_a / inv_sum);
    b.body.pos += normal * (overlap * inv_b / inv_sum);

    let closing = (a.body.vel - b.body.vel).planar().dot(normal);
    let j = if closing > 0.0 { (1.0 + RESTITUTION) * closing / inv_sum } else { 0.0 };

    let impact_a = a.impact(a_id);
    let impact_b = b.impact(b_id);
    let hit_a = a.apply_force(normal * -j, &impact_b);
    let hit_b = b.apply_force(normal * j, &impact_a);
    ContactOutcome { overlapped: true, hit_a, hit_b }
}

/// Runs every unordered pair once, then latches `is_colliding` so a hit only
/// lands on the first frame of a contact. Wall bounces come last.
pub fn handle_collisions(units: &mut [Unit], half_size: f32, events: &mut Vec<GameEvent>) {
    let mut touching = vec![false; units.len()];
    for i in 0..units.len() {
        for j in (i + 1)..units.len() {
            let (head, tail) = units.split_at_mut(j);
            let outcome = handle_collision(&mut head[i], i, &mut tail[0], j);
            if !outcome.overlapped { continue; }
            touching[i] = true;
            touching[j] = true;
            if let Some(health) = outcome.hit_a {
                events.push(GameEvent::hit(i, j, health));
            }
            if let Some(health) = outcome.hit_b {
                events.push(GameEvent::hit(j, i, health));
            }
        }
    }
    for (unit, touched) in units.iter_mut().zip(touching) {
        unit.body.is_colliding = touched;
        keep_in_arena(unit, half_size);
    }
}

/// Clamps a unit inside the square arena and bounces it off the wall it hit.
pub fn keep_in_arena(unit: &mut Unit, half_size: f32) {
    let limit = (half_size - unit.body.radius).max(0.0);
    let body = &mut unit.body;
    if body.pos.x > limit {
        body.pos.x = limit;
        body.vel.x = -body.vel.x.abs() * WALL_BOUNCE;
    } else if body.pos.x < -limit {
        body.pos.x = -limit;
        body.vel.x = body.vel.x.abs() * WALL_BOUNCE;
    }
    if body.pos.y > limit {
        body.pos.y = limit;
        body.vel.y = -body.vel.y.abs() * WALL_BOUNCE;
    } else if body.pos.y < -limit {
        body.pos.y = -limit;
        body.vel.y = body.vel.y.abs() * WALL_BOUNCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping_pair() -> Vec<Unit> {
        let mut player = Unit::player(0.0, 0.0);
        let attacker = Unit::attacker(0, 0.0, 0.8);
        player.body.vel = Vec3::new(0.0, 5.0, 0.0);
        vec![player, attacker]
    }

    #[test]
    fn apart_bodies_do_not_touch() {
        let mut a = Unit::player(0.0, 0.0);
        let mut b = Unit::bot(3.0, 0.0);
        assert_eq!(handle_collision(&mut a, 0, &mut b, 1), ContactOutcome::default());
    }

    #[test]
    fn overlap_is_separated_and_momentum_exchanged() {
        let mut units = overlapping_pair();
        let mut events = Vec::new();
        handle_collisions(&mut units, 20.0, &mut events);
        let gap = (units[1].body.pos - units[0].body.pos).planar().len();
        assert!((gap - 1.0).abs() < 1e-4);

        // 0.2 overlap split by inverse mass: 1/2 against 1/1.5
        let inv_sum = 0.5 + 1.0 / 1.5;
        assert!((units[0].body.pos.y + 0.2 * 0.5 / inv_sum).abs() < 1e-4);
        assert!((units[1].body.pos.y - (0.8 + 0.2 * (1.0 / 1.5) / inv_sum)).abs() < 1e-4);

        // closing speed 5 with restitution 0.8
        let j = 1.8 * 5.0 / inv_sum;
        assert!((units[0].body.vel.y - (5.0 - j * 0.5)).abs() < 1e-3);
        assert!((units[1].body.vel.y - j / 1.5).abs() < 1e-3);
        let momentum = 2.0 * units[0].body.vel.y + 1.5 * units[1].body.vel.y;
        assert!((momentum - 10.0).abs() < 1e-3);

        assert!(units[0].body.is_colliding && units[1].body.is_colliding);
        assert!(events.is_empty());
    }

    #[test]
    fn separating_dash_still_hits_without_impulse() {
        let mut units = overlapping_pair();
        units[0].body.vel = Vec3::new(0.0, -5.0, 0.0);
        units[0].is_dashing = true;
        let (head, tail) = units.split_at_mut(1);
        let outcome = handle_collision(&mut head[0], 0, &mut tail[0], 1);
        assert_eq!(outcome.hit_b, Some(HealthLevel::Medium));
        assert_eq!(outcome.hit_a, None);
        assert_eq!(units[0].body.vel.y, -5.0);
        assert_eq!(units[1].body.vel, Vec3::ZERO);
    }

    #[test]
    fn dash_hits_once_per_contact() {
        let mut units = overlapping_pair();
        units[0].is_dashing = true;
        let mut events = Vec::new();
        handle_collisions(&mut units, 20.0, &mut events);
        assert_eq!(units[1].health, HealthLevel::Medium);
        assert_eq!(events, vec![GameEvent::hit(1, 0, HealthLevel::Medium)]);

        // still touching next frame: no second hit
        units[1].body.pos = units[0].body.pos + Vec3::new(0.0, 0.9, 0.0);
        events.clear();
        handle_collisions(&mut units, 20.0, &mut events);
        assert_eq!(units[1].health, HealthLevel::Medium);
        assert!(events.is_empty());
    }

    #[test]
    fn walls_clamp_and_bounce() {
        let mut u = Unit::bot(0.0, 0.0);
        u.body.pos = Vec3::new(12.0, -3.0, 0.1);
        u.body.vel = Vec3::new(4.0, 0.0, 0.0);
        keep_in_arena(&mut u, 10.0);
        assert_eq!(u.body.pos.x, 9.5);
        assert_eq!(u.body.vel.x, -2.0);
    }
}
