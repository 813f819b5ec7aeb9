//! Enemy units: attackers hunt their target, defenders hold a post.
//!
//! Both drive through the same `move_dir`/`stop`/`set_is_dashing` controls a
//! human player uses, so they obey the same acceleration and energy limits.
use crate::core::math::Vec3;
use crate::core::tuning::*;
use crate::core::unit::{Direction, Role, Team, Unit, UnitId};

/// Presses the direction keys that close `delta`. Counter-thrusts once the
/// unit could not otherwise stop in time and releases an axis inside the dead zone.
pub fn steer(unit: &mut Unit, delta: Vec3) {
    let (vx, vy) = (unit.body.vel.x, unit.body.vel.y);
    match steer_axis(delta.x, vx, unit.acc_ability) {
        Some(s) if s > 0.0 => unit.move_dir(Direction::Rightward),
        Some(_) => unit.move_dir(Direction::Leftward),
        None => if !unit.is_stopping_x { unit.stop(Direction::Rightward) },
    }
    match steer_axis(delta.y, vy, unit.acc_ability) {
        Some(s) if s > 0.0 => unit.move_dir(Direction::Forward),
        Some(_) => unit.move_dir(Direction::Backward),
        None => if !unit.is_stopping_y { unit.stop(Direction::Forward) },
    }
}

/// Sign to push along one axis, or None to let the axis brake to rest.
fn steer_axis(delta: f32, vel: f32, acc: f32) -> Option<f32> {
    if delta.abs() <= STEER_DEAD_ZONE {
        return if vel.abs() > 1.0 { Some(-vel.signum()) } else { None };
    }
    let closing = vel * delta > 0.0;
    if closing && acc > 0.0 && vel * vel / (2.0 * acc) >= delta.abs() {
        Some(-vel.signum())
    } else {
        Some(delta.signum())
    }
}

/// Dash timers shared by both enemy kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct DashClock {
    cooldown: f32,
    remaining: f32,
}

impl DashClock {
    /// Counts down and releases a running dash when its time is up.
    fn tick(&mut self, unit: &mut Unit, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if self.remaining > 0.0 {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.remaining = 0.0;
                unit.set_is_dashing(false);
            }
        }
    }

    fn ready(&self, unit: &Unit) -> bool {
        self.cooldown <= 0.0 && !unit.is_dashing && unit.energy_pt > ATTACK_MIN_ENERGY
    }

    /// Faces `target` and dashes at it.
    fn strike(&mut self, unit: &mut Unit, target: Vec3) -> bool {
        let aim = (target - unit.body.pos).planar();
        if aim.len() > f32::EPSILON {
            unit.body.front = aim.normalized();
        }
        self.remaining = DASH_TIME;
        self.cooldown = ATTACK_COOLDOWN;
        unit.set_is_dashing(true)
    }

    fn release(&mut self, unit: &mut Unit) {
        self.remaining = 0.0;
        if unit.is_dashing { unit.set_is_dashing(false); }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttackerUnit {
    pub target: UnitId,
    clock: DashClock,
}

impl AttackerUnit {
    pub fn new(target: UnitId) -> Self {
        Self { target, clock: DashClock::default() }
    }

    pub fn reset(&mut self) {
        self.clock = DashClock::default();
    }

    /// Chases `target` (None once it is out of the fight) and dashes when in
    /// range. Returns whether a dash kick happened this frame.
    pub fn attack(&mut self, unit: &mut Unit, target: Option<Vec3>, dt: f32) -> bool {
        self.clock.tick(unit, dt);
        if unit.is_empty() { return false; }
        let Some(target) = target else {
            self.clock.release(unit);
            unit.stop_all();
            return false;
        };
        let delta = (target - unit.body.pos).planar();
        steer(unit, delta);
        if delta.len() <= ATTACK_RANGE && self.clock.ready(unit) {
            return self.clock.strike(unit, target);
        }
        false
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DefenderUnit {
    pub target: UnitId,
    /// Point the defender guards and falls back to.
    pub post: Vec3,
    clock: DashClock,
}

impl DefenderUnit {
    pub fn new(target: UnitId, post: Vec3) -> Self {
        Self { target, post, clock: DashClock::default() }
    }

    pub fn reset(&mut self) {
        self.clock = DashClock::default();
    }

    /// Intercepts `target` while it is inside the guard radius of the post,
    /// otherwise walks back to the post.
    pub fn defend(&mut self, unit: &mut Unit, target: Option<Vec3>, dt: f32) -> bool {
        self.clock.tick(unit, dt);
        if unit.is_empty() { return false; }

        let intruder = target.filter(|t| (*t - self.post).planar().len() <= GUARD_RADIUS);
        if let Some(t) = intruder {
            let delta = (t - unit.body.pos).planar();
            steer(unit, delta);
            if delta.len() <= DEFEND_RANGE && self.clock.ready(unit) {
                return self.clock.strike(unit, t);
            }
            return false;
        }

        self.clock.release(unit);
        let home = (self.post - unit.body.pos).planar();
        if home.len() <= POST_TOLERANCE {
            unit.stop_all();
        } else {
            steer(unit, home);
        }
        false
    }
}

impl Unit {
    pub fn attacker(target: UnitId, x: f32, y: f32) -> Self {
        Unit::new(UnitTuning::attacker(), Team::Aliens, Role::Attacker(AttackerUnit::new(target)), x, y)
    }

    pub fn defender(target: UnitId, x: f32, y: f32) -> Self {
        let post = Vec3::new(x, y, 0.0);
        Unit::new(UnitTuning::defender(), Team::Aliens, Role::Defender(DefenderUnit::new(target, post)), x, y)
    }

    /// Unit this enemy is set on, if any.
    pub fn target(&self) -> Option<UnitId> {
        match &self.role {
            Role::Attacker(a) => Some(a.target),
            Role::Defender(d) => Some(d.target),
            Role::Player | Role::Bot(_) => None,
        }
    }
}
