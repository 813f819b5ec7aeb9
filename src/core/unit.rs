//! Units: a physical body plus health, energy, team and dash state.
//!
//! Every unit shares the movement controls in this file; what drives them
//! (keyboard, attacker AI, defender AI, wandering bot) is picked by [`Role`].
use crate::core::bot::BotUnit;
use crate::core::enemy::{AttackerUnit, DefenderUnit};
use crate::core::game_object::GameObject;
use crate::core::math::Vec3;
use crate::core::tuning::*;

/// Index of a unit inside the world's unit list.
pub type UnitId = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Team { Neutral, Terrans, Aliens }

/// Coarse level used for health and for the energy bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthLevel { Empty, Low, Medium, High }

impl HealthLevel {
    pub fn from_points(pt: f32) -> Self {
        if pt <= 0.0 { HealthLevel::Empty }
        else if pt <= 33.0 { HealthLevel::Low }
        else if pt <= 66.0 { HealthLevel::Medium }
        else { HealthLevel::High }
    }

    /// One level down; `Empty` stays `Empty`.
    pub fn lowered(self) -> Self {
        match self {
            HealthLevel::High => HealthLevel::Medium,
            HealthLevel::Medium => HealthLevel::Low,
            HealthLevel::Low | HealthLevel::Empty => HealthLevel::Empty,
        }
    }

    /// Highest point value that still maps to this level.
    pub fn top_points(self) -> f32 {
        match self {
            HealthLevel::Empty => 0.0,
            HealthLevel::Low => 33.0,
            HealthLevel::Medium => 66.0,
            HealthLevel::High => 100.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction { Forward, Backward, Leftward, Rightward }

/// What one unit knows about the unit pushing it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Impact {
    pub source: Option<UnitId>,
    pub team: Team,
    pub is_dashing: bool,
    pub deals_damage: bool,
}

impl Impact {
    /// A push that never hurts (walls, self impulses).
    pub fn environment() -> Self {
        Self { source: None, team: Team::Neutral, is_dashing: false, deals_damage: false }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Role {
    Player,
    Attacker(AttackerUnit),
    Defender(DefenderUnit),
    Bot(BotUnit),
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub body: GameObject,
    pub health: HealthLevel,
    pub health_pt: f32,
    pub energy_pt: f32,
    pub team: Team,
    pub is_dashing: bool,
    pub deals_damage: bool,
    pub is_stopping_x: bool,
    pub is_stopping_y: bool,
    pub acc_ability: f32,
    /// Speed cap while dashing, percent of `max_speed`.
    pub dash_factor: f32,
    pub segment_count: u32,
    pub body_color: [f32; 3],
    pub arrow_color: [f32; 3],
    pub role: Role,
    spawn: Vec3,
    tuning: UnitTuning,
}

impl Unit {
    pub fn new(tuning: UnitTuning, team: Team, role: Role, x: f32, y: f32) -> Self {
        let body = GameObject {
            mass: tuning.mass,
            radius: tuning.radius,
            max_speed: tuning.max_speed,
            ..GameObject::default()
        };
        let mut unit = Self {
            body,
            health: HealthLevel::from_points(tuning.health_pt),
            health_pt: tuning.health_pt,
            energy_pt: tuning.energy_pt,
            team,
            is_dashing: false,
            deals_damage: tuning.deals_damage,
            is_stopping_x: true,
            is_stopping_y: true,
            acc_ability: tuning.acc_ability,
            dash_factor: DEFAULT_DASH_FACTOR,
            segment_count: tuning.segment_count,
            body_color: tuning.body_color,
            arrow_color: tuning.arrow_color,
            role,
            spawn: Vec3::new(x, y, tuning.height),
            tuning,
        };
        unit.reset();
        unit
    }

    pub fn is_empty(&self) -> bool { self.health == HealthLevel::Empty }

    /// Energy banded the same way as health.
    pub fn energy(&self) -> HealthLevel { HealthLevel::from_points(self.energy_pt) }

    pub fn impact(&self, id: UnitId) -> Impact {
        Impact {
            source: Some(id),
            team: self.team,
            is_dashing: self.is_dashing,
            deals_damage: self.deals_damage,
        }
    }

    /// Accelerates along the axis of `dir`. A unit with no health cannot drive.
    pub fn move_dir(&mut self, dir: Direction) {
        let is_stopping = self.is_empty();
        let acc = if is_stopping { 0.0 } else { self.acc_ability };
        match dir {
            Direction::Forward => { self.is_stopping_y = is_stopping; self.body.acc.y = acc; }
            Direction::Backward => { self.is_stopping_y = is_stopping; self.body.acc.y = -acc; }
            Direction::Leftward => { self.is_stopping_x = is_stopping; self.body.acc.x = -acc; }
            Direction::Rightward => { self.is_stopping_x = is_stopping; self.body.acc.x = acc; }
        }
    }

    /// Starts braking on the axis of `dir`.
    pub fn stop(&mut self, dir: Direction) {
        let brake = self.acc_ability * BRAKE_FACTOR;
        match dir {
            Direction::Forward | Direction::Backward => {
                self.is_stopping_y = true;
                brake_axis(&mut self.body.vel.y, &mut self.body.acc.y, brake);
            }
            Direction::Leftward | Direction::Rightward => {
                self.is_stopping_x = true;
                brake_axis(&mut self.body.vel.x, &mut self.body.acc.x, brake);
            }
        }
    }

    pub fn stop_all(&mut self) {
        self.stop(Direction::Forward);
        self.stop(Direction::Rightward);
    }

    pub fn update(&mut self, dt: f32) {
        self.body.speed_cap_scale = if self.is_dashing { self.dash_factor / 100.0 } else { 1.0 };
        self.body.integrate(dt);
        self.turn(dt);

        let brake = self.acc_ability * BRAKE_FACTOR;
        if self.is_stopping_x { settle_axis(&mut self.body.vel.x, &mut self.body.acc.x, brake); }
        if self.is_stopping_y { settle_axis(&mut self.body.vel.y, &mut self.body.acc.y, brake); }

        if self.is_dashing {
            self.energy_pt -= DASH_DRAIN_PER_SEC * dt;
            if self.energy_pt <= 0.0 {
                self.energy_pt = 0.0;
                self.is_dashing = false;
            }
        } else {
            self.energy_pt += ENERGY_REGEN_PER_SEC * dt;
        }
        self.energy_pt = self.energy_pt.clamp(0.0, 100.0);
    }

    /// Heading only follows the motion while the unit is being driven.
    pub fn turn(&mut self, dt: f32) {
        if self.is_stopping_x && self.is_stopping_y { return; }
        self.body.turn(dt);
    }

    /// Stores the dash flag and, when the unit has health and energy for it,
    /// kicks it forward. Returns whether the kick happened. A destroyed unit
    /// never holds the flag.
    pub fn set_is_dashing(&mut self, is_dashing: bool) -> bool {
        self.is_dashing = is_dashing && !self.is_empty();
        if self.is_empty() || self.energy_pt <= DASH_MIN_ENERGY { return false; }
        if !is_dashing { return false; }
        self.body.speed_cap_scale = self.dash_factor / 100.0;
        let front = self.body.front;
        self.apply_force(front * DASH_IMPULSE, &Impact::environment());
        true
    }

    /// Pushes the unit. A dashing, damage-dealing unit of another team knocks
    /// one health level off on first contact. Returns the new level when hit.
    pub fn apply_force(&mut self, force: Vec3, impact: &Impact) -> Option<HealthLevel> {
        let mut hit = None;
        if !self.body.is_colliding
            && impact.source.is_some()
            && impact.is_dashing
            && impact.deals_damage
            && impact.team != self.team
            && !self.is_empty()
        {
            self.health = self.health.lowered();
            self.health_pt = self.health.top_points();
            if self.is_empty() {
                self.is_dashing = false;
                self.body.acc = Vec3::ZERO;
                self.is_stopping_x = true;
                self.is_stopping_y = true;
            }
            hit = Some(self.health);
        }
        self.body.apply_force(force);
        hit
    }

    pub fn reset(&mut self) {
        self.body.pos = self.spawn;
        self.body.vel = Vec3::ZERO;
        self.body.acc = Vec3::ZERO;
        self.body.front = Vec3::new(0.0, 1.0, 0.0);
        self.body.speed_cap_scale = 1.0;
        self.body.is_colliding = false;
        self.health_pt = self.tuning.health_pt;
        self.health = HealthLevel::from_points(self.health_pt);
        self.energy_pt = self.tuning.energy_pt;
        self.is_dashing = false;
        self.is_stopping_x = true;
        self.is_stopping_y = true;
        match &mut self.role {
            Role::Player => {}
            Role::Attacker(a) => a.reset(),
            Role::Defender(d) => d.reset(),
            Role::Bot(b) => b.reset(),
        }
    }
}

fn brake_axis(vel: &mut f32, acc: &mut f32, brake: f32) {
    if *vel < -STOP_EPSILON {
        *acc = brake;
    } else if *vel > STOP_EPSILON {
        *acc = -brake;
    } else {
        *vel = 0.0;
        *acc = 0.0;
    }
}

// Once braking has crossed zero (or got close) the axis comes to rest.
fn settle_axis(vel: &mut f32, acc: &mut f32, brake: f32) {
    let crossed = *acc != 0.0 && vel.signum() == acc.signum();
    if vel.abs() <= STOP_EPSILON || crossed {
        *vel = 0.0;
        *acc = 0.0;
    } else {
        brake_axis(vel, acc, brake);
    }
}
