//! Gameplay tuning for every unit role.
//!
//! Keep this separate from runtime configuration (window size, unit counts, seed).

/// Heading rotation speed toward the velocity direction, radians per second.
pub const TURN_RATE: f32 = 10.0;
/// Below this planar speed the heading is left alone.
pub const TURN_MIN_SPEED: f32 = 0.05;

/// Per-axis speed under which a braking unit snaps to rest.
pub const STOP_EPSILON: f32 = 0.1;
/// Fraction of the acceleration ability used when braking.
pub const BRAKE_FACTOR: f32 = 0.3;

pub const DASH_IMPULSE: f32 = 200.0;
/// A dash is refused at or below this much energy.
pub const DASH_MIN_ENERGY: f32 = 10.0;
pub const DASH_DRAIN_PER_SEC: f32 = 120.0;
pub const ENERGY_REGEN_PER_SEC: f32 = 12.0;
pub const DEFAULT_DASH_FACTOR: f32 = 300.0;

pub const RESTITUTION: f32 = 0.8;
pub const WALL_BOUNCE: f32 = 0.5;

// Enemy behaviour
pub const STEER_DEAD_ZONE: f32 = 0.3;
pub const ATTACK_RANGE: f32 = 3.0;
pub const ATTACK_MIN_ENERGY: f32 = 25.0;
pub const ATTACK_COOLDOWN: f32 = 1.5;
pub const DASH_TIME: f32 = 0.25;
pub const GUARD_RADIUS: f32 = 6.0;
pub const DEFEND_RANGE: f32 = 2.0;
pub const POST_TOLERANCE: f32 = 0.5;

// Bot wandering, seconds between heading changes
pub const WANDER_MIN: f32 = 1.5;
pub const WANDER_MAX: f32 = 3.0;

/// Physical and combat numbers one role starts with.
#[derive(Debug, Clone, Copy)]
pub struct UnitTuning {
    pub max_speed: f32,
    pub mass: f32,
    pub radius: f32,
    pub acc_ability: f32,
    pub segment_count: u32,
    pub deals_damage: bool,
    pub health_pt: f32,
    pub energy_pt: f32,
    /// Spawn height above the arena floor.
    pub height: f32,
    pub body_color: [f32; 3],
    pub arrow_color: [f32; 3],
}

impl Default for UnitTuning {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            mass: 1.0,
            radius: 0.5,
            acc_ability: 15.0,
            segment_count: 3,
            deals_damage: false,
            health_pt: 95.0,
            energy_pt: 60.0,
            height: 0.1,
            body_color: [0.8, 0.8, 0.8],
            arrow_color: [0.8, 0.8, 0.8],
        }
    }
}

impl UnitTuning {
    pub fn player() -> Self {
        Self {
            max_speed: 18.0,
            mass: 2.0,
            acc_ability: 25.0,
            segment_count: 5,
            deals_damage: true,
            height: 0.2,
            body_color: [0.2, 0.45, 0.9],
            arrow_color: [0.9, 0.9, 0.3],
            ..Self::default()
        }
    }

    pub fn attacker() -> Self {
        Self {
            max_speed: 14.0,
            mass: 1.5,
            acc_ability: 20.0,
            segment_count: 3,
            deals_damage: true,
            body_color: [0.85, 0.25, 0.2],
            arrow_color: [0.95, 0.6, 0.2],
            ..Self::default()
        }
    }

    pub fn defender() -> Self {
        Self {
            max_speed: 10.0,
            mass: 3.0,
            acc_ability: 12.0,
            segment_count: 4,
            deals_damage: true,
            energy_pt: 80.0,
            body_color: [0.6, 0.15, 0.5],
            arrow_color: [0.95, 0.6, 0.2],
            ..Self::default()
        }
    }

    pub fn bot() -> Self {
        Self {
            max_speed: 8.0,
            mass: 1.0,
            acc_ability: 10.0,
            segment_count: 6,
            deals_damage: false,
            health_pt: 60.0,
            body_color: [0.3, 0.75, 0.35],
            ..Self::default()
        }
    }
}
