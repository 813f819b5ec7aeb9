//! Physical body shared by everything on the arena floor.
use crate::core::math::Vec3;
use crate::core::tuning::{TURN_MIN_SPEED, TURN_RATE};

/// Wraps an angle into [-pi, pi].
#[inline]
pub fn normalize_angle(mut a: f32) -> f32 {
    while a >  std::f32::consts::PI { a -= 2.0*std::f32::consts::PI; }
    while a < -std::f32::consts::PI { a += 2.0*std::f32::consts::PI; }
    a
}

#[derive(Debug, Clone)]
pub struct GameObject {
    pub pos: Vec3,
    pub vel: Vec3,
    pub acc: Vec3,
    /// Unit heading on the XY plane.
    pub front: Vec3,
    pub mass: f32,
    pub radius: f32,
    pub max_speed: f32,
    /// Multiplier on `max_speed`; raised while a unit dashes.
    pub speed_cap_scale: f32,
    /// Whether the body overlapped another body during the last collision pass.
    pub is_colliding: bool,
}

impl Default for GameObject {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, 0.1),
            vel: Vec3::ZERO,
            acc: Vec3::ZERO,
            front: Vec3::new(0.0, 1.0, 0.0),
            mass: 1.0,
            radius: 0.5,
            max_speed: 10.0,
            speed_cap_scale: 1.0,
            is_colliding: false,
        }
    }
}

impl GameObject {
    /// Integrates acceleration and velocity, then turns toward the motion.
    pub fn update(&mut self, dt: f32) {
        self.integrate(dt);
        self.turn(dt);
    }

    pub fn integrate(&mut self, dt: f32) {
        self.vel += self.acc * dt;
        self.clamp_speed();
        self.pos += self.vel * dt;
    }

    /// Rotates `front` toward the planar velocity, limited by the turn rate.
    pub fn turn(&mut self, dt: f32) {
        let planar = self.vel.planar();
        if planar.len() < TURN_MIN_SPEED { return; }
        let current = self.front.heading();
        let mut diff = normalize_angle(planar.heading() - current);
        let max_turn = TURN_RATE * dt;
        if diff >  max_turn { diff =  max_turn; }
        if diff < -max_turn { diff = -max_turn; }
        let a = normalize_angle(current + diff);
        self.front = Vec3::new(a.cos(), a.sin(), 0.0);
    }

    /// Instantaneous impulse: the change in velocity is `force / mass`.
    pub fn apply_force(&mut self, force: Vec3) {
        self.vel += force / self.mass;
        self.clamp_speed();
    }

    pub fn speed_cap(&self) -> f32 {
        self.max_speed * self.speed_cap_scale
    }

    fn clamp_speed(&mut self) {
        let planar = self.vel.planar();
        let speed = planar.len();
        let cap = self.speed_cap();
        if speed > cap {
            let capped = planar * (cap / speed);
            self.vel = Vec3::new(capped.x, capped.y, self.vel.z);
        }
    }
}
