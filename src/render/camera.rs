//! Projection and view for the two camera modes.
//!
//! The math stays in world `Vec3`s; `CameraRig::to_camera` is the only place
//! that talks raylib.
use raylib::prelude::*;

use crate::core::math::Vec3;
use crate::core::world::World;

pub const FOVY_DEG: f32 = 60.0;

const CHASE_BACK: f32 = 8.0;
const CHASE_UP: f32 = 9.0;
/// Extra room around the arena in top-down mode.
const TOP_DOWN_MARGIN: f32 = 1.15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraMode { Chase, TopDown }

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::TopDown,
            CameraMode::TopDown => CameraMode::Chase,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Chase => "CHASE",
            CameraMode::TopDown => "TOP-DOWN",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    pub fovy_deg: f32,
    pub aspect: f32,
}

/// Perspective for a viewport; a zero height is treated as one pixel.
pub fn make_projection(width: i32, height: i32) -> Projection {
    let h = height.max(1) as f32;
    let w = width.max(1) as f32;
    Projection { fovy_deg: FOVY_DEG, aspect: w / h }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraRig {
    pub fn to_camera(&self, projection: &Projection) -> Camera3D {
        Camera3D::perspective(
            Vector3::new(self.position.x, self.position.y, self.position.z),
            Vector3::new(self.target.x, self.target.y, self.target.z),
            Vector3::new(self.up.x, self.up.y, self.up.z),
            projection.fovy_deg,
        )
    }
}

/// Chase: behind and above the player, z up. Top-down: above the arena
/// centre, high enough for the whole floor to fit the narrower screen side.
pub fn make_view(mode: CameraMode, projection: &Projection, world: &World) -> CameraRig {
    match mode {
        CameraMode::Chase => {
            let p = world.player().body.pos.planar();
            CameraRig {
                position: p + Vec3::new(0.0, -CHASE_BACK, CHASE_UP),
                target: p,
                up: Vec3::new(0.0, 0.0, 1.0),
            }
        }
        CameraMode::TopDown => {
            let half_fov = (projection.fovy_deg.to_radians() * 0.5).tan();
            let narrow = projection.aspect.min(1.0);
            let height = world.half_size * TOP_DOWN_MARGIN / (half_fov * narrow);
            CameraRig {
                position: Vec3::new(0.0, 0.0, height),
                target: Vec3::ZERO,
                up: Vec3::new(0.0, 1.0, 0.0),
            }
        }
    }
}
