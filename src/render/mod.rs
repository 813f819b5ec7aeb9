//! Rendering: camera, immediate-mode scene drawing and HUD.
//!
//! Re-exports:
//! - `camera`: projection and the chase/top-down views
//! - `scene`: grid, unit bodies, heading arrows, health and energy bars
//! - `hud`: text overlay and end-of-fight banner

pub mod camera;
pub mod scene;
pub mod hud;
