//! Screen-space overlay: FPS, player status, camera mode and the end banner.
use raylib::prelude::*;

use crate::core::events::Phase;
use crate::core::world::World;
use crate::render::camera::CameraMode;

/// Banner text for a finished fight.
pub fn banner(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Playing => None,
        Phase::Victory => Some("VICTORY - press R to play again"),
        Phase::Defeat => Some("DEFEATED - press R to try again"),
    }
}

pub fn draw_hud<D: RaylibDraw>(
    d: &mut D,
    world: &World,
    mode: CameraMode,
    fps: u32,
    width: i32,
    height: i32,
) {
    let player = world.player();
    d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::WHITE);
    d.draw_text(
        &format!("HEALTH: {:?}  ENERGY: {:.0} ({:?})", player.health, player.energy_pt, player.energy()),
        10, 40, 20, Color::WHITE,
    );
    d.draw_text(&format!("CAMERA: {} (M)", mode.label()), 10, 70, 20, Color::LIGHTGRAY);

    if player.is_dashing {
        d.draw_text("DASH", 10, 100, 20, Color::RED);
    }

    if let Some(text) = banner(world.phase) {
        let size = 40;
        // rough centring; raylib's default font is about half as wide as tall
        let text_w = text.len() as i32 * size / 2;
        let col = if world.phase == Phase::Victory { Color::GOLD } else { Color::RED };
        d.draw_text(text, (width - text_w) / 2, height / 2 - size, size, col);
    }
}
