//! Window callbacks: reshape, display, idle, keyboard and keyboard-up.
//!
//! `main` polls raylib and forwards to these; everything but `display` runs
//! without a window, which keeps the input and step logic testable.
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::events::GameEvent;
use crate::core::player::{Command, command_for_key};
use crate::core::world::World;
use crate::render::camera::{CameraMode, CameraRig, Projection, make_projection, make_view};
use crate::render::hud::draw_hud;
use crate::render::scene::render_scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

pub struct App {
    pub world: World,
    pub config: GameConfig,
    pub viewport: Viewport,
    pub projection: Projection,
    pub camera_mode: CameraMode,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let world = World::spawn(&config);
        let viewport = Viewport { width: config.window_width, height: config.window_height };
        Self {
            world,
            projection: make_projection(viewport.width, viewport.height),
            viewport,
            config,
            camera_mode: CameraMode::Chase,
        }
    }

    pub fn reshape(&mut self, width: i32, height: i32) {
        self.viewport = Viewport { width, height: height.max(1) };
        self.projection = make_projection(width, height);
        log::debug!("viewport {}x{}, aspect {:.3}", width, height, self.projection.aspect);
    }

    pub fn idle(&mut self, dt: f32) -> Vec<GameEvent> {
        self.world.step(dt);
        self.world.drain_events()
    }

    pub fn keyboard(&mut self, key: char) {
        match command_for_key(key) {
            Some(Command::Move(dir)) => self.world.player_move(dir),
            Some(Command::Dash) => self.world.player_dash(true),
            Some(Command::Reset) => self.world.reset(),
            Some(Command::ToggleCamera) => {
                self.camera_mode = self.camera_mode.toggled();
                log::info!("camera: {}", self.camera_mode.label());
            }
            None => {}
        }
    }

    pub fn keyboard_up(&mut self, key: char) {
        match command_for_key(key) {
            Some(Command::Move(dir)) => self.world.player_stop(dir),
            Some(Command::Dash) => self.world.player_dash(false),
            _ => {}
        }
    }

    pub fn view(&self) -> CameraRig {
        make_view(self.camera_mode, &self.projection, &self.world)
    }

    pub fn display(&self, d: &mut RaylibDrawHandle, fps: u32) {
        d.clear_background(Color::new(20, 20, 30, 255));
        {
            let camera = self.view().to_camera(&self.projection);
            let mut d3 = d.begin_mode3D(camera);
            render_scene(&mut d3, &self.world, self.config.grid_spacing);
        }
        draw_hud(d, &self.world, self.camera_mode, fps, self.viewport.width, self.viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::Phase;

    fn app() -> App {
        App::new(GameConfig { attackers: 0, defenders: 0, bots: 0, ..GameConfig::default() })
    }

    #[test]
    fn wasd_drives_and_release_brakes() {
        let mut app = app();
        app.keyboard('d');
        assert_eq!(app.world.player().body.acc.x, 25.0);
        for _ in 0..30 { app.idle(1.0 / 60.0); }
        app.keyboard_up('d');
        assert!(app.world.player().is_stopping_x);
        assert!(app.world.player().body.acc.x < 0.0);
    }

    #[test]
    fn space_dashes_until_released() {
        let mut app = app();
        app.keyboard(' ');
        assert!(app.world.player().is_dashing);
        let events = app.idle(1.0 / 60.0);
        assert_eq!(events, vec![GameEvent::Dashed { unit: 0 }]);
        app.keyboard_up(' ');
        assert!(!app.world.player().is_dashing);
    }

    #[test]
    fn m_toggles_camera_and_r_resets() {
        let mut app = app();
        app.keyboard('m');
        assert_eq!(app.camera_mode, CameraMode::TopDown);
        app.keyboard('w');
        for _ in 0..10 { app.idle(1.0 / 60.0); }
        app.keyboard('r');
        assert_eq!(app.world.player().body.pos.y, 0.0);
        assert_eq!(app.world.phase, Phase::Playing);
    }

    #[test]
    fn reshape_updates_aspect() {
        let mut app = app();
        app.reshape(1000, 500);
        assert_eq!(app.projection.aspect, 2.0);
        app.reshape(1000, 0);
        assert_eq!(app.viewport.height, 1);
    }
}
