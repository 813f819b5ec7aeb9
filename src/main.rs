// main.rs
use raylib::prelude::*;

use arena_units::app::App;
use arena_units::audio_manager::AudioManager;
use arena_units::config::GameConfig;

/// Keys forwarded to the keyboard callbacks, with the character they stand for.
const KEYMAP: [(KeyboardKey, char); 7] = [
    (KeyboardKey::KEY_W, 'w'),
    (KeyboardKey::KEY_A, 'a'),
    (KeyboardKey::KEY_S, 's'),
    (KeyboardKey::KEY_D, 'd'),
    (KeyboardKey::KEY_SPACE, ' '),
    (KeyboardKey::KEY_R, 'r'),
    (KeyboardKey::KEY_M, 'm'),
];

fn main() {
    env_logger::init();

    println!("=== Controls ===");
    println!("WASD  - Move");
    println!("Space - Dash (hold)");
    println!("M     - Toggle camera (chase / top-down)");
    println!("R     - Reset arena");
    println!("Esc   - Quit");
    println!("================");

    let config = GameConfig::load_or_default();

    let (mut window, raylib_thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title("Arena Units")
        .resizable()
        .build();
    window.set_target_fps(config.target_fps);

    let audio = if config.audio {
        let audio = AudioManager::new();
        if audio.is_none() { log::warn!("no audio output device, playing silent"); }
        audio.map(|mut a| { a.load_sfx_auto(); a })
    } else {
        None
    };

    let mut app = App::new(config);
    app.reshape(window.get_screen_width(), window.get_screen_height());

    while !window.window_should_close() {
        if window.is_window_resized() {
            app.reshape(window.get_screen_width(), window.get_screen_height());
        }

        for (key, ch) in KEYMAP {
            if window.is_key_pressed(key) { app.keyboard(ch); }
            if window.is_key_released(key) { app.keyboard_up(ch); }
        }

        let events = app.idle(window.get_frame_time());
        if let Some(audio) = &audio {
            audio.play_events(&events);
        }

        // read everything we need from `window` before begin_drawing borrows it
        let fps_now = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        app.display(&mut d, fps_now);
    }
}
