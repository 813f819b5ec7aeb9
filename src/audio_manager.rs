//! Sound effects driven by world events. Everything is optional: no device
//! or no files just means a silent game.
use std::{fs::File, io::Read, io::BufReader, sync::Arc};
use std::io::Cursor;
use rodio::{OutputStream, OutputStreamHandle, Sink, Decoder};
use rodio::Source;

use crate::core::events::{GameEvent, Phase};

pub fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

/// First of `paths` that can be read.
pub fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Some(b) = load_bytes(p) { return Some(b); }
    }
    None
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    hit: Option<Arc<Vec<u8>>>,
    dash: Option<Arc<Vec<u8>>>,
    destroyed: Option<Arc<Vec<u8>>>,
    victory: Option<Arc<Vec<u8>>>,
    defeat: Option<Arc<Vec<u8>>>,
    hit_volume: f32,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            hit: None,
            dash: None,
            destroyed: None,
            victory: None,
            defeat: None,
            hit_volume: 0.8,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.hit = load_bytes_any(&[
            "assets/sfx_hit.wav",
            "assets/sounds/hit.wav",
            "assets/sounds/hit.ogg",
        ]).map(Arc::new);
        self.dash = load_bytes_any(&[
            "assets/sfx_dash.wav",
            "assets/sounds/dash.wav",
            "assets/sounds/whoosh.wav",
        ]).map(Arc::new);
        self.destroyed = load_bytes_any(&[
            "assets/sfx_destroyed.wav",
            "assets/sounds/destroyed.wav",
            "assets/sounds/explosion.wav",
        ]).map(Arc::new);
        self.victory = load_bytes_any(&[
            "assets/sfx_victory.wav",
            "assets/sounds/victory.wav",
        ]).map(Arc::new);
        self.defeat = load_bytes_any(&[
            "assets/sfx_defeat.wav",
            "assets/sounds/defeat.wav",
        ]).map(Arc::new);

        let loaded = [&self.hit, &self.dash, &self.destroyed, &self.victory, &self.defeat]
            .iter()
            .filter(|s| s.is_some())
            .count();
        if loaded == 0 {
            log::warn!("no sound files found under assets/, playing silent");
        } else {
            log::info!("loaded {loaded} sound effects");
        }
    }

    pub fn play_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Hit { .. } => self.play_hit(),
                GameEvent::Dashed { .. } => self.play_data(self.dash.clone()),
                GameEvent::Destroyed { .. } => self.play_data(self.destroyed.clone()),
                GameEvent::PhaseChanged(Phase::Victory) => self.play_data(self.victory.clone()),
                GameEvent::PhaseChanged(Phase::Defeat) => self.play_data(self.defeat.clone()),
                GameEvent::PhaseChanged(Phase::Playing) => {}
            }
        }
    }

    fn play_hit(&self) {
        // Own sink so several hits in one frame all trigger immediately
        if let Some(d) = self.hit.clone() {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.hit_volume.clamp(0.0, 2.5)));
                    sink.detach();
                }
            }
        }
    }

    fn play_data(&self, data: Option<Arc<Vec<u8>>>) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                self.sfx_sink.append(dec);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_load_as_none() {
        assert!(load_bytes("assets/definitely_missing.wav").is_none());
        assert!(load_bytes_any(&["nope.wav", "also/nope.ogg"]).is_none());
    }

    #[test]
    fn first_readable_path_wins() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let bytes = load_bytes_any(&["nope.wav", manifest]).expect("Cargo.toml readable");
        assert!(!bytes.is_empty());
    }
}
