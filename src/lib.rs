//! Arena Units: a small real-time arena game.
//!
//! Player, attacker, defender and bot units dash and collide on a square
//! floor drawn with raylib's immediate-mode 3D calls.

pub mod app;
pub mod audio_manager;
pub mod config;
pub mod core;
pub mod render;
