//! Core game types and logic (bodies, units, AI, contacts, world).
//!
//! Re-exports:
//! - `math`: planar-friendly 3D vector
//! - `tuning`: per-role gameplay numbers
//! - `game_object`: physical body and integration
//! - `unit`: health, energy, dash and movement controls
//! - `player`: player unit and key bindings
//! - `enemy`: attacker and defender AI
//! - `bot`: neutral wanderers
//! - `collision`: unit contacts and arena walls
//! - `events`: events raised by a world step
//! - `world`: roster, phase and the per-frame step

pub mod math;
pub mod tuning;
pub mod game_object;
pub mod unit;
pub mod player;
pub mod enemy;
pub mod bot;
pub mod collision;
pub mod events;
pub mod world;
