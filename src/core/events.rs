//! Typed events raised by the world step, drained by the frontend each frame.
use crate::core::unit::{HealthLevel, UnitId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase { Playing, Victory, Defeat }

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Hit { victim: UnitId, attacker: UnitId, health: HealthLevel },
    Dashed { unit: UnitId },
    Destroyed { unit: UnitId },
    PhaseChanged(Phase),
}

impl GameEvent {
    pub fn hit(victim: UnitId, attacker: UnitId, health: HealthLevel) -> Self {
        GameEvent::Hit { victim, attacker, health }
    }
}
