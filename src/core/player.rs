//! The player-controlled unit and its key bindings.
use crate::core::tuning::UnitTuning;
use crate::core::unit::{Direction, Role, Team, Unit};

/// What a key press means to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Dash,
    Reset,
    ToggleCamera,
}

/// Keyboard layout: `w a s d` to drive, space to dash, `r` to reset,
/// `m` to switch camera.
pub fn command_for_key(key: char) -> Option<Command> {
    match key.to_ascii_lowercase() {
        'w' => Some(Command::Move(Direction::Forward)),
        's' => Some(Command::Move(Direction::Backward)),
        'a' => Some(Command::Move(Direction::Leftward)),
        'd' => Some(Command::Move(Direction::Rightward)),
        ' ' => Some(Command::Dash),
        'r' => Some(Command::Reset),
        'm' => Some(Command::ToggleCamera),
        _ => None,
    }
}

impl Unit {
    pub fn player(x: f32, y: f32) -> Self {
        Unit::new(UnitTuning::player(), Team::Terrans, Role::Player, x, y)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::HealthLevel;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for_key('W'), Some(Command::Move(Direction::Forward)));
        assert_eq!(command_for_key('a'), Some(Command::Move(Direction::Leftward)));
        assert_eq!(command_for_key(' '), Some(Command::Dash));
        assert_eq!(command_for_key('q'), None);
    }

    #[test]
    fn player_defaults() {
        let p = Unit::player(0.0, 0.0);
        assert!(p.is_player());
        assert_eq!(p.team, Team::Terrans);
        assert!(p.deals_damage);
        assert_eq!(p.health, HealthLevel::High);
        assert_eq!(p.body.max_speed, 18.0);
        assert_eq!(p.body.mass, 2.0);
        assert!((p.body.pos.z - 0.2).abs() < 1e-6);
    }
}
