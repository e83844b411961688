//! Error types for world construction.
//!
//! Only construction and configuration can fail. Gameplay misuse
//! (attacking with a weapon you do not hold, firing an empty bow) is
//! reported as descriptive text instead, so it never shows up here.

use crate::room::RoomId;
use crate::weapon::WeaponType;
use thiserror::Error;

/// Errors raised while building weapons, worlds or configuration.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{GameError, WeaponType};
///
/// let err = GameError::MissingName { weapon: WeaponType::Bow };
/// assert_eq!(err.to_string(), "Weapon name is required to build a bow");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    /// A builder reached a terminal build call without a name.
    ///
    /// The builder keeps its state, so the caller can set a name and retry.
    #[error("Weapon name is required to build a {weapon}")]
    MissingName { weapon: WeaponType },

    /// A room id that does not belong to this world.
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    /// The world has no rooms to start in.
    #[error("World has no rooms")]
    EmptyWorld,

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::MissingName {
            weapon: WeaponType::Shield,
        };
        assert!(err.to_string().contains("shield"));

        let err = GameError::UnknownRoom(RoomId::from_index(7));
        assert_eq!(err.to_string(), "Unknown room: #7");
    }
}
