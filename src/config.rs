//! Game configuration.
//!
//! Configuration is plain JSON. Every field is optional and falls back to
//! the defaults below.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_NAME: &str = "Link";
pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

/// Settings for a new game session.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "player_name": "Zelda" }"#).unwrap();
/// assert_eq!(config.player_name, "Zelda");
/// assert_eq!(config.player_health, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub player_name: String,
    pub player_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            player_health: DEFAULT_PLAYER_HEALTH,
        }
    }
}

impl GameConfig {
    /// Parse settings from JSON. Missing fields take their defaults,
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected game config");
            GameError::InvalidConfig(e.to_string())
        })
    }

    /// Pretty-printed JSON form of the settings.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            GameConfig::from_json("{ \"player_health\": \"lots\" }"),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json("{ \"mana\": 10 }"),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let config = GameConfig {
            player_name: "Sheik".to_string(),
            player_health: 60,
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
