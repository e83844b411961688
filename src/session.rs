//! Game session module.
//!
//! A [`Game`] bundles the configuration, the player and the world they
//! explore. Sessions can be created and passed around explicitly with
//! [`Game::new`]; [`Game::global`] additionally offers one process-wide
//! session, created on first access.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::Player;
use crate::world::{build_world, World};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static GLOBAL: Lazy<Mutex<Game>> = Lazy::new(|| Mutex::new(Game::new(GameConfig::default())));

/// One running game.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    pub player: Player,
    pub world: World,
}

impl Game {
    /// Start a session on a freshly assembled world.
    pub fn new(config: GameConfig) -> Self {
        let player = Player::from_config(&config);
        let world = build_world();
        tracing::info!(player = %player.name, rooms = world.len(), "game session created");
        Self {
            config,
            player,
            world,
        }
    }

    /// The shared session, created with default settings on first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hyrule_world::Game;
    ///
    /// let first = Game::global() as *const _;
    /// let second = Game::global() as *const _;
    /// assert_eq!(first, second);
    /// ```
    pub fn global() -> &'static Mutex<Game> {
        &GLOBAL
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Detail block of the entry room, ready for presentation.
    pub fn start(&self) -> Result<String, GameError> {
        let entry = self.world.entry().ok_or(GameError::EmptyWorld)?;
        self.world.describe(entry)
    }
}
