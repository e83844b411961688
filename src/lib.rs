//! # hyrule-world - A Small Text-Adventure World Model
//!
//! A world of rooms linked by named, one-way exits, holding items and
//! monsters:
//! - **Composable weapons** (base stats plus an optional enchantment and gems)
//! - **Kind/variant monsters** (identity and stat profile vary independently)
//! - **Tiered loot** (factories produce consistent common/rare/legendary bundles)
//! - **Deterministic assembly** (the same calls always yield the same world)
//!
//! ## Core Concepts
//!
//! ### Weapon totals
//!
//! Weapon totals are computed from base stats and modifiers on every read:
//!
//! ```text
//! [base] + [enchantment] + [gems] → total damage
//! [base] + [gems]                 → total durability
//! ```
//!
//! ### Soft failures
//!
//! Only construction fails with a [`GameError`]. Gameplay misuse, such as
//! attacking with a weapon the player does not carry or firing an empty
//! bow, returns descriptive text instead.
//!
//! ## Example
//!
//! ```rust
//! use hyrule_world::*;
//!
//! let world = build_world();
//! let entry = world.entry().unwrap();
//! assert_eq!(world.rooms()[0].name, "Ancient Forest");
//!
//! let mut builder = WeaponBuilder::new();
//! let blade = MasterBladeDirector::construct(&mut builder).unwrap();
//!
//! let mut link = Player::default();
//! link.pick_weapon(blade.clone());
//! assert!(link.attack(&blade).contains("deals 105 damage"));
//!
//! let details = world.describe(entry).unwrap();
//! assert!(details.contains("[common] Traveler's Sword"));
//! ```
//!
//! ## Modules
//!
//! - [`modifier`] - Enchantments and gems
//! - [`item`] - Items, rarity, keys and potions
//! - [`weapon`] - Swords, bows and shields
//! - [`builder`] - Weapon builder and fixed recipes
//! - [`factory`] - Tiered item factories
//! - [`monster`] - Monster kinds and variants
//! - [`room`] - Rooms and exits
//! - [`world`] - Room ownership and world assembly
//! - [`graph`] - Route and reachability queries
//! - [`player`] - The player and their inventory
//! - [`config`] - Session configuration
//! - [`session`] - Game session
//! - [`error`] - Error types

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod graph;
pub mod item;
pub mod modifier;
pub mod monster;
pub mod player;
pub mod room;
pub mod session;
pub mod weapon;
pub mod world;

// Re-export main types for convenience
pub use config::GameConfig;
pub use error::GameError;
pub use graph::WorldGraph;
pub use player::Player;
pub use session::Game;
pub use world::{build_world, World};

// Re-export item types
pub use item::{Item, ItemRarity, Key, Potion, PotionEffect, Usable};
pub use modifier::{Enchantment, EnchantmentType, Gem};
pub use weapon::{Weapon, WeaponKind, WeaponType};

// Re-export construction helpers
pub use builder::{AncientBowDirector, MasterBladeDirector, WeaponBuilder};
pub use factory::{
    factory_for, CommonItemFactory, ItemFactory, LegendaryItemFactory, RareItemFactory,
    WeaponFactory,
};

// Re-export monster and room types
pub use monster::{
    BlueVariant, Monster, MonsterGroup, MonsterKind, MonsterVariant, RedVariant, WhiteVariant,
};
pub use room::{Exit, Room, RoomId};
