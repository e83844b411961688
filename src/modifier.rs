//! Stat modifiers module.
//!
//! Enchantments and gems are immutable value objects that add to a
//! weapon's computed totals. They carry no identity beyond their value
//! and are owned by the weapon that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental type of an enchantment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnchantmentType {
    Fire,
    Ice,
    Lightning,
    Light,
    Darkness,
}

impl EnchantmentType {
    /// Lowercase label used in use-effect text.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnchantmentType::Fire => "fire",
            EnchantmentType::Ice => "ice",
            EnchantmentType::Lightning => "lightning",
            EnchantmentType::Light => "light",
            EnchantmentType::Darkness => "darkness",
        }
    }
}

impl fmt::Display for EnchantmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enchantment adding elemental damage to a weapon.
///
/// The power only contributes to damage, never to durability.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{Enchantment, EnchantmentType};
///
/// let fire = Enchantment::new(EnchantmentType::Fire, 20);
/// assert_eq!(fire.description(), "[FIRE] +20 elemental damage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    /// The element.
    #[serde(rename = "type")]
    pub kind: EnchantmentType,
    /// Bonus damage contributed by the enchantment.
    pub power: u16,
}

impl Enchantment {
    pub fn new(kind: EnchantmentType, power: u16) -> Self {
        Self { kind, power }
    }

    /// Single-line description, e.g. `[LIGHT] +30 elemental damage`.
    pub fn description(&self) -> String {
        format!(
            "[{}] +{} elemental damage",
            self.kind.as_str().to_uppercase(),
            self.power
        )
    }
}

/// A gem socketed into a weapon.
///
/// Gems add to both damage and durability. Socket order only affects the
/// order in which gems are listed.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::Gem;
///
/// let ruby = Gem::new("Ruby", 15, 10);
/// assert_eq!(ruby.description(), "Ruby (+15 DMG, +10 DUR)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gem {
    pub name: String,
    pub bonus_damage: u16,
    pub bonus_durability: u16,
}

impl Gem {
    pub fn new(name: impl Into<String>, bonus_damage: u16, bonus_durability: u16) -> Self {
        Self {
            name: name.into(),
            bonus_damage,
            bonus_durability,
        }
    }

    pub fn description(&self) -> String {
        format!(
            "{} (+{} DMG, +{} DUR)",
            self.name, self.bonus_damage, self.bonus_durability
        )
    }
}
