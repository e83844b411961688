//! Item module.
//!
//! Items form a closed set of variants (key, potion, weapon) behind the
//! [`Item`] enum. Every variant can be used, which yields a description
//! of the effect. Using an item never removes it from where it is held.

use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRarity {
    #[default]
    Common,
    Rare,
    Legendary,
}

impl ItemRarity {
    /// Lowercase label, as shown in item listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemRarity::Common => "common",
            ItemRarity::Rare => "rare",
            ItemRarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every item: using it produces an effect description.
///
/// Using may mutate the item (weapons lose durability, bows lose arrows).
pub trait Usable {
    fn use_item(&mut self) -> String;
}

/// A key. Purely narrative for now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    pub rarity: ItemRarity,
}

impl Key {
    /// A key of the given tier.
    pub fn new(name: impl Into<String>, rarity: ItemRarity) -> Self {
        Self {
            name: name.into(),
            rarity,
        }
    }
}

impl Usable for Key {
    fn use_item(&mut self) -> String {
        format!("What can this {} do?", self.name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rarity, self.name)
    }
}

/// Effect applied by drinking a potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionEffect {
    Heal,
    Stamina,
    Strength,
}

impl PotionEffect {
    /// Lowercase label used in use-effect text.
    pub fn as_str(&self) -> &'static str {
        match self {
            PotionEffect::Heal => "heal",
            PotionEffect::Stamina => "stamina",
            PotionEffect::Strength => "strength",
        }
    }
}

impl fmt::Display for PotionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consumable potion.
///
/// Potions double as prototypes: cloning one yields a fully independent
/// copy whose name and effect can be changed freely.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{Potion, PotionEffect};
///
/// let original = Potion::healing_prototype();
/// let mut copy = original.clone();
/// copy.name = "Player's Healing Potion".to_string();
/// copy.effect = PotionEffect::Stamina;
///
/// assert_eq!(original.name, "Healing Potion");
/// assert_eq!(original.effect, PotionEffect::Heal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub rarity: ItemRarity,
    pub effect: PotionEffect,
    pub power: u32,
}

impl Potion {
    /// A potion restoring `power` points of `effect`.
    pub fn new(
        name: impl Into<String>,
        rarity: ItemRarity,
        effect: PotionEffect,
        power: u32,
    ) -> Self {
        Self {
            name: name.into(),
            rarity,
            effect,
            power,
        }
    }

    /// The template potion handed out as clones.
    pub fn healing_prototype() -> Self {
        Self::new("Healing Potion", ItemRarity::Common, PotionEffect::Heal, 50)
    }

    /// Three-line block: name, effect, potency.
    pub fn full_description(&self) -> String {
        [
            self.name.clone(),
            format!("   effect: {}", self.effect),
            format!("   potency: {}", self.power),
        ]
        .join("\n")
    }
}

impl Usable for Potion {
    fn use_item(&mut self) -> String {
        format!("{} restores {} {}!", self.name, self.power, self.effect)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rarity, self.name)
    }
}

/// Any item that can lie in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "lowercase")]
pub enum Item {
    Key(Key),
    Potion(Potion),
    Weapon(Weapon),
}

impl Item {
    /// Name of the wrapped item.
    pub fn name(&self) -> &str {
        match self {
            Item::Key(k) => &k.name,
            Item::Potion(p) => &p.name,
            Item::Weapon(w) => &w.name,
        }
    }

    /// Tier of the wrapped item.
    pub fn rarity(&self) -> ItemRarity {
        match self {
            Item::Key(k) => k.rarity,
            Item::Potion(p) => p.rarity,
            Item::Weapon(w) => w.rarity,
        }
    }

    /// The weapon inside, if this is one.
    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }
}

impl Usable for Item {
    fn use_item(&mut self) -> String {
        match self {
            Item::Key(k) => k.use_item(),
            Item::Potion(p) => p.use_item(),
            Item::Weapon(w) => w.use_item(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Key(k) => fmt::Display::fmt(k, f),
            Item::Potion(p) => fmt::Display::fmt(p, f),
            Item::Weapon(w) => fmt::Display::fmt(w, f),
        }
    }
}

impl From<Key> for Item {
    fn from(key: Key) -> Self {
        Item::Key(key)
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Item::Potion(potion)
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display_shows_rarity_and_name() {
        let key: Item = Key::new("Old Key", ItemRarity::Common).into();
        assert_eq!(key.to_string(), "[common] Old Key");

        let potion: Item =
            Potion::new("Goddess Tear", ItemRarity::Legendary, PotionEffect::Heal, 999).into();
        assert_eq!(potion.to_string(), "[legendary] Goddess Tear");
    }

    #[test]
    fn test_potion_use_reports_effect() {
        let mut potion = Potion::new("Red Potion", ItemRarity::Common, PotionEffect::Heal, 20);
        assert_eq!(potion.use_item(), "Red Potion restores 20 heal!");
        // Potions are not consumed away by use
        assert_eq!(potion.power, 20);
    }

    #[test]
    fn test_key_use_is_narrative() {
        let mut key: Item = Key::new("Silver Key", ItemRarity::Rare).into();
        assert_eq!(key.use_item(), "What can this Silver Key do?");
        assert_eq!(key.rarity(), ItemRarity::Rare);
        assert!(key.as_weapon().is_none());
    }

    #[test]
    fn test_cloned_prototype_is_independent() {
        let original = Potion::healing_prototype();
        let mut copy = original.clone();
        copy.name = "Player's Healing Potion".to_string();
        copy.effect = PotionEffect::Strength;
        copy.power = 1;

        assert_eq!(original.name, "Healing Potion");
        assert_eq!(original.effect, PotionEffect::Heal);
        assert_eq!(original.power, 50);
        assert!(copy.full_description().contains("effect: strength"));
    }

    #[test]
    fn test_item_json_is_tagged() {
        let key: Item = Key::new("Master Key", ItemRarity::Legendary).into();
        let json = serde_json::to_string(&key).unwrap();
        assert!(json.contains("\"item\":\"key\""));
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
