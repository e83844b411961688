//! Item factories module.
//!
//! Each tier factory produces a consistent loot bundle (weapon, potion,
//! key) for one rarity. Factories are stateless and deterministic: the same
//! tier always yields the same named, same-statted items.
//!
//! [`WeaponFactory`] is the untiered counterpart for when exact stats are
//! needed.

use crate::item::{Item, ItemRarity, Key, Potion, PotionEffect};
use crate::weapon::Weapon;

/// A family of items sharing one rarity tier.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{factory_for, ItemRarity};
///
/// let factory = factory_for(ItemRarity::Legendary);
/// let blade = factory.create_weapon();
/// assert_eq!(blade.name, "Master Blade");
/// assert_eq!(blade.rarity, factory.rarity());
/// ```
pub trait ItemFactory: Send + Sync {
    /// The tier every item from this factory carries.
    fn rarity(&self) -> ItemRarity;

    fn create_weapon(&self) -> Weapon;

    fn create_potion(&self) -> Potion;

    fn create_key(&self) -> Key;

    /// One of each: weapon, potion, key.
    fn create_bundle(&self) -> Vec<Item> {
        vec![
            self.create_weapon().into(),
            self.create_potion().into(),
            self.create_key().into(),
        ]
    }
}

/// Low-tier loot for the start of an adventure.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonItemFactory;

impl ItemFactory for CommonItemFactory {
    fn rarity(&self) -> ItemRarity {
        ItemRarity::Common
    }

    fn create_weapon(&self) -> Weapon {
        Weapon::sword("Traveler's Sword", 5, 20, self.rarity())
    }

    fn create_potion(&self) -> Potion {
        Potion::new("Red Potion", self.rarity(), PotionEffect::Heal, 20)
    }

    fn create_key(&self) -> Key {
        Key::new("Old Key", self.rarity())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RareItemFactory;

impl ItemFactory for RareItemFactory {
    fn rarity(&self) -> ItemRarity {
        ItemRarity::Rare
    }

    fn create_weapon(&self) -> Weapon {
        Weapon::bow("Royal Bow", 15, 35, self.rarity())
    }

    fn create_potion(&self) -> Potion {
        Potion::new("Elixir of Strength", self.rarity(), PotionEffect::Strength, 50)
    }

    fn create_key(&self) -> Key {
        Key::new("Silver Key", self.rarity())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegendaryItemFactory;

impl ItemFactory for LegendaryItemFactory {
    fn rarity(&self) -> ItemRarity {
        ItemRarity::Legendary
    }

    fn create_weapon(&self) -> Weapon {
        Weapon::sword("Master Blade", 50, 100, self.rarity())
    }

    fn create_potion(&self) -> Potion {
        Potion::new("Goddess Tear", self.rarity(), PotionEffect::Heal, 999)
    }

    fn create_key(&self) -> Key {
        Key::new("Master Key", self.rarity())
    }
}

/// Pick the factory for a rarity tier.
pub fn factory_for(rarity: ItemRarity) -> Box<dyn ItemFactory> {
    match rarity {
        ItemRarity::Common => Box::new(CommonItemFactory),
        ItemRarity::Rare => Box::new(RareItemFactory),
        ItemRarity::Legendary => Box::new(LegendaryItemFactory),
    }
}

/// Direct weapon construction from explicit stats, independent of tiers.
pub struct WeaponFactory;

impl WeaponFactory {
    pub fn create_sword(
        name: impl Into<String>,
        damage: i32,
        durability: i32,
        rarity: ItemRarity,
    ) -> Weapon {
        Weapon::sword(name, damage, durability, rarity)
    }

    pub fn create_bow(
        name: impl Into<String>,
        damage: i32,
        durability: i32,
        rarity: ItemRarity,
    ) -> Weapon {
        Weapon::bow(name, damage, durability, rarity)
    }

    pub fn create_shield(
        name: impl Into<String>,
        durability: i32,
        defense: i32,
        rarity: ItemRarity,
    ) -> Weapon {
        Weapon::shield(name, durability, defense, rarity)
    }
}
