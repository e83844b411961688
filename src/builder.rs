//! Weapon builder module.
//!
//! [`WeaponBuilder`] accumulates a pending weapon step by step and turns it
//! into a sword, bow or shield on demand. Build calls copy the accumulated
//! state, so reusing the builder afterwards never reaches into weapons that
//! were already built.
//!
//! Directors are fixed recipes on top of the builder that always produce
//! the same named weapon. They reset the builder before running.

use crate::error::GameError;
use crate::item::ItemRarity;
use crate::modifier::{Enchantment, EnchantmentType, Gem};
use crate::weapon::{Weapon, WeaponKind, DEFAULT_ARROWS};

/// Base damage of a freshly reset builder.
pub const DEFAULT_DAMAGE: i32 = 10;
/// Base durability of a freshly reset builder.
pub const DEFAULT_DURABILITY: i32 = 20;

/// Step-by-step weapon construction.
///
/// Setters take `&mut self` and return it, so calls can be chained and the
/// same builder can be [`reset`](WeaponBuilder::reset) and reused.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{EnchantmentType, Gem, ItemRarity, WeaponBuilder};
///
/// let mut builder = WeaponBuilder::new();
/// let sword = builder
///     .set_name("Flame Sword of the Hero")
///     .set_damage(35)
///     .set_durability(60)
///     .set_rarity(ItemRarity::Rare)
///     .add_enchantment(EnchantmentType::Fire, 20)
///     .add_gem(Gem::new("Topaz", 8, 5))
///     .set_special_ability("Burns enemies on hit")
///     .build_sword()
///     .unwrap();
///
/// assert_eq!(sword.total_damage(), 63);
/// ```
#[derive(Debug, Clone)]
pub struct WeaponBuilder {
    name: Option<String>,
    damage: i32,
    durability: i32,
    rarity: ItemRarity,
    enchantment: Option<Enchantment>,
    gems: Vec<Gem>,
    special_ability: Option<String>,
}

impl Default for WeaponBuilder {
    fn default() -> Self {
        Self {
            name: None,
            damage: DEFAULT_DAMAGE,
            durability: DEFAULT_DURABILITY,
            rarity: ItemRarity::Common,
            enchantment: None,
            gems: Vec::new(),
            special_ability: None,
        }
    }
}

impl WeaponBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_damage(&mut self, damage: i32) -> &mut Self {
        self.damage = damage;
        self
    }

    pub fn set_durability(&mut self, durability: i32) -> &mut Self {
        self.durability = durability;
        self
    }

    pub fn set_rarity(&mut self, rarity: ItemRarity) -> &mut Self {
        self.rarity = rarity;
        self
    }

    /// Set the enchantment. A weapon holds at most one, so a second call
    /// replaces the first.
    pub fn add_enchantment(&mut self, kind: EnchantmentType, power: u16) -> &mut Self {
        self.enchantment = Some(Enchantment::new(kind, power));
        self
    }

    /// Socket another gem after the ones already added.
    pub fn add_gem(&mut self, gem: Gem) -> &mut Self {
        self.gems.push(gem);
        self
    }

    pub fn set_special_ability(&mut self, ability: impl Into<String>) -> &mut Self {
        self.special_ability = Some(ability.into());
        self
    }

    /// Clear everything back to the defaults, keeping the builder.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn build_sword(&self) -> Result<Weapon, GameError> {
        self.build(WeaponKind::Sword, self.damage)
    }

    pub fn build_bow(&self) -> Result<Weapon, GameError> {
        self.build(
            WeaponKind::Bow {
                arrows: DEFAULT_ARROWS,
            },
            self.damage,
        )
    }

    /// Build a shield. The defense value is not part of the accumulated
    /// state and the configured damage is ignored.
    pub fn build_shield(&self, defense: i32) -> Result<Weapon, GameError> {
        self.build(WeaponKind::Shield { defense }, 0)
    }

    fn build(&self, kind: WeaponKind, damage: i32) -> Result<Weapon, GameError> {
        let name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(GameError::MissingName {
                weapon: kind.weapon_type(),
            })?;

        tracing::debug!(weapon = %name, kind = %kind.weapon_type(), "weapon built");

        Ok(Weapon {
            name: name.to_string(),
            rarity: self.rarity,
            damage,
            durability: self.durability,
            kind,
            enchantment: self.enchantment,
            gems: self.gems.clone(),
            special_ability: self.special_ability.clone(),
        })
    }
}

/// Recipe for the legendary Master Blade.
pub struct MasterBladeDirector;

impl MasterBladeDirector {
    pub const NAME: &'static str = "Master Blade";

    pub fn construct(builder: &mut WeaponBuilder) -> Result<Weapon, GameError> {
        builder
            .reset()
            .set_name(Self::NAME)
            .set_damage(50)
            .set_durability(100)
            .set_rarity(ItemRarity::Legendary)
            .add_enchantment(EnchantmentType::Light, 30)
            .add_gem(Gem::new("Ruby", 15, 10))
            .add_gem(Gem::new("Sapphire", 10, 20))
            .set_special_ability("Shoots beams at full health")
            .build_sword()
    }
}

/// Recipe for the Ancient Bow of Light.
pub struct AncientBowDirector;

impl AncientBowDirector {
    pub const NAME: &'static str = "Ancient Bow of Light";

    pub fn construct(builder: &mut WeaponBuilder) -> Result<Weapon, GameError> {
        builder
            .reset()
            .set_name(Self::NAME)
            .set_damage(40)
            .set_durability(80)
            .set_rarity(ItemRarity::Legendary)
            .add_enchantment(EnchantmentType::Lightning, 25)
            .add_gem(Gem::new("Diamond", 20, 15))
            .set_special_ability("Infinite arrows when charged")
            .build_bow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::WeaponType;

    #[test]
    fn test_defaults_after_reset() {
        let mut builder = WeaponBuilder::new();
        builder
            .set_name("Old")
            .set_damage(99)
            .add_gem(Gem::new("Opal", 1, 1))
            .add_enchantment(EnchantmentType::Fire, 3)
            .set_special_ability("None really");

        let sword = builder.reset().set_name("X").build_sword().unwrap();
        assert_eq!(sword.name, "X");
        assert_eq!(sword.damage, DEFAULT_DAMAGE);
        assert_eq!(sword.durability, DEFAULT_DURABILITY);
        assert_eq!(sword.rarity, ItemRarity::Common);
        assert!(sword.enchantment.is_none());
        assert!(sword.gems.is_empty());
        assert!(sword.special_ability.is_none());
    }

    #[test]
    fn test_missing_name_fails_every_build() {
        let builder = WeaponBuilder::new();
        assert_eq!(
            builder.build_sword(),
            Err(GameError::MissingName {
                weapon: WeaponType::Sword
            })
        );
        assert_eq!(
            builder.build_bow(),
            Err(GameError::MissingName {
                weapon: WeaponType::Bow
            })
        );
        assert_eq!(
            builder.build_shield(5),
            Err(GameError::MissingName {
                weapon: WeaponType::Shield
            })
        );
    }

    #[test]
    fn test_failed_build_can_be_retried() {
        let mut builder = WeaponBuilder::new();
        builder.set_damage(12);
        assert!(builder.build_sword().is_err());

        let sword = builder.set_name("Retry").build_sword().unwrap();
        assert_eq!(sword.damage, 12);
    }

    #[test]
    fn test_enchantment_is_last_write_wins() {
        let mut builder = WeaponBuilder::new();
        let sword = builder
            .set_name("Fickle")
            .add_enchantment(EnchantmentType::Fire, 5)
            .add_enchantment(EnchantmentType::Ice, 7)
            .build_sword()
            .unwrap();
        assert_eq!(
            sword.enchantment,
            Some(Enchantment::new(EnchantmentType::Ice, 7))
        );
        assert_eq!(sword.total_damage(), DEFAULT_DAMAGE + 7);
    }

    #[test]
    fn test_built_weapon_is_detached_from_builder() {
        let mut builder = WeaponBuilder::new();
        builder.set_name("First").add_gem(Gem::new("Ruby", 15, 10));
        let first = builder.build_sword().unwrap();

        builder.add_gem(Gem::new("Sapphire", 10, 20));
        let second = builder.build_sword().unwrap();

        assert_eq!(first.gems.len(), 1);
        assert_eq!(second.gems.len(), 2);
    }

    #[test]
    fn test_shield_ignores_damage() {
        let mut builder = WeaponBuilder::new();
        let shield = builder
            .set_name("Pot Lid")
            .set_damage(30)
            .build_shield(4)
            .unwrap();
        assert_eq!(shield.damage, 0);
        assert_eq!(shield.defense(), Some(4));
        assert_eq!(shield.durability, DEFAULT_DURABILITY);
    }

    #[test]
    fn test_directors_are_deterministic() {
        let mut builder = WeaponBuilder::new();
        let blade = MasterBladeDirector::construct(&mut builder).unwrap();
        builder.set_name("Leftover").add_gem(Gem::new("Opal", 1, 1));
        let again = MasterBladeDirector::construct(&mut builder).unwrap();
        assert_eq!(blade, again);
        assert_eq!(blade.total_damage(), 105);
        assert_eq!(blade.total_durability(), 130);

        builder.reset();
        let bow = AncientBowDirector::construct(&mut builder).unwrap();
        assert_eq!(bow.name, "Ancient Bow of Light");
        assert_eq!(bow.weapon_type(), WeaponType::Bow);
        assert_eq!(bow.total_damage(), 85);
        assert_eq!(bow.total_durability(), 95);
    }
}
