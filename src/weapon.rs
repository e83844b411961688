//! Weapon module.
//!
//! A weapon stores its base stats and its modifiers. Totals are always
//! computed from those, never cached:
//!
//! ```text
//! total_damage     = damage + enchantment.power + Σ gem.bonus_damage
//! total_durability = durability + Σ gem.bonus_durability
//! ```
//!
//! Durability may run to zero or below through use; a broken weapon stays
//! wherever it is held and only reports [`Weapon::is_broken`].

use crate::item::{ItemRarity, Usable};
use crate::modifier::{Enchantment, Gem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrows a freshly built bow carries.
pub const DEFAULT_ARROWS: u32 = 30;

/// The three weapon families, without per-family state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponType {
    Sword,
    Bow,
    Shield,
}

impl WeaponType {
    /// Lowercase name, as used in serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponType::Sword => "sword",
            WeaponType::Bow => "bow",
            WeaponType::Shield => "shield",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon family together with the state only that family has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    Sword,
    /// Arrows deplete independently of durability.
    Bow { arrows: u32 },
    /// Shields block rather than deal damage.
    Shield { defense: i32 },
}

impl WeaponKind {
    /// The family, dropping per-family state.
    pub fn weapon_type(&self) -> WeaponType {
        match self {
            WeaponKind::Sword => WeaponType::Sword,
            WeaponKind::Bow { .. } => WeaponType::Bow,
            WeaponKind::Shield { .. } => WeaponType::Shield,
        }
    }
}

/// A sword, bow or shield with optional enchantment and gems.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{Enchantment, EnchantmentType, Gem, ItemRarity, Weapon};
///
/// let mut sword = Weapon::sword("Flame Sword", 35, 60, ItemRarity::Rare);
/// sword.enchantment = Some(Enchantment::new(EnchantmentType::Fire, 20));
/// sword.gems.push(Gem::new("Topaz", 8, 5));
///
/// assert_eq!(sword.total_damage(), 63); // 35 + 20 + 8
/// assert_eq!(sword.total_durability(), 65); // 60 + 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub rarity: ItemRarity,
    /// Base damage. Always 0 for shields.
    pub damage: i32,
    /// Base durability; decremented by use.
    pub durability: i32,
    pub kind: WeaponKind,
    pub enchantment: Option<Enchantment>,
    /// Socketed gems, in socket order.
    pub gems: Vec<Gem>,
    pub special_ability: Option<String>,
}

impl Weapon {
    fn plain(
        name: impl Into<String>,
        damage: i32,
        durability: i32,
        rarity: ItemRarity,
        kind: WeaponKind,
    ) -> Self {
        Self {
            name: name.into(),
            rarity,
            damage,
            durability,
            kind,
            enchantment: None,
            gems: Vec::new(),
            special_ability: None,
        }
    }

    /// A sword with no modifiers.
    pub fn sword(
        name: impl Into<String>,
        damage: i32,
        durability: i32,
        rarity: ItemRarity,
    ) -> Self {
        Self::plain(name, damage, durability, rarity, WeaponKind::Sword)
    }

    /// A bow with no modifiers and a full quiver.
    pub fn bow(name: impl Into<String>, damage: i32, durability: i32, rarity: ItemRarity) -> Self {
        Self::plain(
            name,
            damage,
            durability,
            rarity,
            WeaponKind::Bow {
                arrows: DEFAULT_ARROWS,
            },
        )
    }

    /// A shield with no modifiers. Shields have no base damage.
    pub fn shield(
        name: impl Into<String>,
        durability: i32,
        defense: i32,
        rarity: ItemRarity,
    ) -> Self {
        Self::plain(name, 0, durability, rarity, WeaponKind::Shield { defense })
    }

    /// The weapon's family.
    pub fn weapon_type(&self) -> WeaponType {
        self.kind.weapon_type()
    }

    /// Whether `other` is the same weapon, possibly at a different point of
    /// wear.
    ///
    /// Every field is compared except the ones use changes: durability and
    /// the bow's arrow count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hyrule_world::{ItemRarity, Usable, Weapon};
    ///
    /// let fresh = Weapon::bow("Royal Bow", 15, 35, ItemRarity::Rare);
    /// let mut worn = fresh.clone();
    /// worn.use_item();
    ///
    /// assert_ne!(worn, fresh);
    /// assert!(worn.is_same_weapon(&fresh));
    /// assert!(!worn.is_same_weapon(&Weapon::bow("Royal Bow", 16, 35, ItemRarity::Rare)));
    /// ```
    pub fn is_same_weapon(&self, other: &Weapon) -> bool {
        let same_kind = match (self.kind, other.kind) {
            (WeaponKind::Sword, WeaponKind::Sword) => true,
            (WeaponKind::Bow { .. }, WeaponKind::Bow { .. }) => true,
            (WeaponKind::Shield { defense: a }, WeaponKind::Shield { defense: b }) => a == b,
            _ => false,
        };

        same_kind
            && self.name == other.name
            && self.rarity == other.rarity
            && self.damage == other.damage
            && self.enchantment == other.enchantment
            && self.gems == other.gems
            && self.special_ability == other.special_ability
    }

    /// Damage with the enchantment power and every gem bonus added on.
    pub fn total_damage(&self) -> i32 {
        let enchantment = self
            .enchantment
            .map(|e| i32::from(e.power))
            .unwrap_or(0);
        let gems: i32 = self.gems.iter().map(|g| i32::from(g.bonus_damage)).sum();
        self.damage + enchantment + gems
    }

    /// Durability with every gem bonus added on.
    pub fn total_durability(&self) -> i32 {
        let gems: i32 = self
            .gems
            .iter()
            .map(|g| i32::from(g.bonus_durability))
            .sum();
        self.durability + gems
    }

    /// A weapon is broken once its base durability reaches zero. Gem
    /// bonuses do not keep it alive.
    pub fn is_broken(&self) -> bool {
        self.durability <= 0
    }

    /// Arrows left, for bows only.
    pub fn arrows(&self) -> Option<u32> {
        match self.kind {
            WeaponKind::Bow { arrows } => Some(arrows),
            _ => None,
        }
    }

    /// Defense value, for shields only.
    pub fn defense(&self) -> Option<i32> {
        match self.kind {
            WeaponKind::Shield { defense } => Some(defense),
            _ => None,
        }
    }

    fn enchantment_tag(&self) -> String {
        self.enchantment
            .map(|e| format!(" [{}]", e.kind))
            .unwrap_or_default()
    }

    /// Multi-line description block.
    ///
    /// Lines, in order: name, rarity, damage (total and base), durability,
    /// then the enchantment, gems and special ability when present.
    pub fn full_description(&self) -> String {
        let mut lines = vec![
            self.name.clone(),
            format!("   Rarity: {}", self.rarity),
            format!(
                "   Damage: {} (Base: {})",
                self.total_damage(),
                self.damage
            ),
            format!("   Durability: {}", self.total_durability()),
        ];

        if let Some(enchantment) = &self.enchantment {
            lines.push(format!("   {}", enchantment.description()));
        }

        if !self.gems.is_empty() {
            lines.push("   Gems:".to_string());
            lines.extend(
                self.gems
                    .iter()
                    .map(|gem| format!("      • {}", gem.description())),
            );
        }

        if let Some(ability) = &self.special_ability {
            lines.push(format!("   Special: {}", ability));
        }

        lines.join("\n")
    }
}

impl Usable for Weapon {
    fn use_item(&mut self) -> String {
        let tag = self.enchantment_tag();
        match self.kind {
            WeaponKind::Sword => {
                self.durability -= 1;
                format!(
                    "{}{} deals {} damage! (Durability: {}/{})",
                    self.name,
                    tag,
                    self.total_damage(),
                    self.durability,
                    self.total_durability()
                )
            }
            WeaponKind::Bow { arrows: 0 } => {
                tracing::debug!(weapon = %self.name, "bow fired with an empty quiver");
                format!("{} has no arrows left!", self.name)
            }
            WeaponKind::Bow { arrows } => {
                self.kind = WeaponKind::Bow { arrows: arrows - 1 };
                self.durability -= 1;
                format!(
                    "{}{} shoots! {} damage. (Arrows: {})",
                    self.name,
                    tag,
                    self.total_damage(),
                    arrows - 1
                )
            }
            WeaponKind::Shield { defense } => {
                self.durability -= 1;
                format!(
                    "{} blocks! (Defense: {}, Durability: {})",
                    self.name, defense, self.durability
                )
            }
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rarity, self.name)
    }
}
