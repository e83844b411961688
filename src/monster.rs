//! Monster module.
//!
//! A monster pairs a [`MonsterKind`] (who it is) with a [`MonsterVariant`]
//! (how strong it is). The two halves vary independently, so any kind can
//! be combined with any variant without a type per combination. The pair is
//! fixed when the monster is constructed.
//!
//! Variant catalog:
//!
//! | Variant | HP  | Attack |
//! |---------|-----|--------|
//! | red     | 50  | 10     |
//! | blue    | 75  | 15     |
//! | white   | 120 | 25     |

use std::fmt;
use std::sync::Arc;

/// Stat profile half of a monster.
///
/// The color is a descriptive tag only.
pub trait MonsterVariant: Send + Sync + fmt::Debug {
    fn color(&self) -> &str;

    fn hp(&self) -> u32;

    fn attack_power(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedVariant;

impl MonsterVariant for RedVariant {
    fn color(&self) -> &str {
        "red"
    }

    fn hp(&self) -> u32 {
        50
    }

    fn attack_power(&self) -> u32 {
        10
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlueVariant;

impl MonsterVariant for BlueVariant {
    fn color(&self) -> &str {
        "blue"
    }

    fn hp(&self) -> u32 {
        75
    }

    fn attack_power(&self) -> u32 {
        15
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteVariant;

impl MonsterVariant for WhiteVariant {
    fn color(&self) -> &str {
        "white"
    }

    fn hp(&self) -> u32 {
        120
    }

    fn attack_power(&self) -> u32 {
        25
    }
}

/// Identity half of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    Bokoblin,
    Moblin,
    Hinox,
}

impl MonsterKind {
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Bokoblin => "Bokoblin",
            MonsterKind::Moblin => "Moblin",
            MonsterKind::Hinox => "Hinox",
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A monster: a kind paired with a shared variant.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{Monster, RedVariant};
/// use std::sync::Arc;
///
/// let bokoblin = Monster::bokoblin(Arc::new(RedVariant));
/// assert_eq!(bokoblin.attack(), "Bokoblin (red) attacks with 10 points!");
/// assert_eq!(bokoblin.stats(), "Bokoblin (red) - HP: 50");
/// ```
#[derive(Debug, Clone)]
pub struct Monster {
    kind: MonsterKind,
    variant: Arc<dyn MonsterVariant>,
}

impl Monster {
    pub fn new(kind: MonsterKind, variant: Arc<dyn MonsterVariant>) -> Self {
        Self { kind, variant }
    }

    pub fn bokoblin(variant: Arc<dyn MonsterVariant>) -> Self {
        Self::new(MonsterKind::Bokoblin, variant)
    }

    pub fn moblin(variant: Arc<dyn MonsterVariant>) -> Self {
        Self::new(MonsterKind::Moblin, variant)
    }

    pub fn hinox(variant: Arc<dyn MonsterVariant>) -> Self {
        Self::new(MonsterKind::Hinox, variant)
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn variant(&self) -> &dyn MonsterVariant {
        self.variant.as_ref()
    }

    pub fn hp(&self) -> u32 {
        self.variant.hp()
    }

    pub fn attack_power(&self) -> u32 {
        self.variant.attack_power()
    }

    /// Attack line. Read-only: nothing is resolved against a target.
    pub fn attack(&self) -> String {
        format!(
            "{} ({}) attacks with {} points!",
            self.kind,
            self.variant.color(),
            self.variant.attack_power()
        )
    }

    pub fn stats(&self) -> String {
        format!(
            "{} ({}) - HP: {}",
            self.kind,
            self.variant.color(),
            self.variant.hp()
        )
    }
}

/// Two monsters are equal when both halves report the same profile.
impl PartialEq for Monster {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.variant.color() == other.variant.color()
            && self.variant.hp() == other.variant.hp()
            && self.variant.attack_power() == other.variant.attack_power()
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stats())
    }
}

/// A pack of monsters acting together.
#[derive(Debug, Clone, Default)]
pub struct MonsterGroup {
    members: Vec<Monster>,
}

impl MonsterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, monster: Monster) -> &mut Self {
        self.members.push(monster);
        self
    }

    pub fn members(&self) -> &[Monster] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Attack lines of every member, in the order they joined.
    pub fn attack(&self) -> Vec<String> {
        self.members.iter().map(Monster::attack).collect()
    }

    /// Sum of the members' attack power.
    pub fn total_attack_power(&self) -> u32 {
        self.members.iter().map(Monster::attack_power).sum()
    }
}
