//! Player module.
//!
//! The player carries an ordered inventory of weapons. Misuse never fails
//! loudly: attacking with a weapon that is not carried, or dropping one,
//! degrades to a descriptive no-op.

use crate::config::GameConfig;
use crate::item::Usable;
use crate::weapon::Weapon;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub health: i32,
    inventory: Vec<Weapon>,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Player {
    /// A player with an empty inventory.
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            inventory: Vec::new(),
        }
    }

    /// A player named and healed as `config` says.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.player_name.clone(), config.player_health)
    }

    /// Carried weapons, in pick-up order.
    pub fn inventory(&self) -> &[Weapon] {
        &self.inventory
    }

    /// Whether `weapon` is carried, at any point of wear.
    pub fn has_weapon(&self, weapon: &Weapon) -> bool {
        self.position_of(weapon).is_some()
    }

    // Durability and arrows change with use, see `Weapon::is_same_weapon`.
    fn position_of(&self, weapon: &Weapon) -> Option<usize> {
        self.inventory.iter().position(|w| w.is_same_weapon(weapon))
    }

    /// Attack with a carried weapon.
    ///
    /// The carried copy is used (and worn down). When the weapon is not in
    /// the inventory, nothing changes and a failure line is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hyrule_world::{ItemRarity, Player, Weapon};
    ///
    /// let mut link = Player::new("Link", 100);
    /// let sword = Weapon::sword("Traveler's Sword", 5, 20, ItemRarity::Common);
    ///
    /// assert_eq!(
    ///     link.attack(&sword),
    ///     "Link does not have Traveler's Sword in inventory."
    /// );
    ///
    /// link.pick_weapon(sword.clone());
    /// link.attack(&sword);
    /// assert_eq!(link.inventory()[0].durability, 19);
    /// ```
    pub fn attack(&mut self, weapon: &Weapon) -> String {
        match self.position_of(weapon) {
            Some(pos) => self.inventory[pos].use_item(),
            None => {
                tracing::debug!(
                    player = %self.name,
                    weapon = %weapon.name,
                    "attack with a weapon not carried"
                );
                format!("{} does not have {} in inventory.", self.name, weapon.name)
            }
        }
    }

    /// Add a weapon. Duplicates are allowed.
    pub fn pick_weapon(&mut self, weapon: Weapon) {
        tracing::debug!(player = %self.name, weapon = %weapon.name, "weapon picked up");
        self.inventory.push(weapon);
    }

    /// Remove the first carried copy of `weapon` and hand it back.
    ///
    /// The copy handed back carries its own wear.
    pub fn drop_item(&mut self, weapon: &Weapon) -> Option<Weapon> {
        match self.position_of(weapon) {
            Some(pos) => Some(self.inventory.remove(pos)),
            None => {
                tracing::debug!(
                    player = %self.name,
                    weapon = %weapon.name,
                    "drop of a weapon not carried"
                );
                None
            }
        }
    }

    /// One-line summary: name, health and carried weapon names.
    pub fn status(&self) -> String {
        let weapons: Vec<&str> = self.inventory.iter().map(|w| w.name.as_str()).collect();
        format!(
            "Player: {}, Health: {}, Weapons: [{}]",
            self.name,
            self.health,
            weapons.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRarity;

    fn sword() -> Weapon {
        Weapon::sword("Traveler's Sword", 5, 20, ItemRarity::Common)
    }

    #[test]
    fn test_default_player() {
        let player = Player::default();
        assert_eq!(player.name, "Link");
        assert_eq!(player.health, 100);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_attack_without_weapon_changes_nothing() {
        let mut player = Player::default();
        let bow = Weapon::bow("Royal Bow", 15, 35, ItemRarity::Rare);
        player.pick_weapon(sword());

        let text = player.attack(&bow);
        assert_eq!(text, "Link does not have Royal Bow in inventory.");
        assert_eq!(bow.durability, 35);
        assert_eq!(bow.arrows(), Some(crate::weapon::DEFAULT_ARROWS));
        assert_eq!(player.inventory()[0].durability, 20);
    }

    #[test]
    fn test_attack_keeps_tracking_worn_weapon() {
        let mut player = Player::default();
        let sword = sword();
        player.pick_weapon(sword.clone());

        player.attack(&sword);
        let text = player.attack(&sword);
        assert_eq!(text, "Traveler's Sword deals 5 damage! (Durability: 18/18)");
    }

    #[test]
    fn test_attack_with_lookalike_weapon_changes_nothing() {
        let mut player = Player::default();
        player.pick_weapon(Weapon::sword("Blade", 5, 20, ItemRarity::Common));
        let lookalike = Weapon::sword("Blade", 99, 1, ItemRarity::Legendary);

        assert!(!player.has_weapon(&lookalike));
        assert_eq!(player.attack(&lookalike), "Link does not have Blade in inventory.");
        assert_eq!(player.inventory()[0].durability, 20);
        assert_eq!(player.drop_item(&lookalike), None);
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn test_drop_returns_worn_copy() {
        let mut player = Player::default();
        let sword = sword();
        player.pick_weapon(sword.clone());
        player.attack(&sword);

        let dropped = player.drop_item(&sword).unwrap();
        assert_eq!(dropped.durability, 19);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_pick_allows_duplicates() {
        let mut player = Player::default();
        player.pick_weapon(sword());
        player.pick_weapon(sword());
        assert_eq!(player.inventory().len(), 2);
        assert_eq!(
            player.status(),
            "Player: Link, Health: 100, Weapons: [Traveler's Sword, Traveler's Sword]"
        );
    }

    #[test]
    fn test_drop_item() {
        let mut player = Player::default();
        player.pick_weapon(sword());
        player.pick_weapon(sword());

        assert_eq!(player.drop_item(&sword()), Some(sword()));
        assert_eq!(player.inventory().len(), 1);

        let shield = Weapon::shield("Pot Lid", 10, 2, ItemRarity::Common);
        assert_eq!(player.drop_item(&shield), None);
        assert_eq!(player.inventory().len(), 1);
    }
}
