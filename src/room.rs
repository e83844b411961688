//! Room module.
//!
//! A room holds items and monsters and a list of named, directed exits to
//! other rooms. Exits are one-way: a link back has to be added explicitly.
//! Rooms refer to each other through [`RoomId`]s handed out by the owning
//! [`World`].

use crate::item::Item;
use crate::monster::Monster;
use crate::world::World;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a room inside a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(usize);

impl RoomId {
    /// Id of the room at `index` in its world's insertion order.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the room in its world.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named, directed link to another room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Free-form direction label such as `north`.
    pub direction: String,
    pub target: RoomId,
}

/// A location in the world.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub items: Vec<Item>,
    pub monsters: Vec<Monster>,
    exits: Vec<Exit>,
}

impl Room {
    /// An empty room with no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            monsters: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Place an item in the room, after any already there.
    pub fn add_item(&mut self, item: impl Into<Item>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Add a monster to the room.
    pub fn add_monster(&mut self, monster: Monster) -> &mut Self {
        self.monsters.push(monster);
        self
    }

    /// Remove the first item equal to `item`. Absent items are left alone.
    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let pos = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(pos))
    }

    /// Point the exit for `direction` at `target`.
    ///
    /// Re-connecting a direction replaces its target in place and returns
    /// the previous one; the exit keeps its original position in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hyrule_world::{Room, RoomId};
    ///
    /// let mut hall = Room::new("Hall");
    /// let a = RoomId::from_index(1);
    /// let b = RoomId::from_index(2);
    ///
    /// assert_eq!(hall.connect("north", a), None);
    /// assert_eq!(hall.connect("north", b), Some(a));
    /// assert_eq!(hall.exit("north"), Some(b));
    /// assert_eq!(hall.exits().len(), 1);
    /// ```
    pub fn connect(&mut self, direction: impl Into<String>, target: RoomId) -> Option<RoomId> {
        let direction = direction.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => Some(std::mem::replace(&mut exit.target, target)),
            None => {
                self.exits.push(Exit { direction, target });
                None
            }
        }
    }

    /// Target of the exit for `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    /// Exits in the order their directions were first connected.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Plain-text detail block.
    ///
    /// Field order is name, items, monsters, connections. The item and
    /// monster sections are omitted when empty; the connections header is
    /// always present. Exit targets are named through `world`.
    pub fn details(&self, world: &World) -> String {
        let mut details = format!("{}\n", self.name);

        if !self.items.is_empty() {
            details.push_str("Items in the room:\n");
            for item in &self.items {
                details.push_str(&format!(" - {}\n", item));
            }
        }

        if !self.monsters.is_empty() {
            details.push_str("Monsters in the room:\n");
            for monster in &self.monsters {
                details.push_str(&format!(" - {}\n", monster.stats()));
            }
        }

        details.push_str("Connections:\n");
        for exit in &self.exits {
            let target = world
                .room(exit.target)
                .map(|room| room.name.as_str())
                .unwrap_or("?");
            details.push_str(&format!(" - {}: {}\n", exit.direction, target));
        }

        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemRarity, Key};
    use crate::monster::{Monster, RedVariant};
    use std::sync::Arc;

    #[test]
    fn test_connect_is_last_write_wins() {
        let mut room = Room::new("Crossroads");
        let a = RoomId::from_index(1);
        let b = RoomId::from_index(2);
        room.connect("east", a);
        room.connect("west", a);
        room.connect("east", b);

        assert_eq!(room.exit("east"), Some(b));
        let directions: Vec<&str> = room.exits().iter().map(|e| e.direction.as_str()).collect();
        assert_eq!(directions, vec!["east", "west"]);
    }

    #[test]
    fn test_missing_exit() {
        let room = Room::new("Dead End");
        assert_eq!(room.exit("up"), None);
        assert!(room.exits().is_empty());
    }

    #[test]
    fn test_remove_item_takes_first_match_only() {
        let key = Key::new("Old Key", ItemRarity::Common);
        let mut room = Room::new("Vault");
        room.add_item(key.clone()).add_item(key.clone());

        assert_eq!(room.remove_item(&key.clone().into()), Some(key.into()));
        assert_eq!(room.items.len(), 1);

        let absent: Item = Key::new("Nope", ItemRarity::Rare).into();
        assert_eq!(room.remove_item(&absent), None);
        assert_eq!(room.items.len(), 1);
    }

    #[test]
    fn test_details_sections() {
        let mut world = World::new();
        let cave = world.add_room(Room::new("Cave"));
        let mut room = Room::new("Gate");
        room.add_item(Key::new("Old Key", ItemRarity::Common));
        room.add_monster(Monster::bokoblin(Arc::new(RedVariant)));
        room.connect("down", cave);

        assert_eq!(
            room.details(&world),
            "Gate\n\
             Items in the room:\n \
             - [common] Old Key\n\
             Monsters in the room:\n \
             - Bokoblin (red) - HP: 50\n\
             Connections:\n \
             - down: Cave\n"
        );
    }

    #[test]
    fn test_details_of_empty_room() {
        let world = World::new();
        assert_eq!(Room::new("Void").details(&world), "Void\nConnections:\n");
    }
}
