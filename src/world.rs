//! World module.
//!
//! The [`World`] owns every room in insertion order and wires exits between
//! them. [`build_world`] assembles the starting adventure.
//!
//! Starting map:
//!
//! ```text
//! [Ancient Forest] --north--> [Dark Cave] --east--> [Abandoned Hyrule Castle]
//!                  <--south--             <--west--
//! ```

use crate::error::GameError;
use crate::factory::{CommonItemFactory, ItemFactory, RareItemFactory};
use crate::monster::{BlueVariant, Monster, RedVariant};
use crate::room::{Room, RoomId};
use std::sync::Arc;

/// Name of the entry room of [`build_world`].
pub const ANCIENT_FOREST: &str = "Ancient Forest";
pub const DARK_CAVE: &str = "Dark Cave";
pub const HYRULE_CASTLE: &str = "Abandoned Hyrule Castle";

/// An arena of rooms. Rooms are never removed, so ids stay valid for the
/// lifetime of the world.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::{Room, World};
///
/// let mut world = World::new();
/// let hall = world.add_room(Room::new("Hall"));
/// let yard = world.add_room(Room::new("Yard"));
/// world.connect(hall, "out", yard).unwrap();
///
/// assert_eq!(world.neighbor(hall, "out"), Some(yard));
/// assert_eq!(world.neighbor(yard, "in"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// An empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `room` and return its id.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = RoomId::from_index(self.rooms.len());
        tracing::debug!(room = %room.name, %id, "room added");
        self.rooms.push(room);
        id
    }

    /// The room behind `id`, or `None` for an id from another world.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Mutable access to the room behind `id`.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    fn require(&self, id: RoomId) -> Result<&Room, GameError> {
        self.room(id).ok_or(GameError::UnknownRoom(id))
    }

    /// All rooms, entry room first.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Ids of every room, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(RoomId::from_index)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The first room added.
    pub fn entry(&self) -> Option<RoomId> {
        (!self.rooms.is_empty()).then(|| RoomId::from_index(0))
    }

    /// First room with the given name.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId::from_index)
    }

    /// Install a one-way exit from `from` to `to`.
    ///
    /// Re-connecting a direction replaces its target. Fails with
    /// [`GameError::UnknownRoom`] when either id is not from this world.
    pub fn connect(
        &mut self,
        from: RoomId,
        direction: impl Into<String>,
        to: RoomId,
    ) -> Result<(), GameError> {
        self.require(to)?;
        let direction = direction.into();
        let room = self
            .room_mut(from)
            .ok_or(GameError::UnknownRoom(from))?;

        if let Some(previous) = room.connect(direction.clone(), to) {
            tracing::debug!(%from, %direction, %previous, %to, "exit replaced");
        } else {
            tracing::debug!(%from, %direction, %to, "exit added");
        }
        Ok(())
    }

    /// Install exits both ways, `a -direction-> b` and `b -back-> a`.
    pub fn connect_both(
        &mut self,
        a: RoomId,
        direction: impl Into<String>,
        b: RoomId,
        back: impl Into<String>,
    ) -> Result<(), GameError> {
        self.connect(a, direction, b)?;
        self.connect(b, back, a)
    }

    /// Room reached from `from` by going `direction`.
    pub fn neighbor(&self, from: RoomId, direction: &str) -> Option<RoomId> {
        self.room(from)?.exit(direction)
    }

    /// Detail block of a room, with exit targets named.
    pub fn describe(&self, id: RoomId) -> Result<String, GameError> {
        Ok(self.require(id)?.details(self))
    }
}

/// Assemble the starting adventure.
///
/// Every call builds a fresh world. Rooms come back in a fixed order:
/// Ancient Forest (entry), Dark Cave, Abandoned Hyrule Castle.
pub fn build_world() -> World {
    let common = CommonItemFactory;
    let rare = RareItemFactory;

    let mut forest = Room::new(ANCIENT_FOREST);
    forest
        .add_item(common.create_weapon())
        .add_item(common.create_key());

    let mut cave = Room::new(DARK_CAVE);
    cave.add_item(rare.create_potion())
        .add_monster(Monster::bokoblin(Arc::new(RedVariant)));

    let mut castle = Room::new(HYRULE_CASTLE);
    castle
        .add_item(rare.create_weapon())
        .add_monster(Monster::moblin(Arc::new(BlueVariant)));

    let mut world = World::new();
    let forest = world.add_room(forest);
    let cave = world.add_room(cave);
    let castle = world.add_room(castle);

    for (a, direction, b, back) in [
        (forest, "north", cave, "south"),
        (cave, "east", castle, "west"),
    ] {
        if let Err(e) = world.connect_both(a, direction, b, back) {
            tracing::warn!(error = %e, "starting exit not installed");
        }
    }

    tracing::info!(rooms = world.len(), "world assembled");
    world
}
