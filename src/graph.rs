//! World graph module.
//!
//! Provides the `WorldGraph` type, a read-only petgraph view of a
//! [`World`](crate::World) used for travel queries: shortest routes,
//! reachability and one-way links. The view is a snapshot; rebuild it after
//! changing exits.

use crate::room::RoomId;
use crate::world::World;
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

/// A directed graph of rooms. Nodes are room ids, edges are exits labelled
/// with their direction.
///
/// # Examples
///
/// ```rust
/// use hyrule_world::graph::WorldGraph;
/// use hyrule_world::world::{build_world, ANCIENT_FOREST, HYRULE_CASTLE};
///
/// let world = build_world();
/// let graph = WorldGraph::from_world(&world);
/// let forest = world.find(ANCIENT_FOREST).unwrap();
/// let castle = world.find(HYRULE_CASTLE).unwrap();
///
/// let route = graph.route(forest, castle).unwrap();
/// assert_eq!(route, vec!["north", "east"]);
/// ```
pub struct WorldGraph {
    graph: DiGraph<RoomId, String>,
}

impl WorldGraph {
    /// Build the graph from the world's current exits.
    ///
    /// Node `i` is room `i`, so ids translate directly.
    pub fn from_world(world: &World) -> Self {
        let mut graph = DiGraph::with_capacity(world.len(), 0);
        for id in world.ids() {
            graph.add_node(id);
        }

        for (index, room) in world.rooms().iter().enumerate() {
            let from = NodeIndex::new(index);
            for exit in room.exits() {
                if exit.target.index() < world.len() {
                    let to = NodeIndex::new(exit.target.index());
                    graph.add_edge(from, to, exit.direction.clone());
                }
            }
        }

        Self { graph }
    }

    fn node(&self, id: RoomId) -> Option<NodeIndex> {
        (id.index() < self.graph.node_count()).then(|| NodeIndex::new(id.index()))
    }

    pub fn room_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn exit_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Shortest sequence of directions leading from `from` to `to`.
    ///
    /// Returns an empty route when `from == to` and `None` when `to` cannot
    /// be reached.
    pub fn route(&self, from: RoomId, to: RoomId) -> Option<Vec<String>> {
        let start = self.node(from)?;
        let goal = self.node(to)?;

        let (_, path) = astar(&self.graph, start, |n| n == goal, |_| 1usize, |_| 0)?;

        path.windows(2)
            .map(|step| {
                self.graph
                    .find_edge(step[0], step[1])
                    .map(|edge| self.graph[edge].clone())
            })
            .collect()
    }

    /// Rooms reachable from `from`, including `from`, in breadth-first order.
    pub fn reachable(&self, from: RoomId) -> Vec<RoomId> {
        let Some(start) = self.node(from) else {
            return Vec::new();
        };

        let mut bfs = Bfs::new(&self.graph, start);
        let mut rooms = Vec::new();
        while let Some(node) = bfs.next(&self.graph) {
            rooms.push(self.graph[node]);
        }
        rooms
    }

    /// Exits with no exit leading straight back, as `(from, direction, to)`.
    pub fn one_way_links(&self) -> Vec<(RoomId, String, RoomId)> {
        self.graph
            .raw_edges()
            .iter()
            .filter(|edge| self.graph.find_edge(edge.target(), edge.source()).is_none())
            .map(|edge| {
                (
                    self.graph[edge.source()],
                    edge.weight.clone(),
                    self.graph[edge.target()],
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    fn line() -> (World, RoomId, RoomId, RoomId) {
        let mut world = World::new();
        let a = world.add_room(Room::new("A"));
        let b = world.add_room(Room::new("B"));
        let c = world.add_room(Room::new("C"));
        world.connect(a, "east", b).unwrap();
        world.connect(b, "east", c).unwrap();
        world.connect(b, "west", a).unwrap();
        (world, a, b, c)
    }

    #[test]
    fn test_graph_mirrors_world() {
        let (world, ..) = line();
        let graph = WorldGraph::from_world(&world);
        assert_eq!(graph.room_count(), 3);
        assert_eq!(graph.exit_count(), 3);
    }

    #[test]
    fn test_route_follows_directions() {
        let (world, a, b, c) = line();
        let graph = WorldGraph::from_world(&world);

        assert_eq!(
            graph.route(a, c),
            Some(vec!["east".to_string(), "east".to_string()])
        );
        assert_eq!(graph.route(b, b), Some(Vec::new()));
        // No way back from C
        assert_eq!(graph.route(c, a), None);
    }

    #[test]
    fn test_reachable_includes_start() {
        let (world, a, b, c) = line();
        let graph = WorldGraph::from_world(&world);

        assert_eq!(graph.reachable(a), vec![a, b, c]);
        assert_eq!(graph.reachable(c), vec![c]);
        assert!(graph.reachable(RoomId::from_index(42)).is_empty());
    }

    #[test]
    fn test_one_way_links() {
        let (world, _, b, c) = line();
        let graph = WorldGraph::from_world(&world);
        assert_eq!(graph.one_way_links(), vec![(b, "east".to_string(), c)]);
    }

    #[test]
    fn test_snapshot_ignores_later_exits() {
        let (mut world, a, _, c) = line();
        let graph = WorldGraph::from_world(&world);
        world.connect(c, "home", a).unwrap();

        assert_eq!(graph.route(c, a), None);
        assert!(WorldGraph::from_world(&world).route(c, a).is_some());
    }
}
