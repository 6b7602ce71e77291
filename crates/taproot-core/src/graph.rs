//! Directed-graph storage and edge operations

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Requirements on vertex identifiers.
///
/// Blanket-implemented, so any opaque, comparable, hashable key works as a
/// vertex id: integers, strings, newtype ids.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexId for T {}

/// Directed graph mapping each vertex to its outgoing-neighbor set
///
/// Edges are directed: an edge `a -> b` does not imply `b -> a`. Neighbor
/// sets carry no duplicates and no meaningful order. Every neighbor is
/// itself a registered vertex, enforced at edge-creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<V: VertexId> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Build a graph from an edge list, registering both endpoints of
    /// every edge
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.vertices.entry(to.clone()).or_default();
            graph.vertices.entry(from).or_default().insert(to);
        }
        graph
    }

    /// Register a vertex with an empty outgoing-neighbor set.
    ///
    /// Re-adding an existing vertex resets its neighbor set to empty.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.insert(id, HashSet::new());
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Fails with [`Error::NonexistentVertex`] when either endpoint is
    /// missing, leaving the graph unchanged.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        if !self.vertices.contains_key(&to) {
            return Err(Error::NonexistentVertex(format!("{to:?}")));
        }
        match self.vertices.get_mut(&from) {
            Some(neighbors) => {
                neighbors.insert(to);
                Ok(())
            }
            None => Err(Error::NonexistentVertex(format!("{from:?}"))),
        }
    }

    /// Get the outgoing-neighbor set of a vertex.
    ///
    /// Iteration order of the returned set is unspecified.
    pub fn get_neighbors(&self, id: &V) -> Result<&HashSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| Error::VertexNotFound(format!("{id:?}")))
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Number of registered vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all registered vertices, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId + Serialize> Graph<V> {
    /// Serialize the adjacency structure to a JSON snapshot
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V: VertexId + DeserializeOwned> Graph<V> {
    /// Restore a graph from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_starts_empty() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        assert!(graph.contains_vertex(&1));
        assert!(graph.get_neighbors(&1).unwrap().is_empty());
    }

    #[test]
    fn test_add_vertex_overwrite_resets_neighbors() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.edge_count(), 1);

        graph.add_vertex(1);
        assert!(graph.get_neighbors(&1).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge("a", "b").unwrap();

        assert!(graph.get_neighbors(&"a").unwrap().contains(&"b"));
        // Directed: no reverse edge
        assert!(graph.get_neighbors(&"b").unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_is_set_insert() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        assert!(matches!(
            graph.add_edge(1, 9),
            Err(Error::NonexistentVertex(_))
        ));
        assert!(matches!(
            graph.add_edge(9, 1),
            Err(Error::NonexistentVertex(_))
        ));
        // Failed calls leave the graph unchanged
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_neighbors(&1).unwrap().is_empty());
    }

    #[test]
    fn test_get_neighbors_unknown_vertex() {
        let graph: Graph<i32> = Graph::new();
        assert!(matches!(
            graph.get_neighbors(&7),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_from_edges_registers_endpoints() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (1, 3)]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let neighbors = graph.get_neighbors(&1).unwrap();
        assert_eq!(neighbors, &HashSet::from([2, 3]));
    }

    #[test]
    fn test_counts() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(3);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(3, 1).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let mut ids: Vec<i32> = graph.vertices().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_json_snapshot_through_file() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        let json = graph.to_json().unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), &json).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();

        let restored: Graph<i32> = Graph::from_json(&contents).unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Graph::<i32>::from_json("not json"),
            Err(Error::Serialization(_))
        ));
    }
}
