//! Graph traversal and path-search algorithms
//!
//! Traversals (`bft`, `dft`, `dft_recursive`) report every vertex reachable
//! from a start vertex exactly once, either through a caller-supplied
//! visitor or collected into a `Vec`. Searches (`bfs`, `dfs`,
//! `dfs_recursive`) return a path between two vertices, or `None` when the
//! destination is unreachable.

use crate::container::{Queue, Stack};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// An ordered vertex sequence from a start vertex to a destination
pub type Path<V> = Vec<V>;

impl<V: VertexId> Graph<V> {
    /// Breadth-first traversal from `start`, returning the visit order.
    ///
    /// Vertices are visited in non-decreasing distance from `start`; the
    /// order among vertices of equal distance is unspecified.
    pub fn bft(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        self.bft_visit(start, |v| order.push(v.clone()))?;
        Ok(order)
    }

    /// Breadth-first traversal driving a visitor.
    ///
    /// `visit` is invoked exactly once per reachable vertex, at the moment
    /// it is first marked visited.
    pub fn bft_visit<F>(&self, start: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.require_vertex(start)?;

        let mut queue = Queue::new();
        queue.enqueue(start.clone());

        let mut visited: HashSet<V> = HashSet::new();

        while queue.size() > 0 {
            let current = queue.dequeue()?;

            // Visited is checked at dequeue time, so the queue may
            // transiently hold duplicate entries; each vertex is still
            // reported exactly once.
            if visited.contains(&current) {
                continue;
            }
            visited.insert(current.clone());
            visit(&current);

            for neighbor in self.get_neighbors(&current)? {
                queue.enqueue(neighbor.clone());
            }
        }

        tracing::debug!("BFT from {:?} visited {} vertices", start, visited.len());
        Ok(())
    }

    /// Iterative depth-first traversal from `start`, returning the visit
    /// order.
    pub fn dft(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        self.dft_visit(start, |v| order.push(v.clone()))?;
        Ok(order)
    }

    /// Iterative depth-first traversal driving a visitor.
    pub fn dft_visit<F>(&self, start: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.require_vertex(start)?;

        let mut stack = Stack::new();
        stack.push(start.clone());

        // Unlike BFT, vertices are marked visited when pushed.
        let mut visited: HashSet<V> = HashSet::new();
        visited.insert(start.clone());

        while stack.size() > 0 {
            let current = stack.pop()?;
            visit(&current);

            for neighbor in self.get_neighbors(&current)? {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    stack.push(neighbor.clone());
                }
            }
        }

        tracing::debug!("DFT from {:?} visited {} vertices", start, visited.len());
        Ok(())
    }

    /// Recursive depth-first traversal from `start`, returning the visit
    /// order.
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        self.dft_recursive_visit(start, |v| order.push(v.clone()))?;
        Ok(order)
    }

    /// Recursive depth-first traversal driving a visitor.
    ///
    /// One visited set is shared across the whole recursive call tree, so
    /// every branch observes every other branch's visits.
    pub fn dft_recursive_visit<F>(&self, start: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.require_vertex(start)?;

        let mut visited: HashSet<V> = HashSet::new();
        self.dft_descend(start, &mut visited, &mut visit)
    }

    fn dft_descend<F>(&self, current: &V, visited: &mut HashSet<V>, visit: &mut F) -> Result<()>
    where
        F: FnMut(&V),
    {
        visited.insert(current.clone());
        visit(current);

        for neighbor in self.get_neighbors(current)? {
            if !visited.contains(neighbor) {
                self.dft_descend(neighbor, visited, visit)?;
            }
        }
        Ok(())
    }

    /// Breadth-first search for the shortest path from `start` to `dest`.
    ///
    /// Returns the path with the fewest edges, start-to-destination
    /// inclusive, or `None` when `dest` is unreachable. The frontier holds
    /// partial paths; the first path to reach `dest` is shortest because
    /// the queue explores paths in non-decreasing length.
    pub fn bfs(&self, start: &V, dest: &V) -> Result<Option<Path<V>>> {
        self.require_vertex(start)?;

        let mut queue: Queue<(V, Path<V>)> = Queue::new();
        queue.enqueue((start.clone(), vec![start.clone()]));

        // Marked at enqueue time; a cyclic graph cannot re-enqueue
        // ever-longer paths through a cycle.
        let mut visited: HashSet<V> = HashSet::new();
        visited.insert(start.clone());

        while queue.size() > 0 {
            let (current, path) = queue.dequeue()?;

            if current == *dest {
                tracing::debug!("BFS found path of {} edges to {:?}", path.len() - 1, dest);
                return Ok(Some(path));
            }

            for neighbor in self.get_neighbors(&current)? {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    // Each frontier entry owns its own copy of the path
                    let mut next_path = path.clone();
                    next_path.push(neighbor.clone());
                    queue.enqueue((neighbor.clone(), next_path));
                }
            }
        }

        tracing::debug!("BFS exhausted frontier, {:?} unreachable", dest);
        Ok(None)
    }

    /// Iterative depth-first search for a path from `start` to `dest`.
    ///
    /// Returns some valid path, not necessarily the shortest, or `None`
    /// when `dest` is unreachable.
    pub fn dfs(&self, start: &V, dest: &V) -> Result<Option<Path<V>>> {
        self.require_vertex(start)?;

        let mut stack: Stack<(V, Path<V>)> = Stack::new();
        stack.push((start.clone(), vec![start.clone()]));

        let mut visited: HashSet<V> = HashSet::new();
        visited.insert(start.clone());

        while stack.size() > 0 {
            let (current, path) = stack.pop()?;

            if current == *dest {
                tracing::debug!("DFS found path of {} edges to {:?}", path.len() - 1, dest);
                return Ok(Some(path));
            }

            for neighbor in self.get_neighbors(&current)? {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    let mut next_path = path.clone();
                    next_path.push(neighbor.clone());
                    stack.push((neighbor.clone(), next_path));
                }
            }
        }

        tracing::debug!("DFS exhausted frontier, {:?} unreachable", dest);
        Ok(None)
    }

    /// Recursive depth-first search for a path from `start` to `dest`.
    ///
    /// The visited set is shared across the recursive call tree, so the
    /// search terminates on any finite graph, cycles included. The
    /// accumulated path is extended per call, never shared. Returns the
    /// first path found, or `None` after exhausting every branch.
    pub fn dfs_recursive(&self, start: &V, dest: &V) -> Result<Option<Path<V>>> {
        self.require_vertex(start)?;

        let mut visited: HashSet<V> = HashSet::new();
        let found = self.dfs_descend(start, dest, &mut visited, Vec::new())?;
        if found.is_none() {
            tracing::debug!("Recursive DFS exhausted, {:?} unreachable", dest);
        }
        Ok(found)
    }

    fn dfs_descend(
        &self,
        current: &V,
        dest: &V,
        visited: &mut HashSet<V>,
        path: Path<V>,
    ) -> Result<Option<Path<V>>> {
        visited.insert(current.clone());

        let mut path = path;
        path.push(current.clone());

        if current == dest {
            return Ok(Some(path));
        }

        for neighbor in self.get_neighbors(current)? {
            if !visited.contains(neighbor) {
                if let Some(found) = self.dfs_descend(neighbor, dest, visited, path.clone())? {
                    return Ok(Some(found));
                }
            }
        }
        Ok(None)
    }

    fn require_vertex(&self, id: &V) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(Error::NonexistentVertex(format!("{id:?}")))
        }
    }
}
