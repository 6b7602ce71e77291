//! Taproot Core - In-memory directed-graph engine
//!
//! This crate provides the graph data structure and the classic
//! breadth-first / depth-first traversal and path-search algorithms for
//! the Taproot graph toolkit.

pub mod container;
pub mod error;
pub mod graph;
pub mod traversal;

pub use container::{Queue, Stack};
pub use error::{Error, Result};
pub use graph::{Graph, VertexId};
pub use traversal::Path;
