//! MinPQ - mutable-priority minimum queues
//!
//! This library provides two interchangeable implementations of the [`MinPQ`]
//! contract: a naive [`UnsortedArrayMinPQ`] baseline and an
//! [`IndexedBinaryHeapMinPQ`] that supports O(log n) insertion, minimum
//! extraction and in-place priority changes through a reverse element-to-slot index.
//!
//! A small graph-search consumer ([`Dijkstra`]) shows how the contract is used
//! for decrease-key style shortest path computations.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathResult};
pub use data_structures::{IndexedBinaryHeapMinPQ, MinPQ, UnsortedArrayMinPQ};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Already contains element: {0}")]
    DuplicateElement(String),

    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Invalid priority: {0}")]
    InvalidPriority(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Heap invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
