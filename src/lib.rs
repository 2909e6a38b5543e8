//! Recursive block-batched single-source shortest path solver.
//!
//! This crate implements the BMSSP algorithm described in "Breaking the
//! Sorting Barrier for Directed Single-Source Shortest Paths" (Duan et al.,
//! 2025): a deterministic solver for directed graphs with non-negative real
//! edge weights that partitions tentative distances into bounded bands and
//! processes them with a buffered priority structure instead of a global
//! heap.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::dijkstra::Dijkstra;
pub use algorithm::solver::Solver;
pub use graph::directed::DirectedGraph;
pub use graph::traits::{Graph, MutableGraph};

/// Numeric tolerance governing all equality comparisons on tentative
/// distances. A candidate distance is a strict improvement only if
/// `candidate + EPS < current`.
pub const EPS: f64 = 1e-12;

/// Wider tolerance used only when judging whether a record pulled out of
/// [`data_structures::BatchedPriority`] is stale. Deliberately looser than
/// [`EPS`] to tolerate accumulated rounding across many relaxations.
pub const PULL_STALE_EPS: f64 = 1e-9;

/// Errors surfaced at the boundary of a solve, before any recursive work
/// begins. The recursive driver itself is infallible once these
/// preconditions hold.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("source vertex {0} is out of range for a graph with {1} vertices")]
    SourceNotFound(usize, usize),

    #[error("negative edge weight {0} is not supported")]
    NegativeWeight(f64),
}

/// Result type for the library's boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
