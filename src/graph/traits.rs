/// A weighted directed graph over the vertex range `[0, vertex_count())`.
///
/// Edge weights are non-negative reals; this is a caller contract, not
/// something every implementation enforces at runtime. A graph is
/// immutable from the solver's point of view once a solve begins.
pub trait Graph {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing `(target, weight)` edges of a
    /// vertex, in the order they were added.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_>;

    /// Returns true if `vertex` is within the graph's vertex range.
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there is at least one edge from `from` to `to`.
    fn has_edge(&self, from: usize, to: usize) -> bool;
}

/// Trait for constructing a graph before a solve begins.
pub trait MutableGraph: Graph {
    /// Adds a vertex to the graph and returns its id.
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge `from -> to` with the given weight.
    ///
    /// No deduplication is performed: parallel edges between the same pair
    /// of vertices are permitted, and each is relaxed independently.
    fn add_edge(&mut self, from: usize, to: usize, weight: f64);
}
