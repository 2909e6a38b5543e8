use log::info;

use crate::algorithm::bmssp::bmssp;
use crate::algorithm::state::{Constants, SolverState};
use crate::graph::Graph;
use crate::{Error, Result};

/// Entry point for a solve: validates a graph once, then answers
/// single-source distance queries against it via the recursive driver.
pub struct Solver<G: Graph> {
    graph: G,
    constants: Constants,
}

impl<G: Graph> Solver<G> {
    /// Validates that every edge weight is non-negative and derives the
    /// recursion constants for this graph's size.
    pub fn new(graph: G) -> Result<Self> {
        for u in 0..graph.vertex_count() {
            for (_, weight) in graph.outgoing_edges(u) {
                if weight < 0.0 {
                    return Err(Error::NegativeWeight(weight));
                }
            }
        }
        let constants = Constants::derive(graph.vertex_count().max(2));
        Ok(Solver { graph, constants })
    }

    /// Computes shortest distances from `source` to every vertex.
    /// Unreachable vertices carry `f64::INFINITY`.
    pub fn solve(&self, source: usize) -> Result<Vec<f64>> {
        if !self.graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source, self.graph.vertex_count()));
        }

        let n = self.graph.vertex_count();
        let mut state = SolverState::new(n);
        state.dist[source] = 0.0;
        state.path_len[source] = 1;

        info!(
            "solving from source={source} over {n} vertices (k={}, t={}, l_max={})",
            self.constants.k, self.constants.t, self.constants.l_max
        );
        bmssp(
            &self.graph,
            self.constants.l_max,
            f64::INFINITY,
            &[source],
            &mut state,
            self.constants,
        );
        Ok(state.dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn solve_matches_dijkstra_on_a_diamond() {
        let mut g = DirectedGraph::with_capacity(4);
        g.add_edge(0, 1, 1.0);
        g.add_edge(0, 2, 4.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g.add_edge(1, 3, 5.0);

        let solver = Solver::new(g.clone()).unwrap();
        let distances = solver.solve(0).unwrap();
        let baseline = crate::Dijkstra::new().solve(&g, 0).unwrap();

        for i in 0..distances.len() {
            assert!((distances[i] - baseline[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn negative_weight_is_rejected_at_construction() {
        let mut g = DirectedGraph::with_capacity(2);
        g.add_edge(0, 1, -1.0);
        let result = Solver::new(g);
        assert!(matches!(result, Err(Error::NegativeWeight(_))));
    }

    #[test]
    fn out_of_range_source_is_rejected_at_solve_time() {
        let g = DirectedGraph::with_capacity(2);
        let solver = Solver::new(g).unwrap();
        let result = solver.solve(5);
        assert!(matches!(result, Err(Error::SourceNotFound(5, 2))));
    }

    #[test]
    fn unreachable_vertex_is_infinite() {
        let mut g = DirectedGraph::with_capacity(3);
        g.add_edge(0, 1, 1.0);
        let solver = Solver::new(g).unwrap();
        let distances = solver.solve(0).unwrap();
        assert!(distances[2].is_infinite());
    }
}
