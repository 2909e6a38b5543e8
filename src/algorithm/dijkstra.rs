use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Textbook Dijkstra's algorithm, kept as an independent correctness
/// baseline for the recursive driver — not part of the solver's own
/// algorithm, and never on its hot path.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest distances from `source` to every vertex, using
    /// `f64::INFINITY` for unreachable vertices.
    pub fn solve<G: Graph>(&self, graph: &G, source: usize) -> Result<Vec<f64>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source, graph.vertex_count()));
        }

        let n = graph.vertex_count();
        let mut distances = vec![f64::INFINITY; n];
        distances[source] = 0.0;

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, 0.0);

        while let Some((u, dist_u)) = queue.pop() {
            if dist_u > distances[u] {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < 0.0 {
                    return Err(Error::NegativeWeight(weight));
                }
                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    queue.push(v, candidate);
                }
            }
        }

        Ok(distances)
    }
}
