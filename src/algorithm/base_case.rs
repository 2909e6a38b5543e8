use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::algorithm::state::SolverState;
use crate::graph::Graph;
use crate::EPS;

/// The result of a base-case solve: the bound to report upward and the set
/// of vertices settled strictly below it.
pub struct BaseCaseResult {
    pub bound: f64,
    pub settled: Vec<usize>,
}

#[derive(PartialEq)]
struct HeapEntry {
    dist: f64,
    path_len: usize,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.path_len.cmp(&self.path_len))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs a bounded Dijkstra-style exploration from a single vertex `x`,
/// stopping once `k + 1` vertices have been settled or the frontier runs
/// dry within `bound`. Mutates `state` via [`SolverState::relax`].
pub fn base_case<G: Graph>(
    graph: &G,
    bound: f64,
    x: usize,
    state: &mut SolverState,
    k: usize,
) -> BaseCaseResult {
    let cap = k + 1;
    let mut heap = BinaryHeap::new();
    let mut settled = Vec::new();
    let mut done = vec![false; graph.vertex_count()];

    heap.push(HeapEntry {
        dist: state.dist[x],
        path_len: state.path_len[x],
        vertex: x,
    });

    while settled.len() < cap {
        let Some(HeapEntry { dist, vertex, .. }) = heap.pop() else {
            break;
        };
        if done[vertex] || dist >= bound - EPS {
            continue;
        }
        done[vertex] = true;
        settled.push(vertex);

        for (v, weight) in graph.outgoing_edges(vertex) {
            let candidate = state.dist[vertex] + weight;
            if candidate < bound - EPS && state.relax(vertex, v, candidate) {
                heap.push(HeapEntry {
                    dist: state.dist[v],
                    path_len: state.path_len[v],
                    vertex: v,
                });
            }
        }
    }

    let returned_bound = if settled.len() < cap {
        bound
    } else {
        settled
            .iter()
            .map(|&v| state.dist[v])
            .fold(f64::NEG_INFINITY, f64::max)
    };

    let settled = if settled.len() == cap {
        settled
            .into_iter()
            .filter(|&v| state.dist[v] < returned_bound - EPS)
            .collect()
    } else {
        settled
    };

    trace!(
        "base case from x={x}: settled {} vertices, returned bound {returned_bound}",
        settled.len()
    );
    BaseCaseResult {
        bound: returned_bound,
        settled,
    }
}
