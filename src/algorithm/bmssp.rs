use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::base_case::base_case;
use crate::algorithm::pivot_discovery::find_pivots;
use crate::algorithm::state::{Constants, SolverState};
use crate::data_structures::BatchedPriority;
use crate::graph::Graph;
use crate::EPS;

/// The recursive bounded multi-source shortest-path driver. Returns the
/// bound to report to the caller and the set of vertices settled strictly
/// below it.
///
/// `l` is the recursion depth remaining (counting down from
/// [`Constants::l_max`] to zero); `bound` is the exclusive upper bound on
/// tentative distance for this call; `sources` is the seed frontier (a
/// single vertex at `l == 0`).
pub fn bmssp<G: Graph>(
    graph: &G,
    l: usize,
    bound: f64,
    sources: &[usize],
    state: &mut SolverState,
    constants: Constants,
) -> (f64, Vec<usize>) {
    if l == 0 {
        let x = sources[0];
        let result = base_case(graph, bound, x, state, constants.k);
        return (result.bound, result.settled);
    }

    let pivot_result = find_pivots(graph, bound, sources, state, constants.k);
    let pivots = if pivot_result.pivots.is_empty() {
        sources.to_vec()
    } else {
        pivot_result.pivots
    };

    let mut d = BatchedPriority::new(bound, constants.block_size);
    for &p in &pivots {
        d.insert(p, state.dist[p]);
    }

    let loop_guard = constants.k * constants.k * l.max(2);
    let overflow_limit = constants.k * constants.k * l * constants.t;
    let m = (2 * (l - 1) * constants.t).max(1);

    let mut u_set: HashSet<usize> = HashSet::new();
    let mut u_settled: Vec<usize> = Vec::new();
    let mut last_bi_prime = bound;
    let mut overflowed = false;

    while !d.is_empty() && u_settled.len() < loop_guard {
        let (si, bi) = d.pull(m);
        if si.is_empty() {
            break;
        }

        let (bi_prime, ui) = bmssp(graph, l - 1, bi, &si, state, constants);
        last_bi_prime = bi_prime;

        for &u in &ui {
            if u_set.insert(u) {
                u_settled.push(u);
            }
        }

        let mut held_for_batch = Vec::new();
        for &u in &ui {
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = state.dist[u] + weight;
                if candidate <= state.dist[v] + EPS {
                    state.relax(u, v, candidate);
                    if candidate >= bi_prime - EPS && candidate < bi - EPS {
                        d.insert(v, candidate);
                    } else if candidate >= bi - EPS && candidate < bound - EPS {
                        held_for_batch.push((v, candidate));
                    }
                }
            }
        }
        for &s in &si {
            let dist_s = state.dist[s];
            if dist_s >= bi_prime - EPS && dist_s < bi - EPS {
                held_for_batch.push((s, dist_s));
            }
        }
        d.batch_prepend(held_for_batch);

        if u_settled.len() > overflow_limit {
            overflowed = true;
            break;
        }
    }

    let returned_bound = if !overflowed && d.is_empty() {
        bound
    } else {
        last_bi_prime.min(bound)
    };

    for &w_vertex in &pivot_result.w {
        if state.dist[w_vertex] < returned_bound - EPS && u_set.insert(w_vertex) {
            u_settled.push(w_vertex);
        }
    }

    debug!(
        "bmssp(l={l}, bound={bound}): settled {} vertices, returned bound {returned_bound}",
        u_settled.len()
    );
    trace!("bmssp(l={l}): sources={sources:?}, pivots={pivots:?}");
    (returned_bound, u_settled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn base_case_depth_matches_direct_base_case_call() {
        let mut g = DirectedGraph::with_capacity(3);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        let mut state = SolverState::new(3);
        state.dist[0] = 0.0;
        let constants = Constants::with_params(2, 1, 0, 32);

        let (_, settled) = bmssp(&g, 0, f64::INFINITY, &[0], &mut state, constants);
        assert!(settled.contains(&0));
        assert_eq!(state.dist[1], 1.0);
        assert_eq!(state.dist[2], 2.0);
    }

    #[test]
    fn recursive_call_on_small_chain_reaches_every_vertex() {
        let mut g = DirectedGraph::with_capacity(8);
        for v in 0..7 {
            g.add_edge(v, v + 1, 1.0);
        }
        let mut state = SolverState::new(8);
        state.dist[0] = 0.0;
        let constants = Constants::derive(8);

        let (_, settled) = bmssp(
            &g,
            constants.l_max.max(1),
            f64::INFINITY,
            &[0],
            &mut state,
            constants,
        );
        assert!(settled.contains(&0));
        for v in 0..8 {
            assert!(state.dist[v].is_finite());
            assert_eq!(state.dist[v], v as f64);
        }
    }

    #[test]
    fn disconnected_vertex_is_never_settled() {
        let mut g = DirectedGraph::with_capacity(3);
        g.add_edge(0, 1, 1.0);
        let mut state = SolverState::new(3);
        state.dist[0] = 0.0;
        let constants = Constants::derive(3);

        let (_, settled) = bmssp(
            &g,
            constants.l_max.max(1),
            f64::INFINITY,
            &[0],
            &mut state,
            constants,
        );
        assert!(!settled.contains(&2));
        assert!(state.dist[2].is_infinite());
    }
}
