use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::algorithm::state::SolverState;
use crate::graph::Graph;
use crate::EPS;

/// The result of one pivot-discovery pass: the reachable frontier `W` and
/// the pivot subset `P` of the seed set `S`.
pub struct PivotResult {
    pub w: Vec<usize>,
    pub pivots: Vec<usize>,
}

/// Runs `k` rounds of bounded Bellman-Ford-like frontier expansion from
/// `sources`, then selects as pivots the sources whose tight-edge subtree
/// within the discovered frontier has size at least `k`.
///
/// `sources` must each have a finite `state.dist` strictly less than
/// `bound`. May update `state.dist` / `pred` / `path_len` in place via
/// [`SolverState::relax`].
pub fn find_pivots<G: Graph>(
    graph: &G,
    bound: f64,
    sources: &[usize],
    state: &mut SolverState,
    k: usize,
) -> PivotResult {
    let mut in_w: HashSet<usize> = sources.iter().copied().collect();
    let mut w: Vec<usize> = sources.to_vec();
    let mut frontier: VecDeque<usize> = sources.iter().copied().collect();

    let mut step = 0;
    let mut blew_up = false;
    while step < k && !frontier.is_empty() {
        let level_size = frontier.len();
        for _ in 0..level_size {
            let u = frontier.pop_front().unwrap();
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = state.dist[u] + weight;
                if candidate <= state.dist[v] + EPS {
                    state.relax(u, v, candidate);
                    if candidate < bound - EPS && in_w.insert(v) {
                        w.push(v);
                        frontier.push_back(v);
                    }
                }
            }
        }
        step += 1;
        if w.len() > k * sources.len().max(1) {
            blew_up = true;
            break;
        }
    }

    if blew_up {
        trace!("pivot discovery: frontier blew up past k*|S|, using S as pivots");
        return PivotResult {
            w,
            pivots: sources.to_vec(),
        };
    }

    let source_set: HashSet<usize> = sources.iter().copied().collect();
    let mut tree_size: std::collections::HashMap<usize, usize> =
        sources.iter().map(|&s| (s, 1usize)).collect();

    for &v in &w {
        if source_set.contains(&v) {
            continue;
        }
        // Walk the predecessor chain (which only ever records EPS-tight
        // edges, by construction of `relax`) up to its root in `S`. The
        // chain length is bounded by the number of expansion steps taken
        // above, so this is iterative and bounded rather than recursive.
        let mut current = v;
        let mut steps_taken = 0;
        loop {
            match state.pred[current] {
                Some(parent) if in_w.contains(&parent) && steps_taken <= k => {
                    if source_set.contains(&parent) {
                        *tree_size.entry(parent).or_insert(0) += 1;
                        break;
                    }
                    current = parent;
                    steps_taken += 1;
                }
                _ => break,
            }
        }
    }

    let pivots: Vec<usize> = sources
        .iter()
        .copied()
        .filter(|s| tree_size.get(s).copied().unwrap_or(0) >= k)
        .collect();

    trace!(
        "pivot discovery: |S|={}, |W|={}, |P|={}",
        sources.len(),
        w.len(),
        pivots.len()
    );
    PivotResult { w, pivots }
}
