use log::trace;

use crate::EPS;

/// Structural parameters derived once from the vertex count: `k` bounds
/// frontier width and base-case size, `t` bounds band width and the
/// per-level pull size, `l_max` bounds recursion depth, `block_size` sizes
/// each level's [`crate::data_structures::BatchedPriority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constants {
    pub k: usize,
    pub t: usize,
    pub l_max: usize,
    pub block_size: usize,
}

impl Constants {
    /// Derives `(k, t, l_max, block_size)` from `n` following the data
    /// model: with `l = max(2, ln n)`, `k = max(2, floor(l^(1/3)))`,
    /// `t = max(1, floor(l^(2/3)))`,
    /// `l_max = max(0, ceil(ln(max(2, n)) / max(1, t)))`,
    /// `block_size = max(32, floor((ln n)^(2/3)))`.
    pub fn derive(n: usize) -> Self {
        let l = (n as f64).ln().max(2.0);
        let k = (l.powf(1.0 / 3.0).floor() as usize).max(2);
        let t = (l.powf(2.0 / 3.0).floor() as usize).max(1);
        let ln_n = (n.max(2) as f64).ln();
        let l_max = ((ln_n / (t.max(1) as f64)).ceil() as usize).max(0);
        let block_size = (ln_n.powf(2.0 / 3.0).floor() as usize).max(32);
        trace!(
            "derived constants for n={n}: k={k}, t={t}, l_max={l_max}, block_size={block_size}"
        );
        Constants {
            k,
            t,
            l_max,
            block_size,
        }
    }

    /// Builds constants from explicit values instead of deriving them,
    /// mirroring the `new` / `new_with_params` split used elsewhere in
    /// this crate for constructors with a sensible default.
    pub fn with_params(k: usize, t: usize, l_max: usize, block_size: usize) -> Self {
        Constants {
            k: k.max(2),
            t: t.max(1),
            l_max,
            block_size: block_size.max(32),
        }
    }
}

/// The solver's per-invocation mutable state: tentative distances,
/// predecessors, and path lengths, one entry per vertex. Owned
/// exclusively by a single [`crate::Solver`] — never shared across
/// concurrently running solves.
#[derive(Debug)]
pub struct SolverState {
    pub dist: Vec<f64>,
    pub pred: Vec<Option<usize>>,
    pub path_len: Vec<usize>,
}

impl SolverState {
    pub fn new(n: usize) -> Self {
        SolverState {
            dist: vec![f64::INFINITY; n],
            pred: vec![None; n],
            path_len: vec![0; n],
        }
    }

    /// The shared relaxation semantics used by pivot discovery, the base
    /// case, and the recursive driver: a strict improvement (under [`EPS`])
    /// overwrites the distance, predecessor, and path length; an
    /// EPS-tolerant tie adopts `u` as predecessor only if it is
    /// lexicographically smaller on `(dist, path_len, id)` than the
    /// current predecessor. Returns true iff the distance was strictly
    /// improved.
    pub fn relax(&mut self, u: usize, v: usize, candidate: f64) -> bool {
        if candidate + EPS < self.dist[v] {
            self.dist[v] = candidate;
            self.pred[v] = Some(u);
            self.path_len[v] = self.path_len[u] + 1;
            return true;
        }
        if (candidate - self.dist[v]).abs() <= EPS {
            let challenger = (candidate, self.path_len[u] + 1, u);
            let incumbent_is_worse = match self.pred[v] {
                None => true,
                Some(p) => challenger < (self.dist[p], self.path_len[p], p),
            };
            if incumbent_is_worse {
                self.pred[v] = Some(u);
                self.path_len[v] = self.path_len[u] + 1;
            }
        }
        false
    }
}
