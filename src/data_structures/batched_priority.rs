use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::{EPS, PULL_STALE_EPS};

/// A block of `(key, value)` pairs sorted by `(value, key)`, used as a unit
/// of storage inside `D0`. `pull` consumes blocks from the front; once a
/// block is exhausted it is dropped entirely rather than left as an empty
/// shell.
#[derive(Debug, Clone)]
struct Block {
    /// Sorted ascending by `(value, key)`.
    pairs: Vec<(usize, f64)>,
}

/// The bulk-access priority structure ("D") at the heart of the recursive
/// driver: cheap `insert`, batched `batch_prepend`, and bulk "pull the `M`
/// smallest" extraction with lazy invalidation of stale records.
///
/// This does not promise per-operation logarithmic cost. Inserts are
/// amortized into an append-only buffer (`D1`); the structure pays for a
/// global reorganization (`merge_rebuild`) only when that buffer grows
/// past `merge_threshold` or when `pull` is called. One instance is scoped
/// to a single `l >= 1` recursive-driver invocation and discarded on
/// return — see [`crate::algorithm::bmssp`].
#[derive(Debug)]
pub struct BatchedPriority {
    /// Authoritative best-known value per key.
    current: HashMap<usize, f64>,
    /// Append-only buffer of recent inserts; may contain stale records.
    d1: Vec<(usize, f64)>,
    /// Sorted blocks; the concatenation of all blocks is globally sorted
    /// by `(value, key)` and partitioned into chunks of at most
    /// `block_size`.
    d0: Vec<Block>,
    block_size: usize,
    merge_threshold: usize,
    b_global: f64,
}

impl BatchedPriority {
    /// Creates an empty structure. `block_size` is clamped to at least 16
    /// and `merge_threshold` to at least `max(block_size, 8)`, per the
    /// data model's stated lower bounds.
    pub fn new(b_global: f64, block_size: usize) -> Self {
        let block_size = block_size.max(16);
        BatchedPriority {
            current: HashMap::new(),
            d1: Vec::new(),
            d0: Vec::new(),
            block_size,
            merge_threshold: block_size.max(8),
            b_global,
        }
    }

    /// True iff no key is currently held.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Inserts `(key, value)` if it strictly improves on the best value
    /// known for `key`, or if `key` is not yet present. A non-improving
    /// insert is a silent no-op.
    pub fn insert(&mut self, key: usize, value: f64) {
        if self.try_improve(key, value) {
            self.d1.push((key, value));
            if self.d1.len() >= self.merge_threshold {
                self.merge_rebuild();
            }
        }
    }

    /// Applies the same improvement test as [`Self::insert`] to every
    /// entry, then checks the merge threshold once at the end. The name
    /// reflects the driver's use of this batch as "earlier-band"
    /// candidates fed back into `D`; it is not an ordering guarantee — all
    /// ordering is re-derived from the value on the next `pull`.
    pub fn batch_prepend(&mut self, entries: Vec<(usize, f64)>) {
        if entries.is_empty() {
            return;
        }
        for (key, value) in entries {
            if self.try_improve(key, value) {
                self.d1.push((key, value));
            }
        }
        if self.d1.len() >= self.merge_threshold {
            self.merge_rebuild();
        }
    }

    /// Returns true and records the improvement in `current` if `value`
    /// is strictly better (by [`EPS`]) than the best known value for
    /// `key`, or if `key` has no recorded value yet.
    fn try_improve(&mut self, key: usize, value: f64) -> bool {
        match self.current.get(&key) {
            Some(&old) if value + EPS >= old => false,
            _ => {
                self.current.insert(key, value);
                true
            }
        }
    }

    /// Returns up to `max_count` keys with the smallest values, removing
    /// them from `current`, plus the smallest remaining value (or
    /// `b_global` if nothing remains). Ties on value are broken by key
    /// ascending.
    pub fn pull(&mut self, max_count: usize) -> (Vec<usize>, f64) {
        if self.current.is_empty() {
            return (Vec::new(), self.b_global);
        }
        if self.d0.is_empty() && !self.d1.is_empty() {
            self.merge_rebuild();
        }

        // Min-heap over the head of each D0 block plus every live D1 item.
        // Heap entries are (value, key, provenance) where provenance
        // identifies a D0 block index (to advance its cursor) or `None`
        // for a D1 item.
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize, Option<usize>)>> =
            BinaryHeap::new();
        let mut cursors = vec![0usize; self.d0.len()];
        for (block_idx, block) in self.d0.iter().enumerate() {
            if let Some(&(key, value)) = block.pairs.first() {
                heap.push(Reverse((OrderedFloat(value), key, Some(block_idx))));
            }
        }
        for &(key, value) in &self.d1 {
            heap.push(Reverse((OrderedFloat(value), key, None)));
        }

        let mut output = Vec::new();
        while output.len() < max_count {
            let Some(Reverse((value, key, provenance))) = heap.pop() else {
                break;
            };
            let value = value.into_inner();

            if let Some(block_idx) = provenance {
                cursors[block_idx] += 1;
                if let Some(&(next_key, next_value)) =
                    self.d0[block_idx].pairs.get(cursors[block_idx])
                {
                    heap.push(Reverse((OrderedFloat(next_value), next_key, Some(block_idx))));
                }
            }

            let is_live = match self.current.get(&key) {
                Some(&authoritative) => (authoritative - value).abs() <= PULL_STALE_EPS,
                None => false,
            };
            if !is_live {
                continue;
            }

            self.current.remove(&key);
            output.push(key);
        }

        self.merge_rebuild();
        let next_bound = self
            .current
            .values()
            .copied()
            .fold(None, |acc, v| match acc {
                None => Some(v),
                Some(min) if v < min => Some(v),
                some => some,
            })
            .unwrap_or(self.b_global);

        (output, next_bound)
    }

    /// Materializes `current` sorted by `(value, key)`, chops it into
    /// blocks of at most `block_size`, and replaces `D0`/`D1` with the
    /// result. After this call `D1` is empty and `D0`'s concatenation is
    /// exactly `current` in sorted order.
    fn merge_rebuild(&mut self) {
        self.d1.clear();
        if self.current.is_empty() {
            self.d0.clear();
            return;
        }
        let mut sorted: Vec<(usize, f64)> = self
            .current
            .iter()
            .map(|(&key, &value)| (key, value))
            .collect();
        sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then(a.0.cmp(&b.0)));

        self.d0 = sorted
            .chunks(self.block_size)
            .map(|chunk| Block {
                pairs: chunk.to_vec(),
            })
            .collect();
    }
}
