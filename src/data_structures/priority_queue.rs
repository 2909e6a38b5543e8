use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-priority queue over `(vertex, distance)` pairs, used by the
/// Dijkstra baseline and by [`crate::algorithm::base_case`]'s bounded
/// exploration.
///
/// Wraps [`BinaryHeap`] (a max-heap) with [`Reverse`] to get min-heap
/// semantics, and [`OrderedFloat`] to get a total order over `f64`
/// priorities without requiring the caller to reason about `NaN`.
#[derive(Debug, Default)]
pub struct BinaryHeapWrapper {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl BinaryHeapWrapper {
    /// Creates a new empty priority queue.
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes `vertex` with the given `priority`.
    pub fn push(&mut self, vertex: usize, priority: f64) {
        self.heap.push(Reverse((OrderedFloat(priority), vertex)));
    }

    /// Removes and returns the `(vertex, priority)` pair with the smallest
    /// priority.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_priority_order() {
        let mut q = BinaryHeapWrapper::new();
        q.push(1, 5.0);
        q.push(2, 1.0);
        q.push(3, 3.0);
        assert_eq!(q.pop(), Some((2, 1.0)));
        assert_eq!(q.pop(), Some((3, 3.0)));
        assert_eq!(q.pop(), Some((1, 5.0)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn empty_queue_reports_empty() {
        let q = BinaryHeapWrapper::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }
}
