pub mod batched_priority;
pub mod priority_queue;

pub use batched_priority::BatchedPriority;
pub use priority_queue::BinaryHeapWrapper;
