//! A bounded priority queue backed by an array binary max-heap, plus an
//! in-place heapsort built on the same structure.

pub mod error;
pub mod heap;
pub mod record;

pub use error::CapacityExceeded;
pub use heap::{heapsort, BinaryMaxHeap, Sorted, DEFAULT_CAPACITY};
pub use record::Record;
