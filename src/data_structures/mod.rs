pub mod indexed_heap;
pub(crate) mod priority_element;
pub mod traits;
pub mod unsorted_array;

pub use indexed_heap::IndexedBinaryHeapMinPQ;
pub use traits::MinPQ;
pub use unsorted_array::UnsortedArrayMinPQ;
