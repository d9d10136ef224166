pub mod directed;
pub mod traits;

pub use directed::DirectedGraph;
pub use traits::{Graph, MutableGraph};
