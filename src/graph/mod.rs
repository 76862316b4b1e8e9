pub mod coloring;
pub mod graph;

pub use coloring::is_proper;
pub use graph::{Color, Graph, GraphError, Vertex, VertexId};
