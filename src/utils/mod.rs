pub mod permutation;
pub mod random_graph;
pub mod serialization;

pub use permutation::{all_relabelings, ColorPermutation};
pub use random_graph::{plant_collision, random_colorable_graph, EDGE_PROBABILITY};
pub use serialization::{
    load_graph_instance, load_transcript, save_graph_instance, save_transcript, GraphInstance,
    InstanceParameters, SessionTranscript,
};
