use crate::graph::Graph;
use crate::protocol::messages::RoundTranscript;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstanceParameters {
    pub vertices: u32,
    pub edge_probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInstance {
    pub graph: Graph,
    pub metadata: Option<InstanceParameters>,
}

impl GraphInstance {
    pub fn new(graph: Graph) -> Self {
        GraphInstance {
            graph,
            metadata: None,
        }
    }

    pub fn with_metadata(graph: Graph, metadata: InstanceParameters) -> Self {
        GraphInstance {
            graph,
            metadata: Some(metadata),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTranscript {
    pub rounds: Vec<RoundTranscript>,
}

pub fn save_graph_instance<P: AsRef<Path>>(path: P, instance: &GraphInstance) -> io::Result<()> {
    let bytes = bincode::serialize(instance)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize instance: {err}")))?;
    fs::write(path, bytes)
}

pub fn load_graph_instance<P: AsRef<Path>>(path: P) -> io::Result<GraphInstance> {
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("deserialize instance: {err}")))
}

pub fn save_transcript<P: AsRef<Path>>(path: P, transcript: &SessionTranscript) -> io::Result<()> {
    let bytes = bincode::serialize(transcript)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize transcript: {err}")))?;
    fs::write(path, bytes)
}

pub fn load_transcript<P: AsRef<Path>>(path: P) -> io::Result<SessionTranscript> {
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes).map_err(|err| {
        io::Error::new(io::ErrorKind::Other, format!("deserialize transcript: {err}"))
    })
}
