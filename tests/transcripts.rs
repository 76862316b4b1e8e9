mod common;

use common::pentastar;
use std::env;
use zkp_three_coloring::utils::serialization::{
    load_graph_instance, load_transcript, save_graph_instance, save_transcript, GraphInstance,
    SessionTranscript,
};
use zkp_three_coloring::{
    default_commitment_hash, execute_round, verdict_for, RoundVerdict,
};

#[test]
fn recorded_transcript_reverifies_from_disk() {
    let graph = pentastar();
    let hasher = default_commitment_hash();
    let mut rng = rand::rng();

    let rounds: Vec<_> = (0..4)
        .map(|_| execute_round(&graph, &hasher, &mut rng).expect("round runs"))
        .collect();
    let transcript = SessionTranscript { rounds };

    let path = env::temp_dir().join("zkp3-transcript-test.bin");
    save_transcript(&path, &transcript).expect("write transcript");
    let loaded = load_transcript(&path).expect("read transcript");

    assert_eq!(loaded.rounds.len(), 4);
    for record in &loaded.rounds {
        let verdict = verdict_for(
            &record.committed,
            record.challenge,
            record.reveal.as_ref(),
            &hasher,
        );
        assert_eq!(verdict, RoundVerdict::Accepted);
    }
}

#[test]
fn graph_instance_round_trips_through_disk() {
    let instance = GraphInstance::new(pentastar());
    let path = env::temp_dir().join("zkp3-instance-test.bin");
    save_graph_instance(&path, &instance).expect("write instance");
    let loaded = load_graph_instance(&path).expect("read instance");
    assert_eq!(loaded.graph.edges(), instance.graph.edges());
}
