use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use zkp_three_coloring::crypto::hash::{Blake3CommitmentHash, CommitmentHash, Sha3CommitmentHash};
use zkp_three_coloring::protocol::messages::{RoundVerdict, SessionVerdict};
use zkp_three_coloring::protocol::session::{execute_round, ProofSession, SessionConfig};
use zkp_three_coloring::protocol::verifier::verdict_for;
use zkp_three_coloring::utils::random_graph::{random_colorable_graph, EDGE_PROBABILITY};
use zkp_three_coloring::utils::serialization::{
    load_graph_instance, load_transcript, save_graph_instance, save_transcript, GraphInstance,
    InstanceParameters, SessionTranscript,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interactive zero-knowledge proof of graph 3-colorability",
    long_about = None
)]
struct Cli {
    /// Optional toml file supplying defaults for rounds, hasher and parallel
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random properly colored instance and write it to disk
    Generate {
        #[arg(long, default_value_t = 32)]
        vertices: u32,
        #[arg(long, default_value_t = EDGE_PROBABILITY)]
        edge_probability: f64,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run a proof session locally and optionally record a transcript
    Prove {
        #[arg(short, long, value_name = "FILE")]
        instance: PathBuf,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
        #[arg(long, value_enum)]
        hasher: Option<HasherChoice>,
        /// Run rounds across rayon workers (no transcript, no early stop)
        #[arg(long)]
        parallel: bool,
    },
    /// Re-verify every round of a stored transcript
    Verify {
        #[arg(short, long, value_name = "FILE")]
        transcript: PathBuf,
        #[arg(long, value_enum)]
        hasher: Option<HasherChoice>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HasherChoice {
    Blake3,
    Sha3,
}

impl HasherChoice {
    fn build(self) -> Box<dyn CommitmentHash> {
        match self {
            HasherChoice::Blake3 => Box::new(Blake3CommitmentHash),
            HasherChoice::Sha3 => Box::new(Sha3CommitmentHash),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    rounds: Option<u32>,
    hasher: Option<String>,
    parallel: Option<bool>,
}

fn load_file_config(path: Option<&PathBuf>) -> CliResult<FileConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(FileConfig::default()),
    }
}

fn resolve_hasher(flag: Option<HasherChoice>, file: &FileConfig) -> CliResult<HasherChoice> {
    if let Some(choice) = flag {
        return Ok(choice);
    }
    match file.hasher.as_deref() {
        Some("blake3") | None => Ok(HasherChoice::Blake3),
        Some("sha3") => Ok(HasherChoice::Sha3),
        Some(other) => Err(format!("unknown hasher '{other}' in config").into()),
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let file_config = load_file_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Generate {
            vertices,
            edge_probability,
            output,
        } => {
            let mut rng = rand::rng();
            let graph = random_colorable_graph(vertices, edge_probability, &mut rng);
            let instance = GraphInstance::with_metadata(
                graph,
                InstanceParameters {
                    vertices,
                    edge_probability,
                },
            );
            save_graph_instance(&output, &instance)?;
            println!(
                "wrote instance with {} vertices, {} edges to {}",
                vertices,
                instance.graph.edges().len(),
                output.display()
            );
            Ok(())
        }
        Commands::Prove {
            instance,
            rounds,
            transcript,
            hasher,
            parallel,
        } => {
            let rounds = rounds.or(file_config.rounds).unwrap_or(20);
            let parallel = parallel || file_config.parallel.unwrap_or(false);
            let hasher = resolve_hasher(hasher, &file_config)?;
            let instance = load_graph_instance(&instance)?;
            prove(instance.graph, rounds, parallel, hasher, transcript)
        }
        Commands::Verify { transcript, hasher } => {
            let hasher = resolve_hasher(hasher, &file_config)?.build();
            let transcript = load_transcript(&transcript)?;
            verify(&transcript, &*hasher)
        }
    }
}

fn prove(
    graph: zkp_three_coloring::graph::Graph,
    rounds: u32,
    parallel: bool,
    hasher: HasherChoice,
    transcript_path: Option<PathBuf>,
) -> CliResult<()> {
    let session = ProofSession::new(graph.clone(), SessionConfig { rounds, parallel })?
        .with_hasher(hasher.build());
    println!(
        "{} edges, {} rounds, residual soundness error {:.3e}",
        session.edge_count(),
        rounds,
        session.soundness_error()
    );

    if parallel {
        if transcript_path.is_some() {
            return Err("transcript recording requires a sequential run".into());
        }
        report_verdict(session.run()?);
        return Ok(());
    }

    let hasher = hasher.build();
    let mut rng = rand::rng();
    let progress = ProgressBar::new(rounds as u64);
    let mut recorded = Vec::with_capacity(rounds as usize);

    let mut verdict = SessionVerdict::Accepted { rounds };
    for round in 0..rounds {
        let round_transcript = execute_round(&graph, &*hasher, &mut rng)?;
        progress.inc(1);
        let round_verdict = round_transcript.verdict;
        recorded.push(round_transcript);
        if let RoundVerdict::Rejected(reason) = round_verdict {
            verdict = SessionVerdict::Rejected { round, reason };
            break;
        }
    }
    progress.finish_and_clear();

    if let Some(path) = transcript_path {
        save_transcript(&path, &SessionTranscript { rounds: recorded })?;
        println!("transcript written to {}", path.display());
    }
    report_verdict(verdict);
    Ok(())
}

fn verify(transcript: &SessionTranscript, hasher: &dyn CommitmentHash) -> CliResult<()> {
    for (round, record) in transcript.rounds.iter().enumerate() {
        let verdict = verdict_for(
            &record.committed,
            record.challenge,
            record.reveal.as_ref(),
            hasher,
        );
        if let RoundVerdict::Rejected(reason) = verdict {
            println!("round {round}: REJECTED ({reason})");
            return Ok(());
        }
    }
    println!(
        "all {} recorded rounds verified against their commitments",
        transcript.rounds.len()
    );
    Ok(())
}

fn report_verdict(verdict: SessionVerdict) {
    match verdict {
        SessionVerdict::Accepted { rounds } => {
            println!("ACCEPTED after {rounds} rounds");
        }
        SessionVerdict::Rejected { round, reason } => {
            println!("REJECTED in round {round}: {reason}");
        }
    }
}
