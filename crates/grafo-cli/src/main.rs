// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `grafo`: load a graph document and run structural queries, cycle search or
//! spanning-tree construction against it.
//!
//! The document is the JSON form of [`grafo_core::GraphSnapshot`]:
//! `{"vertices": ["A", "B"], "edges": [{"name": "ab", "endpoint_a": "A",
//! "endpoint_b": "B", "weight": 1.0}]}`.
#![allow(clippy::print_stdout)]

use std::fmt::Write as _;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use grafo_core::{Graph, GraphSnapshot, MstAlgorithm};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;
mod settings;

use settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "grafo",
    version,
    about = "Inspect a graph: structure, reachability, cycles, spanning trees"
)]
struct Args {
    /// Graph document (JSON). `-` reads stdin.
    #[arg(long, short = 'g', default_value = "-")]
    graph: PathBuf,
    /// Settings file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print vertices and edges.
    Show,
    /// Tabulate structural properties.
    Summary,
    /// Degree and incident edges of one vertex.
    Degree {
        /// Vertex name.
        vertex: String,
    },
    /// Vertex pairs not joined by any edge.
    NonAdjacent,
    /// Whether two vertices are connected, and a fewest-hop path between them.
    Path {
        /// Start vertex.
        from: String,
        /// End vertex.
        to: String,
    },
    /// First simple path with exactly `length` edges.
    Walk {
        /// Number of edges.
        length: usize,
    },
    /// Find one cycle.
    Cycle,
    /// Minimum spanning tree.
    Mst {
        /// Builder to use; defaults to the configured one.
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Kruskal,
    Prim,
}

impl From<AlgorithmArg> for MstAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;
    init_tracing(&settings.log_filter)?;

    let graph = load_graph(&args.graph)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    let out = run(&graph, args.command, &settings)?;
    print!("{out}");
    Ok(())
}

fn init_tracing(fallback: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading graph from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading graph {}", path.display()))?
    };
    let snapshot: GraphSnapshot =
        serde_json::from_str(&text).context("parsing graph document")?;
    debug!(
        vertices = snapshot.vertices.len(),
        edges = snapshot.edges.len(),
        "document parsed"
    );
    Graph::try_from(snapshot).context("validating graph document")
}

fn run(graph: &Graph, command: Command, settings: &Settings) -> Result<String> {
    let mut out = String::new();
    match command {
        Command::Show => out.push_str(&render::plain(graph)),
        Command::Summary => {
            let hash = graph.snapshot().compute_hash()?;
            writeln!(out, "{}", render::summary(graph, &hash))?;
        }
        Command::Degree { vertex } => {
            if !graph.has_vertex(&vertex) {
                bail!("unknown vertex {vertex:?}");
            }
            writeln!(out, "degree({vertex}) = {}", graph.degree(&vertex))?;
            writeln!(out, "incident: {}", graph.edges_incident_to(&vertex).join(", "))?;
        }
        Command::NonAdjacent => {
            for (x, y) in graph.non_adjacent_pairs() {
                writeln!(out, "{x}-{y}")?;
            }
        }
        Command::Path { from, to } => {
            for v in [&from, &to] {
                if !graph.has_vertex(v) {
                    bail!("unknown vertex {v:?}");
                }
            }
            match graph.find_path(&from, &to) {
                Some(path) => {
                    let names: Vec<&str> = path.iter().map(|e| e.name.as_str()).collect();
                    writeln!(out, "{from} reaches {to}: {}", names.join(", "))?;
                }
                None => writeln!(out, "no path between {from} and {to}")?,
            }
        }
        Command::Walk { length } => match graph.find_path_of_length(length) {
            Some(vertices) => {
                let names: Vec<&str> = vertices.iter().map(|v| v.as_str()).collect();
                writeln!(out, "{}", names.join(" - "))?;
            }
            None => writeln!(out, "no simple path with {length} edges")?,
        },
        Command::Cycle => match graph.find_cycle() {
            Some(cycle) => writeln!(out, "{}", render::edges(cycle.edges().iter().copied()))?,
            None => writeln!(out, "no cycle")?,
        },
        Command::Mst { algorithm } => {
            let algorithm = algorithm.map_or(settings.algorithm, MstAlgorithm::from);
            let tree = graph.minimum_spanning_tree(algorithm)?;
            writeln!(out, "{}", render::edges(tree.edges().iter().copied()))?;
            writeln!(out, "algorithm: {algorithm}")?;
            writeln!(out, "total weight: {}", tree.total_weight())?;
        }
    }
    Ok(out)
}
