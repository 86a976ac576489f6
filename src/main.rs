use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, Subcommand};
use itertools::Itertools;
use lgraphs::{
    algo::*,
    io::{DescriptionReader, GraphReader},
    prelude::*,
    utils::RandomChoice,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "lgraphs",
    about = "Runs a graph algorithm on a graph description",
    version
)]
struct Cli {
    /// Graph description to read
    input: PathBuf,

    /// Lines starting with this prefix are skipped
    #[arg(long)]
    comment: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Breadth-first traversal, one `vertex level` pair per line
    Bfs { start: String },
    /// Depth-first traversal, one `vertex depth` pair per line
    Dfs { start: String },
    /// Checks whether the graph is connected
    Connected,
    /// Prints a minimum spanning tree
    Mst,
    /// Prints the leaves of the DFS tree rooted at `root`
    Leaves { root: String },
    /// Prints an Eulerian circuit
    Euler {
        #[arg(long)]
        start: Option<String>,
        /// Seed for the choice of unused edges
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Prints all maximum cliques, one per line
    Cliques,
    /// Minimum cost walk with a full Dijkstra run
    Dijkstra { source: String, target: String },
    /// Minimum cost walk with a uniform cost search stopping at `target`
    Ucs { source: String, target: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut reader = DescriptionReader::new();
    if let Some(c) = cli.comment {
        reader = reader.comment_identifier(c);
    }

    let graph: Graph = reader.try_read_graph_file(&cli.input)?;
    info!(
        path = %cli.input.display(),
        kind = %graph.kind(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    match cli.command {
        Command::Bfs { start } => {
            for (u, level) in graph.bfs_iter(start.as_str())? {
                println!("{u} {level}");
            }
        }
        Command::Dfs { start } => {
            for (u, depth) in graph.dfs_iter(start.as_str())? {
                println!("{u} {depth}");
            }
        }
        Command::Connected => {
            if graph.is_connected()? {
                println!("connected");
            } else {
                println!("not connected");
            }
        }
        Command::Mst => {
            println!("{}", graph.minimum_spanning_tree()?);
        }
        Command::Leaves { root } => {
            println!("{}", graph.dfs_tree_leaves(root.as_str())?.iter().join(", "));
        }
        Command::Euler { start, seed } => {
            let strategy = match seed {
                Some(seed) => RandomChoice::from_rng(StdRng::seed_from_u64(seed)),
                None => RandomChoice::from_rng(StdRng::from_os_rng()),
            };
            let mut builder = EulerianCircuit::new().strategy(strategy);
            if let Some(start) = start {
                builder = builder.start(start);
            }

            let circuit = builder.build(&graph)?;
            if circuit.is_empty() {
                println!("The graph is not Eulerian.");
            } else {
                println!("{}", circuit.iter().join(" -> "));
            }
        }
        Command::Cliques => {
            for clique in graph.maximum_cliques()? {
                println!("{}", clique.iter().join(", "));
            }
        }
        Command::Dijkstra { source, target } => {
            let timer = Instant::now();
            let paths = graph.dijkstra(source.as_str())?;
            report(&paths, &target, timer)?;
        }
        Command::Ucs { source, target } => {
            let timer = Instant::now();
            let paths = graph.uniform_cost_search(source.as_str(), target.as_str())?;
            report(&paths, &target, timer)?;
        }
    }

    Ok(())
}

/// Prints the minimum cost walk to `target` together with the operation counters
fn report(paths: &ShortestPaths<'_, String>, target: &str, timer: Instant) -> Result<()> {
    let walk = paths.get_walk(target)?;
    let millis = timer.elapsed().as_secs_f64() * 1000.0;
    let source = paths.source();

    let Some(cost) = paths.distance_to(target)?.filter(|_| !walk.is_empty()) else {
        println!("No valid path found from {source} to {target}.");
        return Ok(());
    };

    let counters = paths.counters();
    println!("Minimum cost walk from {source} to {target}:");
    println!("Cost: {cost}");
    println!("Path: {}", walk.iter().join(", "));
    println!("Time: {millis:.2}ms");
    println!("Edge relaxations: {}", counters.relaxations);
    println!("Priority queue operations:");
    println!("1. pushes: {}", counters.pushes);
    println!("2. pops: {}", counters.pops);
    Ok(())
}
