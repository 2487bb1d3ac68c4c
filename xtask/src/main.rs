use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use densegraph::graph::generate;
use densegraph::MatrixGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::{Display, Write as _};
use std::process::Command;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "densegraph workspace automation and demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the five-vertex demo: listing, DFS, BFS and Dijkstra from 0 to 4
    Demo {
        /// Also print the graph as DOT
        #[arg(long, default_value_t = false)]
        dot: bool,
    },
    /// Generate a random graph and run every algorithm on it
    Random {
        /// Seed for a reproducible graph (thread RNG if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the graph as DOT
        #[arg(long, default_value_t = false)]
        dot: bool,
    },
    /// Run the criterion benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { dot } => {
            let mut graph = demo_graph();
            run_all(&mut graph, 0, 4, dot)?;
        }
        Commands::Random { seed, dot } => {
            let mut graph = match seed {
                Some(seed) => generate::random_graph(&mut StdRng::seed_from_u64(seed)),
                None => generate::random_graph_default(),
            };
            tracing::info!(?seed, order = graph.order(), edges = graph.edge_length(), "generated random graph");
            let last = graph.order() - 1;
            run_all(&mut graph, 0, last, dot)?;
        }
        Commands::Bench { quick } => run_benchmarks(quick)?,
    }

    Ok(())
}

fn demo_graph() -> MatrixGraph<u32> {
    let mut graph = MatrixGraph::with_capacity(5);
    for label in 1..=5 {
        graph.add_vertex(label);
    }
    graph.add_edge(0, 4, 100);
    graph.add_edge(0, 3, 30);
    graph.add_edge(0, 1, 10);
    graph.add_edge(1, 2, 50);
    graph.add_edge(2, 4, 10);
    graph.add_edge(2, 3, 20);
    graph.add_edge(3, 4, 60);
    graph
}

fn run_all<T: Display>(graph: &mut MatrixGraph<T>, from: usize, to: usize, dot: bool) -> Result<()> {
    if dot {
        println!("{}", to_dot(graph)?);
    }

    println!("order {}, edges {}", graph.order(), graph.edge_length());
    for listing in graph.plain_listing() {
        let label = graph.vertex(listing.position)?;
        println!("Vertex: {label} ->");
        for (neighbor, weight) in &listing.neighbors {
            println!(" {{ {}, weight: {weight} }}", graph.vertex(*neighbor)?);
        }
        println!("--------------------");
    }
    println!("isolated vertices: {}", graph.isolated_count());

    let dfs = graph.dfs(true);
    println!("dfs: {:?}", dfs.order);
    println!(
        "connected: {} ({} components, {} recorded)",
        dfs.is_connected(),
        dfs.component_count(),
        graph.connected_count()
    );

    println!("bfs: {:?}", graph.bfs());

    let paths = graph
        .dijkstra(from, to)
        .with_context(|| format!("dijkstra from {from} to {to}"))?;
    println!("cost: {:?}", paths.distances());
    println!("path: {:?}", paths.predecessors());
    match paths.path_to(to) {
        Some(route) => println!(
            "shortest {from} -> {to}: {:?} via {route:?}",
            paths.distance(to).unwrap_or_default()
        ),
        None => println!("{to} is unreachable from {from}"),
    }

    Ok(())
}

/// Undirected DOT source for a renderer, one line per edge.
fn to_dot<T: Display>(graph: &MatrixGraph<T>) -> Result<String> {
    let mut out = String::from("graph G {\n");
    for label in graph.vertices() {
        writeln!(out, "\t\"{label}\";")?;
    }
    for (a, b, weight) in graph.edges() {
        writeln!(
            out,
            "\t\"{}\" -- \"{}\" [label=\"{weight}\"];",
            graph.vertex(a)?,
            graph.vertex(b)?
        )?;
    }
    out.push('}');
    Ok(out)
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running graph benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg("graph_benchmark");

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run graph_benchmark")?;
    if !status.success() {
        anyhow::bail!("Benchmarks failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}
