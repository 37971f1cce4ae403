use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use color_eyre::{eyre::WrapErr, Result};
use env_logger::Env;
use log::info;
use network_latency::{
    analysis::{
        copper::{copper_connectivity, copper_subgraph_is_connected, CopperConnectivity},
        resilience::failure_resilience,
    },
    graphs::{vec_vec_graph::VecVecGraph, Graph, Vertex},
    reading_network,
    search::{dijkstra::ShortestPathTree, spanning_tree::SpanningTree},
    OutputFormat,
};
use serde::Serialize;

/// Answers latency and robustness questions about a cable network. Without a
/// subcommand an interactive menu is shown.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file: vertex count, then `tail head material bandwidth length`
    /// per cable
    #[arg(short, long)]
    graph: PathBuf,

    /// Format of the query results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    #[command(flatten)]
    Query(Query),
    /// Menu driven session on stdin
    Interactive,
}

/// A single question answered about the loaded network.
#[derive(Subcommand, Debug, Clone, Copy)]
enum Query {
    /// Lowest latency path between two vertices
    ShortestPath {
        #[arg(short, long)]
        source: Vertex,
        #[arg(short, long)]
        target: Vertex,
    },
    /// Whether the network is copper-only or can be run on copper alone
    Copper {
        /// Also check that the copper cables connect every vertex
        #[arg(long)]
        strict: bool,
    },
    /// Lowest average latency spanning tree
    SpanningTree,
    /// Whether the network survives any two cable failures
    Failure,
}

#[derive(serde_derive::Serialize)]
struct CopperReport {
    classification: CopperConnectivity,
    #[serde(skip_serializing_if = "Option::is_none")]
    copper_subgraph_connected: Option<bool>,
}

const MENU: &str = "
Enter 1 to find the lowest latency path between any two points

Enter 2 to determine copper-only

Enter 3 to find the lowest average latency spanning tree

Enter 4 to test if the graph can survive 2-vertex failure

Enter 5 to quit the program";

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let graph = reading_network(&args.graph)
        .wrap_err_with(|| format!("failed to read network from {}", args.graph.display()))?;
    info!(
        "network has {} vertices and {} directed edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    match args.command {
        Some(Command::Query(query)) => {
            let output = run(&graph, query, args.format)?;
            println!("{}", output);
            Ok(())
        }
        Some(Command::Interactive) | None => interactive(&graph, args.format),
    }
}

fn run(graph: &VecVecGraph, query: Query, format: OutputFormat) -> Result<String> {
    match query {
        Query::ShortestPath { source, target } => {
            let tree = ShortestPathTree::new(graph, source)?;
            match tree.path_to(target)? {
                Some(path) => render(&path, &path, format),
                None => render(
                    &format!("There is no path from {} to {}.", source, target),
                    &Option::<()>::None,
                    format,
                ),
            }
        }
        Query::Copper { strict } => {
            let classification = copper_connectivity(graph)?;
            let copper_subgraph_connected = strict.then(|| copper_subgraph_is_connected(graph));

            let mut text = classification.to_string();
            match copper_subgraph_connected {
                Some(true) => text.push_str("\n-- The copper wires alone connect every vertex."),
                Some(false) => {
                    text.push_str("\n-- The copper wires alone do not connect every vertex.")
                }
                None => {}
            }

            let report = CopperReport {
                classification,
                copper_subgraph_connected,
            };
            render(&text, &report, format)
        }
        Query::SpanningTree => {
            let tree = SpanningTree::new(graph);
            render(&tree, &tree, format)
        }
        Query::Failure => {
            let outcome = failure_resilience(graph)?;
            render(&outcome, &outcome, format)
        }
    }
}

fn render(text: &dyn Display, value: &impl Serialize, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

fn interactive(graph: &VecVecGraph, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", MENU);
    while let Some(line) = lines.next() {
        let query = match line?.trim() {
            "1" => {
                let Some(source) = prompt_vertex(&mut lines, "Enter the starting point")? else {
                    break;
                };
                let Some(target) = prompt_vertex(&mut lines, "Enter the end point")? else {
                    break;
                };
                Query::ShortestPath { source, target }
            }
            "2" => Query::Copper { strict: false },
            "3" => Query::SpanningTree,
            "4" => Query::Failure,
            "5" => break,
            "" => continue,
            other => {
                println!("Unknown option '{}'", other);
                println!("{}", MENU);
                continue;
            }
        };

        // A failed query reports and returns to the menu.
        match run(graph, query, format) {
            Ok(output) => println!("{}", output),
            Err(error) => println!("Error: {}", error),
        }
        println!("{}", MENU);
    }

    Ok(())
}

/// Asks until a vertex index is entered. None on end of input.
fn prompt_vertex(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<Vertex>> {
    loop {
        println!("{}", prompt);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse() {
            Ok(vertex) => return Ok(Some(vertex)),
            Err(_) => println!("Not a vertex index"),
        }
    }
}
