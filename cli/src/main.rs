//! costar CLI — build a co-actor network from TMDB and export it
//!
//! Expands outward from a seed person over "acted together in a
//! highly-rated movie" relationships, then writes nodes.csv, edges.csv and
//! a weighted graph.json for visualization.

use clap::Parser;
use costar::graph::{GraphError, PersonId};
use costar::{Expander, ExpansionConfig};
use costar_tmdb::TmdbClient;
use tracing::info;

#[derive(Parser)]
#[command(name = "costar", version, about = "Co-actor network builder")]
struct Cli {
    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY")]
    api_key: String,

    /// TMDB API base URL
    #[arg(long, default_value = costar_tmdb::DEFAULT_BASE_URL, env = "TMDB_BASE_URL")]
    base_url: String,

    /// Seed person id to expand from
    #[arg(long, default_value = "5064")]
    seed: String,

    /// Display name for the seed person
    #[arg(long, default_value = "Meryl Streep")]
    seed_name: String,

    /// Minimum vote average for a credit to qualify
    #[arg(long, default_value_t = 8.0)]
    min_rating: f64,

    /// Top billed cast members taken per movie
    #[arg(long, default_value_t = 3)]
    cast_limit: usize,

    /// Number of expansion rounds
    #[arg(long, default_value_t = 3)]
    rounds: usize,

    /// Output path for the nodes CSV
    #[arg(long, default_value = "nodes.csv")]
    nodes_out: String,

    /// Output path for the edges CSV
    #[arg(long, default_value = "edges.csv")]
    edges_out: String,

    /// Output path for the weighted graph JSON
    #[arg(long, default_value = "graph.json")]
    json_out: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = TmdbClient::with_base_url(&cli.api_key, &cli.base_url);
    let config = ExpansionConfig {
        min_rating: cli.min_rating,
        cast_limit: cli.cast_limit,
        rounds: cli.rounds,
    };

    let expander = Expander::new(&client, config);
    let graph = expander.run(PersonId::new(cli.seed), &cli.seed_name).await?;

    graph.write_nodes_file(&cli.nodes_out)?;
    graph.write_edges_file(&cli.edges_out)?;
    graph.write_graph_to_json(&cli.json_out)?;
    info!(
        nodes = %cli.nodes_out,
        edges = %cli.edges_out,
        json = %cli.json_out,
        "exports written"
    );

    println!("Nodes: {}", graph.total_nodes());
    println!("Edges: {}", graph.total_edges());
    match graph.max_degree_nodes() {
        Ok(top) => {
            let mut entries: Vec<_> = top.into_iter().collect();
            entries.sort();
            for (id, degree) in entries {
                let name = graph
                    .get_node(&id)
                    .map(|n| n.name.as_str())
                    .unwrap_or("<unknown>");
                println!("Max degree: {} ({}) = {}", name, id, degree);
            }
        }
        Err(GraphError::NoEdges) => println!("Max degree: no edges in graph"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
