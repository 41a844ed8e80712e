use anyhow::Result;
use clap::Parser;
use cosearch_cli::{index_directory, search_hits};
use cosearch_core::DocumentStore;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cosearch")]
#[command(about = "Rank plain-text documents against a query by cosine similarity", long_about = None)]
struct Cli {
    /// Directory of plain-text documents to index
    #[arg(long)]
    docs: String,
    /// Query to run; omit to be prompted on stdin
    #[arg(long)]
    query: Option<String>,
    /// Emit results as JSON instead of "score - preview" lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut store = DocumentStore::new();
    let indexed = index_directory(&mut store, Path::new(&cli.docs))?;
    tracing::info!(indexed, "index built");

    let query = match cli.query {
        Some(q) => q,
        None => prompt_query()?,
    };

    let hits = search_hits(&store, &query);
    if cli.json {
        println!("{}", serde_json::to_string(&hits)?);
    } else {
        for hit in &hits {
            println!("{} - {}", hit.score, hit.preview);
        }
    }
    Ok(())
}

fn prompt_query() -> Result<String> {
    print!("Enter search query: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
