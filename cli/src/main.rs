use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use docsearch_core::config::DEFAULT_MIN_TOKEN_LEN;
use docsearch_core::{builtin_collection, load_or_empty, IndexConfig, SearchEngine, StopWords, DEFAULT_TOP_K};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod render;

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Search a small document collection by TF-IDF cosine similarity", long_about = None)]
struct Cli {
    /// Collection file (.csv, .json, .jsonl) or directory. Uses the built-in demo collection when omitted.
    #[arg(long, global = true)]
    docs: Option<PathBuf>,
    /// Stop-word list applied to documents and queries: english, indonesian or none
    #[arg(long, default_value = "english", global = true)]
    stop_words: StopWords,
    /// Drop tokens shorter than this many characters
    #[arg(long, default_value_t = DEFAULT_MIN_TOKEN_LEN, global = true)]
    min_token_len: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents against a free-text query
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long, short = 'k', default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        /// Print results as JSON instead of cards
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the titles in the collection
    Docs,
    /// Print every indexed term with its IDF weight
    Vocab,
    /// Summarize the index and the settings it was built with
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = IndexConfig { stop_words: cli.stop_words, min_token_len: cli.min_token_len };
    let documents = match &cli.docs {
        Some(path) => {
            let (docs, warning) = load_or_empty(path);
            if let Some(err) = warning {
                eprintln!("warning: {err}; continuing with an empty collection");
            }
            docs
        }
        None => builtin_collection(),
    };
    let engine = SearchEngine::new(documents, config);

    match cli.command {
        Commands::Search { query, top_k, json } => {
            if query.trim().is_empty() {
                bail!("please enter a search query");
            }
            let hits = engine.search(&query, top_k);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render::results(&query, &hits));
            }
        }
        Commands::Docs => print!("{}", render::collection(engine.documents())),
        Commands::Vocab => print!("{}", render::vocabulary(engine.index())),
        Commands::Stats => print!("{}", render::stats(&engine.stats(), engine.config())),
    }
    Ok(())
}
