use anyhow::Result;
use axum::Router;
use clap::Parser;
use docsearch_core::config::DEFAULT_MIN_TOKEN_LEN;
use docsearch_core::{builtin_collection, load_or_empty, IndexConfig, SearchEngine, StopWords};
use docsearch_server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Collection file (.csv, .json, .jsonl) or directory. Uses the built-in demo collection when omitted.
    #[arg(long)]
    docs: Option<PathBuf>,
    /// Stop-word list: english, indonesian or none
    #[arg(long, default_value = "english")]
    stop_words: StopWords,
    #[arg(long, default_value_t = DEFAULT_MIN_TOKEN_LEN)]
    min_token_len: usize,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let documents = match &args.docs {
        // load_or_empty already logs the failure
        Some(path) => load_or_empty(path).0,
        None => builtin_collection(),
    };
    let config = IndexConfig { stop_words: args.stop_words, min_token_len: args.min_token_len };
    let engine = Arc::new(SearchEngine::new(documents, config));
    let app: Router = build_app(engine);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
