use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gemini_embed::config::Config;
use gemini_embed::provider::GeminiProvider;
use gemini_embed::types::Model;

/// Gemini embedding request CLI
#[derive(Parser, Debug)]
#[command(name = "embed")]
#[command(about = "Request a text embedding and print the raw response", long_about = None)]
struct Cli {
    /// Text to embed
    text: String,

    /// Embedding model name, e.g. text-embedding-004
    #[arg(long)]
    model: Option<Model>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = Config::from_env();

    let api_key = cfg.api_key.context("GEMINI_API_KEY not set")?;
    let model = match cli.model {
        Some(model) => model,
        None => cfg.model.parse::<Model>()?,
    };
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(cfg.request_timeout));

    info!("requesting embedding from model {model}");
    let provider = GeminiProvider::new(Some(cfg.base_url), api_key, timeout);
    let exchange = provider.request_embedding(&model, &cli.text).await?;

    println!("Status Code: {}", exchange.status_code);
    println!("Response: {}", exchange.body);

    Ok(())
}
