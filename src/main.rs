use anyhow::{Context, Result};
use clap::Parser;
use code_chunker::{ChunkParser, ChunkSummary, Config};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

/// Extract functions, methods and classes from a source tree as JSON
#[derive(Parser)]
#[command(name = "code-chunker", version, about)]
struct Cli {
    /// Directory to parse
    path: PathBuf,

    /// Configuration file (defaults to the platform config location)
    #[arg(long, env = "CODE_CHUNKER_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print per-language and per-type counts instead of the chunks
    #[arg(long)]
    summary: bool,

    /// Visit files in file-name order
    #[arg(long)]
    sort: bool,

    /// Omit docstrings and JSDoc comments
    #[arg(long)]
    no_docs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.sort {
        config.walker.sort_by_file_name = true;
    }
    if cli.no_docs {
        config.extraction.include_docs = false;
    }

    let chunks = ChunkParser::with_config(config)
        .parse_directory(&cli.path)
        .await
        .with_context(|| format!("Failed to parse {}", cli.path.display()))?;

    let json = if cli.summary {
        let summary = ChunkSummary::from_chunks(&chunks);
        to_json(&summary, cli.pretty)?
    } else {
        to_json(&chunks, cli.pretty)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write output")?;

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
