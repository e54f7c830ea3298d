//! Sitegraph command-line entry point
//!
//! Crawls a domain and prints the resulting hierarchy graph as JSON.

use anyhow::Context;
use clap::Parser;
use sitegraph::{crawl_site, CrawlOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Map a website into a rooted page hierarchy graph
#[derive(Parser, Debug)]
#[command(name = "sitegraph")]
#[command(version)]
#[command(about = "Crawl a domain into a connected page hierarchy graph", long_about = None)]
struct Cli {
    /// Domain or URL to crawl (scheme optional)
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Crawl depth limit (clamped to 1-5)
    #[arg(short, long, default_value_t = 3)]
    depth: usize,

    /// Total page budget shared by sitemap seeding and link discovery
    #[arg(long, default_value_t = 80)]
    max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the graph to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = CrawlOptions {
        depth: cli.depth,
        max_pages: cli.max_pages,
        timeout_secs: cli.timeout,
        ..CrawlOptions::default()
    };

    let graph = crawl_site(&cli.domain, options)
        .await
        .with_context(|| format!("failed to map {}", cli.domain))?;

    tracing::info!(
        "mapped {}: {} nodes, {} edges",
        graph.domain,
        graph.nodes.len(),
        graph.edges.len()
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("graph written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegraph=info,warn"),
            1 => EnvFilter::new("sitegraph=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
