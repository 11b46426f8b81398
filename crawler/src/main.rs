use anyhow::{anyhow, Result};
use bibcore::cache::CachePaths;
use bibcore::SOURCES;
use clap::Parser;
use crawler::{refresh_cache, CrawlOptions, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl the predatory journal/publisher lists into the local CSV cache")]
struct Cli {
    /// Cache directory (defaults to $BIBCHECK_CACHE_DIR, then the working directory)
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// Request timeout seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// User-Agent string sent to every source
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Cli::parse();
    let paths = CachePaths::resolve(args.cache_dir.as_deref());
    let opts = CrawlOptions { timeout_secs: args.timeout_secs, user_agent: args.user_agent };

    let summary = refresh_cache(SOURCES, &paths, &opts).await?;
    for (url, n) in &summary.written {
        eprintln!("crawled {n} journals/publishers from {url}");
    }
    if !summary.failed.is_empty() {
        return Err(anyhow!("{} of {} sources failed: {}", summary.failed.len(), SOURCES.len(), summary.failed.join(", ")));
    }
    Ok(())
}
