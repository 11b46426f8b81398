use anyhow::{Context, Result};
use bibcore::bib::load_bibliography;
use bibcore::cache::CachePaths;
use bibcore::{build_index, check_entries, MatchConfig, Metric, Thresholds, SOURCES};
use clap::{ArgAction, Parser, ValueEnum};
use crawler::{refresh_cache, CrawlOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod print;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Cosine,
    Jaccard,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Cosine => Metric::Cosine,
            MetricArg::Jaccard => Metric::Jaccard,
        }
    }
}

#[derive(Parser)]
#[command(name = "bibcheck")]
#[command(about = "Double-check a BibTeX bibliography for predatory publishers and journals", long_about = None)]
struct Cli {
    /// BibTeX file to be double-checked
    bib_file: PathBuf,
    /// Refresh the local predatory CSV cache before checking
    #[arg(long, default_value_t = false)]
    refresh: bool,
    /// Cache directory (defaults to $BIBCHECK_CACHE_DIR, then the working directory)
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Similarity measure between a field value and a predatory name
    #[arg(long, value_enum, default_value_t = MetricArg::Cosine)]
    metric: MetricArg,
    /// Low, medium and high similarity thresholds; a repeated flag replaces earlier values
    #[arg(long, value_delimiter = ',', num_args = 3, action = ArgAction::Set, default_values_t = [0.7, 0.75, 0.8])]
    thresholds: Vec<f64>,
    /// Worker threads for matching (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,
    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let thresholds = Thresholds::new(cli.thresholds[0], cli.thresholds[1], cli.thresholds[2])?;
    let config = MatchConfig { thresholds, metric: cli.metric.into() };
    let paths = CachePaths::resolve(cli.cache_dir.as_deref());
    if let Some(n) = cli.threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.refresh {
        refresh(&paths)?;
    }

    let index = build_index(SOURCES, &paths).context("could not build the predatory index; run with --refresh to populate the cache")?;
    let entries = load_bibliography(&cli.bib_file)?;
    let report = check_entries(&index, &entries, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => print::print_report(&mut out, &report, &config.thresholds)?,
        Format::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

fn refresh(paths: &CachePaths) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let summary = rt.block_on(refresh_cache(SOURCES, paths, &CrawlOptions::default()))?;
    for (url, n) in &summary.written {
        tracing::info!(source = *url, records = n, "refreshed");
    }
    if !summary.failed.is_empty() {
        tracing::warn!(failed = summary.failed.len(), "some sources could not be refreshed; their previous cache is used");
    }
    Ok(())
}
