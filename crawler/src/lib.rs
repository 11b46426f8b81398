use anyhow::{anyhow, Context, Result};
use bibcore::cache::{save_records, CachePaths};
use bibcore::{PredatoryRecord, PredatorySource};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_USER_AGENT: &str = "bibcheck-crawler/0.1 (+https://example.com/bot)";

#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self { timeout_secs: 30, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

#[derive(Debug, Default)]
pub struct RefreshSummary {
    /// `(source url, records written)` for every source whose cache was replaced.
    pub written: Vec<(&'static str, usize)>,
    /// Sources left untouched because fetching or extraction failed.
    pub failed: Vec<&'static str>,
}

/// Extract `(name, url)` records from one page of a source list.
/// Items whose first link is not an absolute http(s) URL are skipped.
pub fn extract_records(html: &str, source: &PredatorySource) -> Result<Vec<PredatoryRecord>> {
    let items = Selector::parse(source.item_selector)
        .map_err(|e| anyhow!("invalid item selector {:?}: {e:?}", source.item_selector))?;
    let link = Selector::parse(source.link_selector)
        .map_err(|e| anyhow!("invalid link selector {:?}: {e:?}", source.link_selector))?;

    let doc = Html::parse_document(html);
    let mut records = Vec::new();
    for item in doc.select(&items) {
        let Some(href) = item.select(&link).next().and_then(|a| a.value().attr("href")) else { continue };
        match Url::parse(href) {
            Ok(u) if u.scheme().starts_with("http") => {}
            _ => continue,
        }
        let name = item.text().collect::<String>().nfkd().collect::<String>();
        let name = name.trim();
        if name.is_empty() { continue; }
        records.push(PredatoryRecord { name: name.to_string(), url: href.to_string() });
    }
    Ok(records)
}

async fn fetch(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().await.with_context(|| format!("request to {url} failed"))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("{url} answered {status}"));
    }
    Ok(resp.text().await?)
}

async fn crawl_source(client: Client, source: PredatorySource) -> Result<Vec<PredatoryRecord>> {
    let body = fetch(&client, source.url).await?;
    extract_records(&body, &source)
}

/// Crawl every source concurrently and rewrite the cache of each one that succeeds.
/// A failed source keeps whatever cache it had before.
pub async fn refresh_cache(sources: &[PredatorySource], paths: &CachePaths, opts: &CrawlOptions) -> Result<RefreshSummary> {
    let client = Client::builder()
        .user_agent(opts.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()?;

    let handles: Vec<_> = sources
        .iter()
        .map(|source| (source.url, tokio::spawn(crawl_source(client.clone(), *source))))
        .collect();

    let mut summary = RefreshSummary::default();
    for (url, handle) in handles {
        match handle.await {
            Ok(Ok(records)) => {
                save_records(paths, url, &records)?;
                tracing::info!(source = url, records = records.len(), "cached predatory records");
                summary.written.push((url, records.len()));
            }
            Ok(Err(e)) => {
                tracing::warn!(source = url, error = %e, "crawl failed; cache left unchanged");
                summary.failed.push(url);
            }
            Err(e) => {
                tracing::warn!(source = url, error = %e, "crawl task aborted; cache left unchanged");
                summary.failed.push(url);
            }
        }
    }
    Ok(summary)
}
