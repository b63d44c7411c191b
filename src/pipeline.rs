use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::fetch::{self, FetchError, Fetcher};
use crate::parser::{article, headlines, headlines::HeadlineEntry};
use crate::report::{self, ContentReport};

/// Result of scraping one article page.
#[derive(Debug)]
pub enum ArticleOutcome {
    Body(String),
    NotFound,
    Failed(FetchError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub headlines: usize,
    pub bodies: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl RunStats {
    fn record(&mut self, outcome: &ArticleOutcome) {
        match outcome {
            ArticleOutcome::Body(_) => self.bodies += 1,
            ArticleOutcome::NotFound => self.not_found += 1,
            ArticleOutcome::Failed(_) => self.errors += 1,
        }
    }

    pub fn print(&self) {
        println!(
            "Done: {} articles ({} extracted, {} without content, {} errors).",
            self.headlines, self.bodies, self.not_found, self.errors,
        );
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    NoUrl,
    NoHeadlines,
    Completed(RunStats),
}

/// Fetch `raw_url` and list its headlines. Every failure is reported and
/// yields an empty list.
pub async fn scrape_headlines(fetcher: &Fetcher, raw_url: &str) -> Vec<HeadlineEntry> {
    let page_url = match fetch::parse_page_url(raw_url) {
        Ok(u) => u,
        Err(e) => {
            warn!("{}", e);
            println!("Invalid URL. Please provide a complete URL including http:// or https://.");
            return Vec::new();
        }
    };

    let html = match fetcher.get_html(page_url.as_str()).await {
        Ok(html) => html,
        Err(e) => {
            println!("An error occurred while fetching the URL: {}", e);
            return Vec::new();
        }
    };

    let entries = headlines::extract_from_html(&html, &page_url);
    info!("Found {} headlines on {}", entries.len(), page_url);
    entries
}

pub async fn scrape_article(fetcher: &Fetcher, url: &str) -> ArticleOutcome {
    match fetcher.get_html(url).await {
        Ok(html) => match article::extract_from_html(&html) {
            Some(body) => ArticleOutcome::Body(body),
            None => ArticleOutcome::NotFound,
        },
        Err(e) => {
            warn!("Article fetch failed for {}: {}", url, e);
            ArticleOutcome::Failed(e)
        }
    }
}

/// Prompt input → headlines report → content report.
pub async fn run(fetcher: &Fetcher, input: &str, out_dir: &Path) -> Result<RunOutcome> {
    let url = input.trim();
    if url.is_empty() {
        println!("No URL entered. Exiting.");
        return Ok(RunOutcome::NoUrl);
    }

    println!("Scraping headlines...");
    let entries = scrape_headlines(fetcher, url).await;
    if entries.is_empty() {
        println!("No headlines were found. Please check the URL or page structure.");
        return Ok(RunOutcome::NoHeadlines);
    }

    let path = report::write_headlines(out_dir, &entries)?;
    println!(
        "Successfully scraped {} headlines. They have been saved to '{}'.",
        entries.len(),
        path.display()
    );

    println!("Now scraping content for each article...");
    let (stats, path) = scrape_contents(fetcher, &entries, out_dir).await?;
    println!("\nAll article content has been saved to '{}'.", path.display());

    Ok(RunOutcome::Completed(stats))
}

/// One article at a time, in headline order. Failures are written inline.
async fn scrape_contents(
    fetcher: &Fetcher,
    entries: &[HeadlineEntry],
    out_dir: &Path,
) -> Result<(RunStats, std::path::PathBuf)> {
    let total = entries.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut report = ContentReport::create(out_dir)?;
    let mut stats = RunStats {
        headlines: total,
        ..Default::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        pb.suspend(|| {
            println!("Scraping content for: {} ({}/{})", entry.title, i + 1, total)
        });
        let outcome = scrape_article(fetcher, &entry.url).await;
        stats.record(&outcome);
        report.write_article(&entry.title, &outcome)?;
        pb.inc(1);
    }

    pb.finish_and_clear();
    let path = report.finish()?;
    info!(
        "Scraped {} articles ({} ok, {} not found, {} errors)",
        total, stats.bodies, stats.not_found, stats.errors
    );

    Ok((stats, path))
}
