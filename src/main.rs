mod fetch;
mod parser;
mod pipeline;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use pipeline::RunOutcome;

#[derive(Parser)]
#[command(
    name = "headline_scraper",
    about = "Scrape headlines from a news page, then the text of each linked article"
)]
struct Cli {
    /// Page to scan for headlines (prompted for when omitted)
    url: Option<String>,
    /// Directory for scraped_headlines.txt and scraped_content.txt
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let input = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let fetcher = fetch::Fetcher::new()?;
    if let RunOutcome::Completed(stats) = pipeline::run(&fetcher, &input, &cli.out_dir).await? {
        stats.print();
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn prompt_for_url() -> io::Result<String> {
    print!("Enter or paste the URL of a news site: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
